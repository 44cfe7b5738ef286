use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

pub type DbPool = Pool<SqliteConnectionManager>;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub fn init_pool(database_url: &str) -> DbPool {
    let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Ok(())
    });
    Pool::builder()
        .max_size(8)
        .build(manager)
        .expect("Failed to create DB pool")
}

pub fn run_migrations(pool: &DbPool) {
    let conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

fn insert_user(
    conn: &rusqlite::Connection,
    username: &str,
    password_hash: &str,
    full_name: &str,
    email: &str,
    role: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO users (username, password) VALUES (?1, ?2)",
        params![username, password_hash],
    )?;
    let user_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO profiles (user_id, full_name, email, role) VALUES (?1, ?2, ?3, ?4)",
        params![user_id, full_name, email, role],
    )?;
    Ok(user_id)
}

/// Seed the base data every deployment needs: the four faculties and an
/// admin account. Idempotent — skipped when any user already exists.
pub fn seed_base(pool: &DbPool, admin_password_hash: &str) {
    let conn = pool.get().expect("Failed to get DB connection for seeding");

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .unwrap_or(0);
    if count > 0 {
        log::info!("Database already seeded ({count} users), skipping base seed");
        return;
    }

    let departments = [
        ("Science Faculty", "SCI", "science", "Dr. N. P. Sinha"),
        ("Arts Faculty", "ART", "arts", "Dr. Rita Kumari"),
        ("Commerce Faculty", "COM", "commerce", "Prof. S. Kumar"),
        ("B.Ed. Department", "BED", "bed", "Dr. A. Sharma"),
    ];
    for (name, code, dept_type, hod) in departments {
        conn.execute(
            "INSERT INTO departments (name, code, dept_type, hod_name) VALUES (?1, ?2, ?3, ?4)",
            params![name, code, dept_type, hod],
        )
        .expect("Failed to seed departments");
    }

    insert_user(
        &conn,
        "admin",
        admin_password_hash,
        "Portal Administrator",
        "admin@xaviers.edu.in",
        "admin",
    )
    .expect("Failed to seed admin user");

    log::info!("Base seed complete");
}

/// Seed demo accounts and sample academic data on top of the base seed.
/// Intended for staging; enabled with SEED_DEMO=1.
pub fn seed_demo(pool: &DbPool, password_hash: &str) {
    seed_base(pool, password_hash);

    let conn = pool.get().expect("Failed to get DB connection for demo seed");

    let has_demo: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM users WHERE username = 'mverma'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    if has_demo {
        log::info!("Demo data already present, skipping");
        return;
    }

    let faculty_id = insert_user(
        &conn,
        "mverma",
        password_hash,
        "Prof. Meena Verma",
        "m.verma@xaviers.edu.in",
        "faculty",
    )
    .expect("Failed to seed faculty user");
    let student_id = insert_user(
        &conn,
        "asen",
        password_hash,
        "Ankita Sen",
        "ankita.sen@student.xaviers.edu.in",
        "student",
    )
    .expect("Failed to seed student user");
    conn.execute(
        "UPDATE profiles SET enrollment_number = 'XC2024-0117', year_of_study = 2, department_id = 1 \
         WHERE user_id = ?1",
        params![student_id],
    )
    .expect("Failed to update student profile");

    let courses = [
        ("Physics Honours", "PHY101", 1i64, 4i64, 3i64, 2),
        ("Organic Chemistry", "CHM202", 1, 4, 3, 2),
        ("English Literature", "ENG110", 2, 3, 1, 1),
    ];
    for (name, code, dept, credits, semester, year) in courses {
        conn.execute(
            "INSERT INTO courses (name, code, department_id, credits, semester, year) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![name, code, dept, credits, semester, year],
        )
        .expect("Failed to seed courses");
    }

    conn.execute(
        "INSERT INTO notices (title, content, priority, author_id) VALUES \
         ('Semester III registrations open', 'Register at the college office before the 15th.', 'high', ?1), \
         ('Library timings extended', 'The central library now stays open until 9 pm on weekdays.', 'normal', ?1)",
        params![faculty_id],
    )
    .expect("Failed to seed notices");

    conn.execute(
        "INSERT INTO events (title, description, event_date, location, organizer_id) VALUES \
         ('Annual Science Exhibition', 'Student projects across all science departments.', \
          datetime('now', '+14 days'), 'Main Auditorium', ?1)",
        params![faculty_id],
    )
    .expect("Failed to seed events");

    conn.execute(
        "INSERT INTO admissions (applicant_name, email, phone, date_of_birth, address, department_preference) \
         VALUES ('Rohit Kumar', 'rohit.k@example.com', '9430012345', '2006-03-11', 'Patna', 'science')",
        [],
    )
    .expect("Failed to seed admissions");

    log::info!("Demo seed complete");
}
