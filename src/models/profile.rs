use rusqlite::{Connection, params};

/// Portal roles. Closed set — anything else stored in the role column is
/// treated as unrecognized and fails closed at the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Faculty,
    Student,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "faculty" => Some(Role::Faculty),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Faculty => "faculty",
            Role::Student => "student",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Faculty => "Faculty",
            Role::Student => "Student",
        }
    }
}

/// Application user record. Role is assigned externally (seed or admin
/// tooling) and never changed from this layer; it is kept as the raw stored
/// string so unrecognized values survive to the dispatcher instead of
/// failing at load time.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub department_id: Option<i64>,
    pub enrollment_number: Option<String>,
    pub year_of_study: Option<i64>,
}

impl Profile {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// Internal auth struct — includes the password hash, never passed to
/// templates.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub password: String,
}

fn row_to_profile(row: &rusqlite::Row) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        full_name: row.get("full_name")?,
        email: row.get("email")?,
        role: row.get("role")?,
        department_id: row.get("department_id")?,
        enrollment_number: row.get("enrollment_number")?,
        year_of_study: row.get("year_of_study")?,
    })
}

pub fn find_by_user_id(conn: &Connection, user_id: i64) -> rusqlite::Result<Option<Profile>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, full_name, email, role, department_id, enrollment_number, year_of_study \
         FROM profiles WHERE user_id = ?1",
    )?;
    let mut rows = stmt.query_map(params![user_id], row_to_profile)?;
    rows.next().transpose()
}

pub fn find_auth_by_username(
    conn: &Connection,
    username: &str,
) -> rusqlite::Result<Option<AuthUser>> {
    let mut stmt =
        conn.prepare("SELECT id, username, password FROM users WHERE username = ?1")?;
    let mut rows = stmt.query_map(params![username], |row| {
        Ok(AuthUser {
            id: row.get("id")?,
            username: row.get("username")?,
            password: row.get("password")?,
        })
    })?;
    rows.next().transpose()
}

pub fn count_by_role(conn: &Connection, role: Role) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM profiles WHERE role = ?1",
        params![role.as_str()],
        |row| row.get(0),
    )
}
