//! Public landing page data: department listing and the upcoming events
//! feed.

mod common;

use collegegate::models::{department, event};
use common::*;

const NOW: &str = "2025-06-01 12:00:00";

#[test]
fn test_departments_are_listed_alphabetically() {
    let (_dir, conn) = setup_test_db();
    create_department(&conn, "Science Faculty", "SCI", "science");
    create_department(&conn, "Arts Faculty", "ART", "arts");
    create_department(&conn, "Commerce Faculty", "COM", "commerce");

    let departments = department::find_all(&conn).expect("Failed to list departments");
    let names: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        ["Arts Faculty", "Commerce Faculty", "Science Faculty"]
    );
}

#[test]
fn test_department_optional_fields_default_to_empty_strings() {
    let (_dir, conn) = setup_test_db();
    create_department(&conn, "B.Ed. Department", "BED", "bed");

    let departments = department::find_all(&conn).expect("Failed to list departments");
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].hod_name, "");
    assert_eq!(departments[0].description, "");
}

#[test]
fn test_upcoming_events_are_soonest_first_and_bounded() {
    let (_dir, conn) = setup_test_db();
    let organizer = create_user(&conn, "mverma", "faculty");

    create_event(&conn, "July seminar", organizer, true, "2025-07-10 10:00:00");
    create_event(&conn, "June exhibition", organizer, true, "2025-06-15 10:00:00");
    create_event(&conn, "August fest", organizer, true, "2025-08-01 10:00:00");
    create_event(&conn, "Past reunion", organizer, true, "2025-01-01 10:00:00");

    let events = event::find_upcoming(&conn, NOW, 2).expect("Failed to list events");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "June exhibition");
    assert_eq!(events[1].title, "July seminar");
}
