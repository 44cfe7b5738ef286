//! Authentication tests — password hashing and the login-time user lookup.

mod common;

use collegegate::auth::password;
use collegegate::models::profile;
use common::*;

const TEST_PASSWORD: &str = "password123";

#[test]
fn test_hash_password_produces_a_verifiable_hash() {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");

    assert!(hash.starts_with("$argon2"));
    assert!(password::verify_password(TEST_PASSWORD, &hash).expect("Verification failed"));
}

#[test]
fn test_verify_password_rejects_a_wrong_password() {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");
    let verified =
        password::verify_password("wrongpassword", &hash).expect("Verification failed");
    assert!(!verified);
}

#[test]
fn test_hashes_are_salted() {
    let hash1 = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");
    let hash2 = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");

    assert_ne!(hash1, hash2);
    assert!(password::verify_password(TEST_PASSWORD, &hash1).expect("Verification 1 failed"));
    assert!(password::verify_password(TEST_PASSWORD, &hash2).expect("Verification 2 failed"));
}

#[test]
fn test_find_auth_by_username_returns_the_stored_hash() {
    let (_dir, conn) = setup_test_db();
    create_user(&conn, "asen", "student");

    let found = profile::find_auth_by_username(&conn, "asen")
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(found.username, "asen");
    assert_eq!(found.password, DUMMY_HASH);
}

#[test]
fn test_find_auth_by_username_is_none_for_unknown_users() {
    let (_dir, conn) = setup_test_db();
    let found = profile::find_auth_by_username(&conn, "nobody").expect("Query failed");
    assert!(found.is_none());
}

#[test]
fn test_profile_lookup_distinguishes_missing_profile_from_missing_user() {
    let (_dir, conn) = setup_test_db();
    let with_profile = create_user(&conn, "asen", "student");
    let without_profile = create_user_without_profile(&conn, "ghost");

    assert!(
        profile::find_by_user_id(&conn, with_profile)
            .expect("Query failed")
            .is_some()
    );
    // An auth identity without a profile row must resolve to "no profile",
    // which the guard treats as not admissible.
    assert!(
        profile::find_by_user_id(&conn, without_profile)
            .expect("Query failed")
            .is_none()
    );
}
