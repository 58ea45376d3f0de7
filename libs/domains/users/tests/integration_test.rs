//! Integration tests for the Users domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Database queries work correctly
//! - The unique email constraint is enforced
//! - Concurrent signups are handled properly

use domain_users::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn new_user(builder: &TestDataBuilder, suffix: &str) -> NewUser {
    NewUser {
        name: builder.name("user", suffix),
        email: builder.email(suffix),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        role: Role::User,
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("users_create_and_get");

    let input = new_user(&builder, "main");
    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.email, input.email);
    assert_eq!(created.role, Role::User);

    let by_id = repo.get_by_id(created.id).await.unwrap();
    let by_id = assert_some(by_id, "user should exist by id");
    assert_uuid_eq(by_id.id, created.id, "retrieved user id");

    let by_email = repo.get_by_email(&input.email).await.unwrap();
    let by_email = assert_some(by_email, "user should exist by email");
    assert_eq!(by_email.password_hash, input.password_hash);
}

#[tokio::test]
async fn test_unique_email_constraint() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("users_unique_email");

    let input = new_user(&builder, "dup");

    repo.create(input.clone()).await.unwrap();

    // Second insert hits the unique index, not the service pre-check
    let result = repo.create(input).await;
    assert!(
        matches!(result, Err(UserError::DuplicateEmail(_))),
        "Expected DuplicateEmail error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_exists_by_email() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("users_exists");

    let input = new_user(&builder, "exists");

    assert!(!repo.exists_by_email(&input.email).await.unwrap());
    repo.create(input.clone()).await.unwrap();
    assert!(repo.exists_by_email(&input.email).await.unwrap());
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_register_then_authenticate() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let service = UserService::new(repo);
    let builder = TestDataBuilder::from_test_name("users_register_auth");

    let email = builder.email("roundtrip");

    let registered = service
        .register(SignupRequest {
            name: "Ada".to_string(),
            email: email.clone(),
            password: "hunter2hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(registered.role, Role::User);

    let authenticated = service
        .authenticate(LoginRequest {
            email: email.clone(),
            password: "hunter2hunter2".to_string(),
        })
        .await
        .unwrap();
    assert_uuid_eq(authenticated.id, registered.id, "authenticated user id");

    let result = service
        .authenticate(LoginRequest {
            email,
            password: "wrong-password".to_string(),
        })
        .await;
    assert!(matches!(result, Err(UserError::InvalidCredentials)));
}

// ============================================================================
// Concurrent Operations Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_signups_with_same_email() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("users_concurrent");

    let email = builder.email("race");

    // Fire several signups for the same email at once. Exactly one may win;
    // the rest must fail with DuplicateEmail, never a raw database error.
    let mut handles = vec![];
    for _ in 0..5 {
        let repo = PgUserRepository::new(db.connection());
        let email = email.clone();

        handles.push(tokio::spawn(async move {
            let service = UserService::new(repo);
            service
                .register(SignupRequest {
                    name: "Racer".to_string(),
                    email,
                    password: "hunter2hunter2".to_string(),
                })
                .await
        }));
    }

    let results: Vec<_> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one signup should win the race");

    for result in results.into_iter().filter(|r| r.is_err()) {
        assert!(
            matches!(result, Err(UserError::DuplicateEmail(_))),
            "losers should see DuplicateEmail"
        );
    }
}
