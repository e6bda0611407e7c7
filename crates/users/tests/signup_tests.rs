//! Integration tests for signup and authentication against a real
//! migrated database.

use crimemap_config::DatabaseConfig;
use crimemap_database::{initialize_database, UserError, UserRepository};
use crimemap_users::{SignupRequest, UserService};
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn create_test_database() -> (SqlitePool, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test_users.db");

    let config = DatabaseConfig {
        url: format!("sqlite:{}", db_path.display()),
        max_connections: 1,
    };

    let pool = initialize_database(&config).await.unwrap();
    (pool, temp_dir)
}

fn alice_signup() -> SignupRequest {
    SignupRequest {
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret1".to_string(),
    }
}

#[tokio::test]
async fn signup_stores_a_hash_that_verifies() {
    let (pool, _temp_dir) = create_test_database().await;
    let service = UserService::new(pool.clone());

    let user = service.signup(alice_signup()).await.unwrap();
    assert_ne!(user.password_hash, "secret1");

    let stored = UserRepository::new(pool)
        .find_by_username("alice")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(stored.password_hash, "secret1");

    let authenticated = service.authenticate("alice", "secret1").await.unwrap();
    assert_eq!(authenticated.unwrap().id, user.id);
}

#[tokio::test]
async fn wrong_password_and_unknown_user_share_a_sentinel() {
    let (pool, _temp_dir) = create_test_database().await;
    let service = UserService::new(pool);

    service.signup(alice_signup()).await.unwrap();

    let wrong_password = service.authenticate("alice", "wrong").await.unwrap();
    let unknown_user = service.authenticate("nosuchuser", "anything").await.unwrap();

    assert!(wrong_password.is_none());
    assert!(unknown_user.is_none());
}

#[tokio::test]
async fn empty_username_fails_before_persistence() {
    let (pool, _temp_dir) = create_test_database().await;
    let service = UserService::new(pool.clone());

    let mut request = alice_signup();
    request.username = String::new();

    let err = service.signup(request).await.unwrap_err();
    assert!(matches!(err, UserError::ValidationFailed(_)));

    // Nothing was written
    let count = UserRepository::new(pool).count().await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn empty_password_fails_validation() {
    let (pool, _temp_dir) = create_test_database().await;
    let service = UserService::new(pool);

    let mut request = alice_signup();
    request.password = String::new();

    let err = service.signup(request).await.unwrap_err();
    assert!(matches!(err, UserError::ValidationFailed(_)));
}

#[tokio::test]
async fn duplicate_signup_surfaces_constraint_errors() {
    let (pool, _temp_dir) = create_test_database().await;
    let service = UserService::new(pool);

    service.signup(alice_signup()).await.unwrap();

    let mut same_username = alice_signup();
    same_username.email = "other@example.com".to_string();
    let err = service.signup(same_username).await.unwrap_err();
    assert!(matches!(err, UserError::UsernameAlreadyExists));

    let mut same_email = alice_signup();
    same_email.username = "alice2".to_string();
    let err = service.signup(same_email).await.unwrap_err();
    assert!(matches!(err, UserError::EmailAlreadyExists));
}

#[tokio::test]
async fn lookup_helpers_round_out_the_service() {
    let (pool, _temp_dir) = create_test_database().await;
    let service = UserService::new(pool);

    let user = service.signup(alice_signup()).await.unwrap();

    let by_id = service.get_user(user.id).await.unwrap();
    assert_eq!(by_id.username, "alice");

    let by_email = service.get_user_by_email("alice@example.com").await.unwrap();
    assert_eq!(by_email.unwrap().id, user.id);

    let missing = service.get_user(9999).await.unwrap_err();
    assert!(matches!(missing, UserError::UserNotFound));
}
