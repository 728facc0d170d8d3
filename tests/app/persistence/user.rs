use app::error::AppError;
use app::persistence::users::{
    change_password, delete_user, get_user, login_user, seed_demo_users, signup, update_user,
};
use models::domains::sea_orm_active_enums::UserRole;
use models::params::user::{ChangePasswordParams, LoginUserParams, SignupParams, UpdateUserParams};
use models::schemas::user::AuthUser;

use crate::common::{insert_user, test_state};

fn signup_params(email: &str) -> SignupParams {
    SignupParams {
        full_name: "Ama Mensah".to_string(),
        email: email.to_string(),
        password: "Secret@123".to_string(),
    }
}

fn login(email: &str, password: &str) -> LoginUserParams {
    LoginUserParams {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn signup_then_login() {
    let (state, _) = test_state().await;

    let user = signup(&state.conn, signup_params("Ama@Example.com")).await.unwrap();
    assert_eq!(user.role, UserRole::Athlete);
    assert_eq!(user.email, "ama@example.com");
    assert_ne!(user.password_hash, "Secret@123");

    let logged_in = login_user(&state.conn, login("ama@example.com", "Secret@123"))
        .await
        .unwrap();
    assert_eq!(logged_in.id, user.id);

    let wrong = login_user(&state.conn, login("ama@example.com", "nope")).await;
    assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
    let unknown = login_user(&state.conn, login("nobody@example.com", "Secret@123")).await;
    assert!(matches!(unknown, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn email_is_unique() {
    let (state, _) = test_state().await;
    signup(&state.conn, signup_params("ama@example.com")).await.unwrap();

    let again = signup(&state.conn, signup_params("AMA@example.com")).await;
    assert!(matches!(again, Err(AppError::EmailTaken)));
}

#[tokio::test]
async fn only_admins_change_roles() {
    let (state, _) = test_state().await;
    let athlete = insert_user(&state.conn, "Kofi Boateng", UserRole::Athlete).await;
    let admin = insert_user(&state.conn, "Head Admin", UserRole::Admin).await;
    let params = || UpdateUserParams {
        full_name: "Kofi B.".to_string(),
        phone: Some("0240000000".to_string()),
        role: Some(UserRole::Coach),
    };

    let by_self = update_user(&state.conn, athlete.id, params(), &AuthUser::from(&athlete)).await;
    assert!(matches!(by_self, Err(AppError::Forbidden)));

    let by_admin = update_user(&state.conn, athlete.id, params(), &AuthUser::from(&admin))
        .await
        .unwrap();
    assert_eq!(by_admin.role, UserRole::Coach);
    assert_eq!(by_admin.full_name, "Kofi B.");
    assert_eq!(by_admin.phone.as_deref(), Some("0240000000"));
}

#[tokio::test]
async fn password_change_requires_current_password() {
    let (state, _) = test_state().await;
    let user = signup(&state.conn, signup_params("ama@example.com")).await.unwrap();

    let wrong = change_password(
        &state.conn,
        user.id,
        ChangePasswordParams {
            current_password: "guess".to_string(),
            new_password: "Another@456".to_string(),
        },
    )
    .await;
    assert!(matches!(wrong, Err(AppError::InvalidCredentials)));

    change_password(
        &state.conn,
        user.id,
        ChangePasswordParams {
            current_password: "Secret@123".to_string(),
            new_password: "Another@456".to_string(),
        },
    )
    .await
    .unwrap();
    login_user(&state.conn, login("ama@example.com", "Another@456"))
        .await
        .unwrap();
}

#[tokio::test]
async fn deleted_user_is_gone() {
    let (state, _) = test_state().await;
    let user = insert_user(&state.conn, "Yaw Asante", UserRole::Referee).await;

    delete_user(&state.conn, user.id).await.unwrap();

    assert!(matches!(get_user(&state.conn, user.id).await, Err(AppError::NotFound("user"))));
    assert!(matches!(delete_user(&state.conn, user.id).await, Err(AppError::NotFound("user"))));
}

#[tokio::test]
async fn demo_seeding_is_idempotent() {
    let (state, _) = test_state().await;

    assert_eq!(seed_demo_users(&state.conn).await.unwrap(), 4);
    assert_eq!(seed_demo_users(&state.conn).await.unwrap(), 0);

    let admin = login_user(&state.conn, login("admin@example.com", "Admin@123"))
        .await
        .unwrap();
    assert_eq!(admin.role, UserRole::Admin);
}
