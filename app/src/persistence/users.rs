use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    Set,
};
use tracing::info;

use models::domains::{sea_orm_active_enums::UserRole, users};
use models::params::user::{
    ChangePasswordParams, CreateUserParams, LoginUserParams, SignupParams, UpdateUserParams,
};
use models::schemas::user::AuthUser;

use super::{is_unique_violation, non_blank};
use crate::error::{AppError, AppResult};
use crate::utils::password;

const DEMO_USERS: [(&str, &str, &str, UserRole); 4] = [
    ("Admin User", "admin@example.com", "Admin@123", UserRole::Admin),
    ("Athlete User", "athlete@example.com", "Athlete@123", UserRole::Athlete),
    ("Coach User", "coach@example.com", "Coach@123", UserRole::Coach),
    ("Referee User", "referee@example.com", "Referee@123", UserRole::Referee),
];

pub async fn create_user(
    db: &DbConn,
    full_name: &str,
    email: &str,
    password: &str,
    role: UserRole,
) -> AppResult<users::Model> {
    let email = email.trim().to_lowercase();
    let existing_user = users::Entity::find()
        .filter(users::Column::Email.eq(&email))
        .one(db)
        .await?;
    if existing_user.is_some() {
        return Err(AppError::EmailTaken);
    }

    let password_hash = password::hash(password)?;

    users::ActiveModel {
        full_name: Set(full_name.trim().to_string()),
        email: Set(email),
        password_hash: Set(password_hash),
        role: Set(role),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::EmailTaken
        } else {
            e.into()
        }
    })
}

/// Self-service account creation; always an athlete.
pub async fn signup(db: &DbConn, params: SignupParams) -> AppResult<users::Model> {
    create_user(
        db,
        &params.full_name,
        &params.email,
        &params.password,
        UserRole::Athlete,
    )
    .await
}

pub async fn create_user_as_admin(
    db: &DbConn,
    params: CreateUserParams,
) -> AppResult<users::Model> {
    create_user(
        db,
        &params.full_name,
        &params.email,
        &params.password,
        params.role,
    )
    .await
}

pub async fn login_user(
    db: &DbConn,
    LoginUserParams { email, password }: LoginUserParams,
) -> AppResult<users::Model> {
    let user = users::Entity::find()
        .filter(users::Column::Email.eq(email.trim().to_lowercase()))
        .one(db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !password::verify(&password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }
    Ok(user)
}

pub async fn list_users(db: &DbConn) -> AppResult<Vec<users::Model>> {
    Ok(users::Entity::find()
        .order_by_desc(users::Column::Id)
        .all(db)
        .await?)
}

pub async fn get_user(db: &DbConn, id: i32) -> AppResult<users::Model> {
    users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("user"))
}

/// Updates profile fields. A role change is only accepted from an admin.
pub async fn update_user(
    db: &DbConn,
    id: i32,
    params: UpdateUserParams,
    caller: &AuthUser,
) -> AppResult<users::Model> {
    let user = get_user(db, id).await?;

    if params.role.is_some_and(|role| role != user.role) && !caller.is_admin() {
        return Err(AppError::Forbidden);
    }

    let mut user = user.into_active_model();
    user.full_name = Set(params.full_name.trim().to_string());
    user.phone = Set(non_blank(params.phone));
    if let Some(role) = params.role {
        user.role = Set(role);
    }
    Ok(user.update(db).await?)
}

pub async fn change_password(
    db: &DbConn,
    id: i32,
    params: ChangePasswordParams,
) -> AppResult<()> {
    let user = get_user(db, id).await?;

    if !password::verify(&params.current_password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let mut user = user.into_active_model();
    user.password_hash = Set(password::hash(&params.new_password)?);
    user.update(db).await?;
    Ok(())
}

pub async fn delete_user(db: &DbConn, id: i32) -> AppResult<()> {
    let result = users::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("user"));
    }
    Ok(())
}

/// Creates one account per role unless its email is already taken.
pub async fn seed_demo_users(db: &DbConn) -> AppResult<usize> {
    let mut created = 0;
    for (full_name, email, password, role) in DEMO_USERS {
        match create_user(db, full_name, email, password, role).await {
            Ok(user) => {
                info!(email = %user.email, role = %user.role, "Seeded demo user");
                created += 1;
            }
            Err(AppError::EmailTaken) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(created)
}
