use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::{sea_orm_active_enums::UserRole, users};

/// Identity carried inside a signed access token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct AuthUser {
    pub id: i32,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_self_or_admin(&self, user_id: i32) -> bool {
        self.is_admin() || self.id == user_id
    }
}

/// Request-scoped authentication state, `None` for anonymous callers.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct AuthSchema {
    pub user: Option<AuthUser>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSchema {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for UserSchema {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            phone: user.phone,
            avatar: user.avatar,
            created_at: user.created_at.to_utc(),
        }
    }
}

impl From<&users::Model> for AuthUser {
    fn from(user: &users::Model) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokensSchema {
    pub access_token: String,
    pub user: UserSchema,
}
