use async_trait::async_trait;

use crate::users::application::domain::entities::UserRole;

use super::user_query::UserView;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub role: UserRole,
}

/// `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserData {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserView, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: i32,
        data: UpdateUserData,
    ) -> Result<UserView, UserRepositoryError>;
}
