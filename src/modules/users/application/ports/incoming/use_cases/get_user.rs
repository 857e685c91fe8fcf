use async_trait::async_trait;

use crate::users::application::ports::outgoing::{UserView, UserWithEnrollments};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserError {
    #[error("User not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<UserView, GetUserError>;
}

#[async_trait]
pub trait GetUserWithEnrollmentsUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<UserWithEnrollments, GetUserError>;
}
