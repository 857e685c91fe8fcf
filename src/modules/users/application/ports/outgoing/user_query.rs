use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::pagination::{PageRequest, PageResult};
use crate::users::application::domain::entities::UserRole;

/// Public projection of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: i32,
    pub role: UserRole,
    pub is_active: bool,
    pub hashed_password: String,
}

/// Course a user is enrolled in.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EnrolledCourseItem {
    pub id: i32,
    pub title: String,
    pub code: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserWithEnrollments {
    #[serde(flatten)]
    pub user: UserView,
    pub enrollments: Vec<EnrolledCourseItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserListFilter {
    /// Case-insensitive substring of name or email.
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserView>, UserQueryError>;

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError>;

    async fn email_exists(&self, email: &str) -> Result<bool, UserQueryError>;

    async fn list(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserView>, UserQueryError>;

    async fn find_enrolled_courses(
        &self,
        user_id: i32,
    ) -> Result<Vec<EnrolledCourseItem>, UserQueryError>;
}
