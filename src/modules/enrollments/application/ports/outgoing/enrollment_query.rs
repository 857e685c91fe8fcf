use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::pagination::{PageRequest, PageResult};
use crate::users::application::domain::entities::UserRole;

/// Bare enrollment row, used for ownership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentRecord {
    pub id: i32,
    pub user_id: i32,
    pub course_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EnrollmentUserItem {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EnrollmentCourseItem {
    pub id: i32,
    pub title: String,
    pub code: String,
    pub capacity: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EnrollmentDetails {
    pub id: i32,
    pub user_id: i32,
    pub course_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: EnrollmentUserItem,
    pub course: EnrollmentCourseItem,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrollmentListFilter {
    pub user_id: Option<i32>,
    pub course_id: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrollmentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EnrollmentQuery: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<EnrollmentRecord>, EnrollmentQueryError>;

    async fn find_by_user_and_course(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<EnrollmentRecord>, EnrollmentQueryError>;

    async fn find_details(&self, id: i32)
        -> Result<Option<EnrollmentDetails>, EnrollmentQueryError>;

    /// Every matching enrollment, oldest first.
    async fn list_details(
        &self,
        filter: EnrollmentListFilter,
    ) -> Result<Vec<EnrollmentDetails>, EnrollmentQueryError>;

    async fn page_details(
        &self,
        filter: EnrollmentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<EnrollmentDetails>, EnrollmentQueryError>;

    async fn course_exists(&self, course_id: i32) -> Result<bool, EnrollmentQueryError>;
}
