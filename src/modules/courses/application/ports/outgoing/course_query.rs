use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::courses::application::domain::entities::Seats;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CourseView {
    pub id: i32,
    pub title: String,
    pub code: String,
    pub capacity: i32,
    pub is_active: bool,
    pub enrolled_count: u64,
    pub is_full: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseView {
    /// Sets `is_full` from `capacity` and `enrolled_count`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        title: String,
        code: String,
        capacity: i32,
        is_active: bool,
        enrolled_count: u64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            code,
            capacity,
            is_active,
            enrolled_count,
            is_full: Seats::new(capacity, enrolled_count).is_full(),
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EnrolledStudentItem {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CourseWithStudents {
    #[serde(flatten)]
    pub course: CourseView,
    pub enrollments: Vec<EnrolledStudentItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseListFilter {
    /// Case-insensitive substring of title or code.
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CourseQuery: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<CourseView>, CourseQueryError>;

    async fn list(
        &self,
        filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, CourseQueryError>;

    async fn find_enrolled_students(
        &self,
        course_id: i32,
    ) -> Result<Vec<EnrolledStudentItem>, CourseQueryError>;

    /// `exclude_id` skips the course being edited.
    async fn code_exists(
        &self,
        code: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, CourseQueryError>;
}
