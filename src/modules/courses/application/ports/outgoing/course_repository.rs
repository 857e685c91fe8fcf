use async_trait::async_trait;

use super::CourseView;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCourseData {
    pub title: String,
    pub code: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCourseData {
    pub title: Option<String>,
    pub code: Option<String>,
    pub capacity: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseRepositoryError {
    #[error("Course code already exists")]
    CodeAlreadyExists,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Capacity cannot be lower than current enrollment count")]
    CapacityBelowEnrollment,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create_course(&self, data: CreateCourseData)
        -> Result<CourseView, CourseRepositoryError>;

    /// Rejects a capacity below the course's current enrollment count.
    async fn update_course(
        &self,
        course_id: i32,
        data: UpdateCourseData,
    ) -> Result<CourseView, CourseRepositoryError>;

    async fn set_active(
        &self,
        course_id: i32,
        is_active: bool,
    ) -> Result<CourseView, CourseRepositoryError>;
}
