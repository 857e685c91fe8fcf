use async_trait::async_trait;

use crate::courses::application::ports::outgoing::{CourseView, CourseWithStudents};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCourseError {
    #[error("Course not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCourseUseCase: Send + Sync {
    async fn execute(&self, course_id: i32) -> Result<CourseView, GetCourseError>;
}

#[async_trait]
pub trait GetCourseWithStudentsUseCase: Send + Sync {
    async fn execute(&self, course_id: i32) -> Result<CourseWithStudents, GetCourseError>;
}
