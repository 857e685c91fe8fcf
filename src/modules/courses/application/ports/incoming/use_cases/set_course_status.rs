use async_trait::async_trait;

use crate::courses::application::ports::outgoing::CourseView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetCourseStatusError {
    #[error("Course not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Activation, deactivation and soft delete.
#[async_trait]
pub trait SetCourseStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: i32,
        is_active: bool,
    ) -> Result<CourseView, SetCourseStatusError>;
}
