use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeregisterError {
    #[error("Enrollment not found")]
    EnrollmentNotFound,

    #[error("Cannot deregister another student")]
    NotOwner,

    #[error("Not enrolled")]
    NotEnrolled,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Removes an enrollment by id. Owners and admins only.
#[async_trait]
pub trait DeregisterUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, enrollment_id: i32) -> Result<(), DeregisterError>;
}

/// Removes the caller's own enrollment in a course.
#[async_trait]
pub trait DeregisterFromCourseUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, course_id: i32) -> Result<(), DeregisterError>;
}
