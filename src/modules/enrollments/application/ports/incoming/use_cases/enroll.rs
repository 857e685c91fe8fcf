use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;
use crate::enrollments::application::domain::policy::EnrollmentRejection;
use crate::enrollments::application::ports::outgoing::EnrollmentDetails;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrollError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("{0}")]
    Rejected(EnrollmentRejection),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EnrollUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, course_id: i32) -> Result<EnrollmentDetails, EnrollError>;
}
