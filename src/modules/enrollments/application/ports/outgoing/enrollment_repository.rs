use async_trait::async_trait;

use super::EnrollmentRecord;
use crate::enrollments::application::domain::policy::EnrollmentRejection;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrollmentRepositoryError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("{0}")]
    Rejected(EnrollmentRejection),

    #[error("Enrollment not found")]
    EnrollmentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Admits `user_id` into `course_id` while holding the course row lock.
    async fn enroll(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<EnrollmentRecord, EnrollmentRepositoryError>;

    async fn delete(&self, enrollment_id: i32) -> Result<(), EnrollmentRepositoryError>;
}
