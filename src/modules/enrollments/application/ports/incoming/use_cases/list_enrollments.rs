use async_trait::async_trait;

use crate::enrollments::application::ports::outgoing::{EnrollmentDetails, EnrollmentListFilter};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEnrollmentsError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListMyEnrollmentsUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<Vec<EnrollmentDetails>, ListEnrollmentsError>;
}

#[async_trait]
pub trait ListEnrollmentsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: EnrollmentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<EnrollmentDetails>, ListEnrollmentsError>;
}

#[async_trait]
pub trait ListCourseEnrollmentsUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: i32,
    ) -> Result<Vec<EnrollmentDetails>, ListEnrollmentsError>;
}
