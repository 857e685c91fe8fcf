use async_trait::async_trait;

use crate::courses::application::ports::outgoing::{CourseListFilter, CourseView};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCoursesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListCoursesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, ListCoursesError>;
}
