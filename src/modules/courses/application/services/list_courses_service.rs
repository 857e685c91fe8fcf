use async_trait::async_trait;

use crate::courses::application::ports::{
    incoming::use_cases::{ListCoursesError, ListCoursesUseCase},
    outgoing::{CourseListFilter, CourseQuery, CourseView},
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct ListCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCoursesUseCase for ListCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, ListCoursesError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| ListCoursesError::QueryError(e.to_string()))
    }
}
