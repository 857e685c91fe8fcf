use async_trait::async_trait;

use crate::enrollments::application::ports::{
    incoming::use_cases::{
        ListCourseEnrollmentsUseCase, ListEnrollmentsError, ListEnrollmentsUseCase,
        ListMyEnrollmentsUseCase,
    },
    outgoing::{EnrollmentDetails, EnrollmentListFilter, EnrollmentQuery, EnrollmentQueryError},
};
use crate::shared::pagination::{PageRequest, PageResult};

fn query_err(e: EnrollmentQueryError) -> ListEnrollmentsError {
    ListEnrollmentsError::QueryError(e.to_string())
}

#[derive(Debug, Clone)]
pub struct ListMyEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListMyEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListMyEnrollmentsUseCase for ListMyEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<Vec<EnrollmentDetails>, ListEnrollmentsError> {
        self.query
            .list_details(EnrollmentListFilter {
                user_id: Some(user_id),
                course_id: None,
            })
            .await
            .map_err(query_err)
    }
}

#[derive(Debug, Clone)]
pub struct ListEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListEnrollmentsUseCase for ListEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: EnrollmentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<EnrollmentDetails>, ListEnrollmentsError> {
        self.query.page_details(filter, page).await.map_err(query_err)
    }
}

#[derive(Debug, Clone)]
pub struct ListCourseEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCourseEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCourseEnrollmentsUseCase for ListCourseEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        course_id: i32,
    ) -> Result<Vec<EnrollmentDetails>, ListEnrollmentsError> {
        if !self.query.course_exists(course_id).await.map_err(query_err)? {
            return Err(ListEnrollmentsError::CourseNotFound);
        }

        self.query
            .list_details(EnrollmentListFilter {
                user_id: None,
                course_id: Some(course_id),
            })
            .await
            .map_err(query_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrollments::application::ports::outgoing::EnrollmentRecord;
    use crate::enrollments::application::services::test_doubles::StubEnrollmentQuery;

    fn query() -> StubEnrollmentQuery {
        StubEnrollmentQuery {
            records: vec![
                EnrollmentRecord { id: 1, user_id: 4, course_id: 2 },
                EnrollmentRecord { id: 2, user_id: 5, course_id: 2 },
                EnrollmentRecord { id: 3, user_id: 4, course_id: 3 },
            ],
            course_exists: true,
            fail: false,
        }
    }

    #[tokio::test]
    async fn my_enrollments_filters_by_user() {
        let result = ListMyEnrollmentsService::new(query()).execute(4).await.unwrap();

        let ids: Vec<i32> = result.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn admin_listing_is_paginated() {
        let page = ListEnrollmentsService::new(query())
            .execute(
                EnrollmentListFilter {
                    user_id: None,
                    course_id: Some(2),
                },
                PageRequest::new(Some(0), Some(10)),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.limit, 10);
    }

    #[tokio::test]
    async fn course_enrollments_require_existing_course() {
        let mut missing = query();
        missing.course_exists = false;

        let result = ListCourseEnrollmentsService::new(missing).execute(2).await;
        assert!(matches!(result, Err(ListEnrollmentsError::CourseNotFound)));
    }

    #[tokio::test]
    async fn course_enrollments_filter_by_course() {
        let result = ListCourseEnrollmentsService::new(query())
            .execute(2)
            .await
            .unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn query_failure_is_mapped() {
        let mut failing = query();
        failing.fail = true;

        let result = ListMyEnrollmentsService::new(failing).execute(4).await;
        assert!(matches!(result, Err(ListEnrollmentsError::QueryError(_))));
    }
}
