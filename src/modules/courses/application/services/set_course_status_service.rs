use async_trait::async_trait;
use tracing::info;

use crate::courses::application::ports::{
    incoming::use_cases::{SetCourseStatusError, SetCourseStatusUseCase},
    outgoing::{CourseRepository, CourseRepositoryError, CourseView},
};

#[derive(Debug, Clone)]
pub struct SetCourseStatusService<R>
where
    R: CourseRepository + Send + Sync,
{
    repository: R,
}

impl<R> SetCourseStatusService<R>
where
    R: CourseRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetCourseStatusUseCase for SetCourseStatusService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        course_id: i32,
        is_active: bool,
    ) -> Result<CourseView, SetCourseStatusError> {
        let course = self
            .repository
            .set_active(course_id, is_active)
            .await
            .map_err(|e| match e {
                CourseRepositoryError::CourseNotFound => SetCourseStatusError::NotFound,
                other => SetCourseStatusError::RepositoryError(other.to_string()),
            })?;

        info!(course_id, is_active, "Course status changed");
        Ok(course)
    }
}
