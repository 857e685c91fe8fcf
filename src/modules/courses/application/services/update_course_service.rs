use async_trait::async_trait;
use tracing::warn;

use crate::courses::application::ports::{
    incoming::use_cases::{UpdateCourseCommand, UpdateCourseError, UpdateCourseUseCase},
    outgoing::{CourseQuery, CourseRepository, CourseRepositoryError, CourseView},
};

#[derive(Debug, Clone)]
pub struct UpdateCourseService<Q, R>
where
    Q: CourseQuery + Send + Sync,
    R: CourseRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateCourseService<Q, R>
where
    Q: CourseQuery + Send + Sync,
    R: CourseRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateCourseUseCase for UpdateCourseService<Q, R>
where
    Q: CourseQuery + Send + Sync,
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateCourseCommand) -> Result<CourseView, UpdateCourseError> {
        self.query
            .find_by_id(command.course_id())
            .await
            .map_err(|e| UpdateCourseError::RepositoryError(e.to_string()))?
            .ok_or(UpdateCourseError::NotFound)?;

        if let Some(code) = command.changes().code.as_deref() {
            let taken = self
                .query
                .code_exists(code, Some(command.course_id()))
                .await
                .map_err(|e| UpdateCourseError::RepositoryError(e.to_string()))?;

            if taken {
                warn!(course_id = command.course_id(), code, "Course code already in use");
                return Err(UpdateCourseError::CodeAlreadyExists);
            }
        }

        self.repository
            .update_course(command.course_id(), command.changes().clone())
            .await
            .map_err(|e| match e {
                CourseRepositoryError::CourseNotFound => UpdateCourseError::NotFound,
                CourseRepositoryError::CodeAlreadyExists => UpdateCourseError::CodeAlreadyExists,
                CourseRepositoryError::CapacityBelowEnrollment => {
                    UpdateCourseError::CapacityBelowEnrollment
                }
                CourseRepositoryError::DatabaseError(msg) => UpdateCourseError::RepositoryError(msg),
            })
    }
}
