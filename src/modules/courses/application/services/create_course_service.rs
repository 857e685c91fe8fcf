use async_trait::async_trait;
use tracing::warn;

use crate::courses::application::ports::{
    incoming::use_cases::{CreateCourseCommand, CreateCourseError, CreateCourseUseCase},
    outgoing::{CourseQuery, CourseRepository, CourseRepositoryError, CourseView},
};

#[derive(Debug, Clone)]
pub struct CreateCourseService<Q, R>
where
    Q: CourseQuery + Send + Sync,
    R: CourseRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateCourseService<Q, R>
where
    Q: CourseQuery + Send + Sync,
    R: CourseRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateCourseUseCase for CreateCourseService<Q, R>
where
    Q: CourseQuery + Send + Sync,
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCourseCommand) -> Result<CourseView, CreateCourseError> {
        let taken = self
            .query
            .code_exists(&command.data().code, None)
            .await
            .map_err(|e| CreateCourseError::RepositoryError(e.to_string()))?;

        if taken {
            warn!(code = %command.data().code, "Course code already in use");
            return Err(CreateCourseError::CodeAlreadyExists);
        }

        // The unique index still guards against a concurrent insert
        self.repository
            .create_course(command.into_data())
            .await
            .map_err(|e| match e {
                CourseRepositoryError::CodeAlreadyExists => CreateCourseError::CodeAlreadyExists,
                other => CreateCourseError::RepositoryError(other.to_string()),
            })
    }
}
