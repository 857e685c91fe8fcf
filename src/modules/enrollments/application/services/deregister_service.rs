use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::Actor;
use crate::enrollments::application::domain::policy::EnrollmentPolicy;
use crate::enrollments::application::ports::{
    incoming::use_cases::{DeregisterError, DeregisterFromCourseUseCase, DeregisterUseCase},
    outgoing::{EnrollmentQuery, EnrollmentRepository, EnrollmentRepositoryError},
};

fn delete_err(e: EnrollmentRepositoryError) -> DeregisterError {
    match e {
        EnrollmentRepositoryError::EnrollmentNotFound => DeregisterError::EnrollmentNotFound,
        other => DeregisterError::RepositoryError(other.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct DeregisterService<Q, R>
where
    Q: EnrollmentQuery + Send + Sync,
    R: EnrollmentRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeregisterService<Q, R>
where
    Q: EnrollmentQuery + Send + Sync,
    R: EnrollmentRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeregisterUseCase for DeregisterService<Q, R>
where
    Q: EnrollmentQuery + Send + Sync,
    R: EnrollmentRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, enrollment_id: i32) -> Result<(), DeregisterError> {
        let record = self
            .query
            .find_by_id(enrollment_id)
            .await
            .map_err(|e| DeregisterError::RepositoryError(e.to_string()))?
            .ok_or(DeregisterError::EnrollmentNotFound)?;

        if !EnrollmentPolicy::can_deregister(&actor, record.user_id) {
            warn!(
                actor_id = actor.user_id,
                enrollment_id, "Refused to deregister another student"
            );
            return Err(DeregisterError::NotOwner);
        }

        self.repository
            .delete(enrollment_id)
            .await
            .map_err(delete_err)?;

        info!(enrollment_id, actor_id = actor.user_id, "Enrollment removed");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DeregisterFromCourseService<Q, R>
where
    Q: EnrollmentQuery + Send + Sync,
    R: EnrollmentRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeregisterFromCourseService<Q, R>
where
    Q: EnrollmentQuery + Send + Sync,
    R: EnrollmentRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeregisterFromCourseUseCase for DeregisterFromCourseService<Q, R>
where
    Q: EnrollmentQuery + Send + Sync,
    R: EnrollmentRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, course_id: i32) -> Result<(), DeregisterError> {
        let record = self
            .query
            .find_by_user_and_course(actor.user_id, course_id)
            .await
            .map_err(|e| DeregisterError::RepositoryError(e.to_string()))?
            .ok_or(DeregisterError::NotEnrolled)?;

        self.repository.delete(record.id).await.map_err(|e| match e {
            // Lost a race with another deregistration
            EnrollmentRepositoryError::EnrollmentNotFound => DeregisterError::NotEnrolled,
            other => delete_err(other),
        })?;

        info!(user_id = actor.user_id, course_id, "Deregistered from course");
        Ok(())
    }
}
