use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::Actor;
use crate::enrollments::application::domain::policy::EnrollmentPolicy;
use crate::enrollments::application::ports::{
    incoming::use_cases::{EnrollError, EnrollUseCase},
    outgoing::{EnrollmentDetails, EnrollmentQuery, EnrollmentRepository, EnrollmentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct EnrollService<Q, R>
where
    Q: EnrollmentQuery + Send + Sync,
    R: EnrollmentRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> EnrollService<Q, R>
where
    Q: EnrollmentQuery + Send + Sync,
    R: EnrollmentRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> EnrollUseCase for EnrollService<Q, R>
where
    Q: EnrollmentQuery + Send + Sync,
    R: EnrollmentRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, course_id: i32) -> Result<EnrollmentDetails, EnrollError> {
        EnrollmentPolicy::ensure_can_enroll(&actor).map_err(EnrollError::Rejected)?;

        let record = self
            .repository
            .enroll(actor.user_id, course_id)
            .await
            .map_err(|e| match e {
                EnrollmentRepositoryError::CourseNotFound => EnrollError::CourseNotFound,
                EnrollmentRepositoryError::Rejected(reason) => {
                    warn!(user_id = actor.user_id, course_id, %reason, "Enrollment rejected");
                    EnrollError::Rejected(reason)
                }
                other => EnrollError::RepositoryError(other.to_string()),
            })?;

        info!(
            enrollment_id = record.id,
            user_id = record.user_id,
            course_id = record.course_id,
            "Student enrolled"
        );

        self.query
            .find_details(record.id)
            .await
            .map_err(|e| EnrollError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                EnrollError::RepositoryError(format!("enrollment {} vanished after insert", record.id))
            })
    }
}
