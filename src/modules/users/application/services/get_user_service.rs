use async_trait::async_trait;

use crate::users::application::ports::{
    incoming::use_cases::{GetUserError, GetUserUseCase, GetUserWithEnrollmentsUseCase},
    outgoing::{UserQuery, UserView, UserWithEnrollments},
};

#[derive(Debug, Clone)]
pub struct GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<UserView, GetUserError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetUserError::QueryError(e.to_string()))?
            .ok_or(GetUserError::NotFound)
    }
}

#[derive(Debug, Clone)]
pub struct GetUserWithEnrollmentsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserWithEnrollmentsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserWithEnrollmentsUseCase for GetUserWithEnrollmentsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<UserWithEnrollments, GetUserError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetUserError::QueryError(e.to_string()))?
            .ok_or(GetUserError::NotFound)?;

        let enrollments = self
            .query
            .find_enrolled_courses(user_id)
            .await
            .map_err(|e| GetUserError::QueryError(e.to_string()))?;

        Ok(UserWithEnrollments { user, enrollments })
    }
}
