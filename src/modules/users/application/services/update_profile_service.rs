use async_trait::async_trait;

use crate::users::application::ports::{
    incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
    outgoing::{UserRepository, UserRepositoryError, UserView},
};

#[derive(Debug, Clone)]
pub struct UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserView, UpdateProfileError> {
        self.repository
            .update_user(command.user_id(), command.changes().clone())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
