use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::users::application::ports::{
    incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
    outgoing::{CreateUserData, UserQuery, UserRepository, UserRepositoryError, UserView},
};

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserView, RegisterUserError> {
        let taken = self
            .query
            .email_exists(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if taken {
            return Err(RegisterUserError::EmailAlreadyRegistered);
        }

        let hashed_password = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            hashed_password,
            role: command.role(),
        };

        // A concurrent registration can still win the race at the unique index
        self.repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyRegistered,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })
    }
}
