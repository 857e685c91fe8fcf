use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{LoginCommand, LoginError, LoginOutput, LoginUserUseCase},
    outgoing::{PasswordHasher, TokenProvider},
};
use crate::users::application::ports::outgoing::UserQuery;

pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError> {
        let credentials = self
            .query
            .find_credentials_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(command.password(), &credentials.hashed_password)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        // Credentials first, so an inactive account does not reveal itself to a guesser
        if !credentials.is_active {
            return Err(LoginError::InactiveUser);
        }

        let access_token = self
            .tokens
            .generate_access_token(credentials.id, credentials.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginOutput {
            access_token,
            token_type: "bearer".to_string(),
        })
    }
}
