use async_trait::async_trait;

use super::MAX_NAME_LEN;
use crate::users::application::ports::outgoing::{UpdateUserData, UserView};

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: i32,
    changes: UpdateUserData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("name: must not be empty")]
    EmptyName,

    #[error("name: must be at most 100 characters")]
    NameTooLong,
}

impl UpdateProfileCommand {
    pub fn new(
        user_id: i32,
        name: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Self, Vec<UpdateProfileCommandError>> {
        let name = match name {
            None => None,
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(vec![UpdateProfileCommandError::EmptyName]);
                }
                if trimmed.chars().count() > MAX_NAME_LEN {
                    return Err(vec![UpdateProfileCommandError::NameTooLong]);
                }
                Some(trimmed.to_string())
            }
        };

        Ok(Self {
            user_id,
            changes: UpdateUserData { name, is_active },
        })
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn changes(&self) -> &UpdateUserData {
        &self.changes
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand)
        -> Result<UserView, UpdateProfileError>;
}
