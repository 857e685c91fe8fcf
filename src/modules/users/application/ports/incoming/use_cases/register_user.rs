use async_trait::async_trait;
use email_address::EmailAddress;

use super::MAX_NAME_LEN;
use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};
use crate::users::application::domain::entities::UserRole;
use crate::users::application::ports::outgoing::UserView;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: String,
    password: String,
    role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("name: must not be empty")]
    EmptyName,

    #[error("name: must be at most 100 characters")]
    NameTooLong,

    #[error("email: value is not a valid email address")]
    InvalidEmail,

    #[error("password: {0}")]
    WeakPassword(PasswordPolicyError),

    #[error("role: must be either student or admin")]
    InvalidRole,
}

impl RegisterUserCommand {
    /// Validates every field and reports all failures at once.
    pub fn new(
        name: String,
        email: String,
        password: String,
        role: Option<String>,
        policy: &dyn PasswordPolicy,
    ) -> Result<Self, Vec<RegisterUserCommandError>> {
        let mut errors = Vec::new();

        let name = name.trim().to_string();
        if name.is_empty() {
            errors.push(RegisterUserCommandError::EmptyName);
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.push(RegisterUserCommandError::NameTooLong);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            errors.push(RegisterUserCommandError::InvalidEmail);
        }

        errors.extend(
            policy
                .violations(&password)
                .into_iter()
                .map(RegisterUserCommandError::WeakPassword),
        );

        let role = match role.as_deref() {
            None => UserRole::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                errors.push(RegisterUserCommandError::InvalidRole);
                UserRole::default()
            }),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name,
            email,
            password,
            role,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserView, RegisterUserError>;
}
