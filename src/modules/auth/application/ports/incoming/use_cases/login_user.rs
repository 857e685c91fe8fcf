use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("email: value is not a valid email address")]
    InvalidEmail,

    #[error("password: must not be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, Vec<LoginCommandError>> {
        let mut errors = Vec::new();

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            errors.push(LoginCommandError::InvalidEmail);
        }
        if password.is_empty() {
            errors.push(LoginCommandError::EmptyPassword);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Output / Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct LoginOutput {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Inactive user")]
    InactiveUser,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError>;
}
