use actix_web::{http::header, web};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_provider::ACCESS_TOKEN_TYPE;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};
use crate::users::application::domain::entities::UserRole;
use crate::users::application::ports::incoming::use_cases::{GetUserError, GetUserUseCase};
use crate::users::application::ports::outgoing::UserView;

pub const TEST_TOKEN: &str = "test-token";

/// Accepts only [`TEST_TOKEN`] and resolves it to a fixed subject.
pub struct StubTokenProvider {
    user_id: i32,
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: i32, _role: UserRole) -> Result<String, TokenError> {
        Ok(TEST_TOKEN.to_string())
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        if token != TEST_TOKEN {
            return Err(TokenError::InvalidSignature);
        }

        Ok(TokenClaims {
            sub: self.user_id,
            role: UserRole::Student,
            exp: i64::MAX,
            iat: 0,
            nbf: 0,
            iss: "test".to_string(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        })
    }
}

pub fn token_provider_for(user_id: i32) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider { user_id });
    web::Data::new(provider)
}

pub fn bearer() -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", TEST_TOKEN))
}

fn user_view(id: i32, role: UserRole) -> UserView {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    UserView {
        id,
        name: format!("User {}", id),
        email: format!("user{}@example.com", id),
        role,
        is_active: true,
        created_at: at,
        updated_at: at,
    }
}

pub fn student_view(id: i32) -> UserView {
    user_view(id, UserRole::Student)
}

pub fn admin_view(id: i32) -> UserView {
    user_view(id, UserRole::Admin)
}

#[derive(Clone)]
enum Lookup {
    Any(UserView),
    Only(UserView),
    Missing,
    Failing(String),
}

/// Stands in for the user lookup the auth extractor performs.
#[derive(Clone)]
pub struct StubGetUserUseCase {
    lookup: Lookup,
}

impl StubGetUserUseCase {
    /// Returns `user` whatever id is asked for.
    pub fn found(user: UserView) -> Self {
        Self {
            lookup: Lookup::Any(user),
        }
    }

    /// Returns `user` for its own id and `NotFound` otherwise.
    pub fn only(user: UserView) -> Self {
        Self {
            lookup: Lookup::Only(user),
        }
    }

    pub fn not_found() -> Self {
        Self {
            lookup: Lookup::Missing,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            lookup: Lookup::Failing(msg.to_string()),
        }
    }
}

#[async_trait]
impl GetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, user_id: i32) -> Result<UserView, GetUserError> {
        match &self.lookup {
            Lookup::Any(user) => Ok(user.clone()),
            Lookup::Only(user) if user.id == user_id => Ok(user.clone()),
            Lookup::Only(_) | Lookup::Missing => Err(GetUserError::NotFound),
            Lookup::Failing(msg) => Err(GetUserError::QueryError(msg.clone())),
        }
    }
}
