use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginCommandError, LoginError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "Secur3P@ss")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    #[schema(example = "bearer")]
    pub token_type: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Exchange email and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 401, description = "Incorrect email or password", body = ErrorResponse),
        (status = 403, description = "Inactive user", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequestDto>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(errors) => return map_command_errors(errors),
    };

    info!(email = %command.email(), "Login attempt");

    match data.login_user_use_case.execute(command).await {
        Ok(output) => ApiResponse::success(
            "Login successful",
            LoginResponse {
                access_token: output.access_token,
                token_type: output.token_type,
            },
        ),
        Err(err) => map_login_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_errors(errors: Vec<LoginCommandError>) -> HttpResponse {
    ApiResponse::validation_failed(errors.iter().map(ToString::to_string).collect())
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!("Login rejected: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Incorrect email or password")
        }
        LoginError::InactiveUser => {
            warn!("Login rejected: inactive user");
            ApiResponse::forbidden("INACTIVE_USER", "Inactive user")
        }
        LoginError::PasswordVerificationFailed(msg)
        | LoginError::TokenGenerationFailed(msg)
        | LoginError::QueryError(msg) => {
            error!("Login failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
