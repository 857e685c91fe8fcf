use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::users::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
};
use crate::users::application::ports::outgoing::UserView;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    /// 8-100 characters with upper, lower, digit and one of `@$!%*?&`.
    #[schema(example = "Secur3P@ss")]
    pub password: String,

    /// `student` (default) or `admin`.
    #[schema(example = "student")]
    pub role: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/v1/users/register",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered successfully", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
#[post("/api/v1/users/register")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<RegisterUserRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match RegisterUserCommand::new(
        dto.name,
        dto.email,
        dto.password,
        dto.role,
        data.password_policy.as_ref(),
    ) {
        Ok(cmd) => cmd,
        Err(errors) => return map_command_errors(errors),
    };

    match data.users.register.execute(command).await {
        Ok(user) => {
            info!(user_id = user.id, role = %user.role, "User registered");
            ApiResponse::created("User registered successfully", user)
        }
        Err(err) => map_register_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_errors(errors: Vec<RegisterUserCommandError>) -> HttpResponse {
    ApiResponse::validation_failed(errors.iter().map(ToString::to_string).collect())
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::EmailAlreadyRegistered => {
            warn!("Registration rejected: email already registered");
            ApiResponse::bad_request("EMAIL_ALREADY_REGISTERED", "Email already registered")
        }
        RegisterUserError::HashingFailed(msg) | RegisterUserError::RepositoryError(msg) => {
            error!("Registration failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
