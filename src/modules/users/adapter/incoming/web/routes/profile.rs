use actix_web::{get, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::CurrentUser;
use crate::shared::api::ApiResponse;
use crate::users::application::ports::incoming::use_cases::{
    GetUserError, UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError,
};
use crate::users::application::ports::outgoing::{UserView, UserWithEnrollments};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "Ada King")]
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile retrieved successfully", body = inline(SuccessResponse<UserView>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/me")]
pub async fn get_my_profile_handler(user: CurrentUser) -> impl Responder {
    ApiResponse::success("Profile retrieved successfully", user.user)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me/with-enrollments",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile with courses", body = inline(SuccessResponse<UserWithEnrollments>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/me/with-enrollments")]
pub async fn get_my_profile_with_enrollments_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.get_with_enrollments.execute(user.id()).await {
        Ok(profile) => ApiResponse::success("Profile with courses retrieved successfully", profile),
        Err(err) => map_get_user_error(err),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/users/me",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = inline(SuccessResponse<UserView>)),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
#[put("/api/v1/users/me")]
pub async fn update_my_profile_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match UpdateProfileCommand::new(user.id(), dto.name, dto.is_active) {
        Ok(cmd) => cmd,
        Err(errors) => return map_command_errors(errors),
    };

    match data.users.update_profile.execute(command).await {
        Ok(updated) => {
            info!(user_id = updated.id, "Profile updated");
            ApiResponse::success("Profile updated successfully", updated)
        }
        Err(err) => map_update_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

pub(crate) fn map_get_user_error(err: GetUserError) -> HttpResponse {
    match err {
        GetUserError::NotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        GetUserError::QueryError(msg) => {
            error!("Failed to load user: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn map_command_errors(errors: Vec<UpdateProfileCommandError>) -> HttpResponse {
    ApiResponse::validation_failed(errors.iter().map(ToString::to_string).collect())
}

fn map_update_error(err: UpdateProfileError) -> HttpResponse {
    match err {
        UpdateProfileError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        UpdateProfileError::RepositoryError(msg) => {
            error!("Profile update failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
