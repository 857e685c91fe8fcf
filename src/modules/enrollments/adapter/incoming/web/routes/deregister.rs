use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{AdminUser, CurrentUser};
use crate::enrollments::application::ports::incoming::use_cases::DeregisterError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/v1/enrollments/{enrollment_id}",
    tag = "enrollments",
    security(("BearerAuth" = [])),
    params(("enrollment_id" = i32, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Deregistered"),
        (status = 403, description = "Cannot deregister another student", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
    )
)]
#[delete("/api/v1/enrollments/{enrollment_id}")]
pub async fn deregister_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match data
        .enrollments
        .deregister
        .execute(user.actor(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message_only("Deregistered"),
        Err(err) => map_deregister_error(err),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/enrollments/courses/{course_id}/deregister",
    tag = "enrollments",
    security(("BearerAuth" = [])),
    params(("course_id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Deregistered"),
        (status = 404, description = "Not enrolled", body = ErrorResponse),
    )
)]
#[delete("/api/v1/enrollments/courses/{course_id}/deregister")]
pub async fn deregister_from_course_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match data
        .enrollments
        .deregister_from_course
        .execute(user.actor(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message_only("Deregistered"),
        Err(err) => map_deregister_error(err),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/enrollments/admin/{enrollment_id}",
    tag = "enrollments",
    security(("BearerAuth" = [])),
    params(("enrollment_id" = i32, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Student removed"),
        (status = 403, description = "Admin privileges required", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
    )
)]
#[delete("/api/v1/enrollments/admin/{enrollment_id}")]
pub async fn remove_enrollment_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match data
        .enrollments
        .deregister
        .execute(admin.0.actor(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message_only("Student removed"),
        Err(err) => map_deregister_error(err),
    }
}

fn map_deregister_error(err: DeregisterError) -> HttpResponse {
    match err {
        DeregisterError::EnrollmentNotFound => {
            ApiResponse::not_found("ENROLLMENT_NOT_FOUND", "Enrollment not found")
        }
        DeregisterError::NotOwner => {
            ApiResponse::forbidden("NOT_ENROLLMENT_OWNER", "Cannot deregister another student")
        }
        DeregisterError::NotEnrolled => ApiResponse::not_found("NOT_ENROLLED", "Not enrolled"),
        DeregisterError::RepositoryError(msg) => {
            error!("Deregistration failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
