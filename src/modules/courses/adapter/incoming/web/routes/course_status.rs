use actix_web::{delete, patch, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::courses::application::ports::incoming::use_cases::SetCourseStatusError;
use crate::courses::application::ports::outgoing::CourseView;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::get_courses::course_not_found;

#[utoipa::path(
    delete,
    path = "/api/v1/courses/{course_id}",
    tag = "courses",
    security(("BearerAuth" = [])),
    params(("course_id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted (deactivated)"),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[delete("/api/v1/courses/{course_id}")]
pub async fn delete_course_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match data.courses.set_status.execute(path.into_inner(), false).await {
        Ok(_) => ApiResponse::message_only("Course deleted"),
        Err(err) => map_status_error(err),
    }
}

#[utoipa::path(
    patch,
    path = "/api/v1/courses/{course_id}/activate",
    tag = "courses",
    security(("BearerAuth" = [])),
    params(("course_id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course activated", body = inline(SuccessResponse<CourseView>)),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[patch("/api/v1/courses/{course_id}/activate")]
pub async fn activate_course_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match data.courses.set_status.execute(path.into_inner(), true).await {
        Ok(course) => ApiResponse::success("Course activated", course),
        Err(err) => map_status_error(err),
    }
}

#[utoipa::path(
    patch,
    path = "/api/v1/courses/{course_id}/deactivate",
    tag = "courses",
    security(("BearerAuth" = [])),
    params(("course_id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deactivated", body = inline(SuccessResponse<CourseView>)),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[patch("/api/v1/courses/{course_id}/deactivate")]
pub async fn deactivate_course_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match data.courses.set_status.execute(path.into_inner(), false).await {
        Ok(course) => ApiResponse::success("Course deactivated", course),
        Err(err) => map_status_error(err),
    }
}

fn map_status_error(err: SetCourseStatusError) -> HttpResponse {
    match err {
        SetCourseStatusError::NotFound => course_not_found(),
        SetCourseStatusError::RepositoryError(msg) => {
            error!("Changing course status failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
