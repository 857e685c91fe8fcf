use actix_web::{post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::courses::application::ports::incoming::use_cases::{
    CourseFieldError, CreateCourseCommand, CreateCourseError, UpdateCourseCommand,
    UpdateCourseError,
};
use crate::courses::application::ports::outgoing::CourseView;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::get_courses::course_not_found;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    #[schema(example = "Operating Systems")]
    pub title: String,

    #[schema(example = "CS310")]
    pub code: String,

    #[schema(example = 40)]
    pub capacity: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub code: Option<String>,
    pub capacity: Option<i64>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/api/v1/courses",
    tag = "courses",
    security(("BearerAuth" = [])),
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = inline(SuccessResponse<CourseView>)),
        (status = 400, description = "Course code already exists", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
#[post("/api/v1/courses")]
pub async fn create_course_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateCourseRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateCourseCommand::new(dto.title, dto.code, dto.capacity) {
        Ok(cmd) => cmd,
        Err(errors) => return field_errors(errors),
    };

    match data.courses.create.execute(command).await {
        Ok(course) => {
            info!(course_id = course.id, admin_id = admin.id(), "Course created");
            ApiResponse::created("Course created", course)
        }
        Err(CreateCourseError::CodeAlreadyExists) => code_exists(),
        Err(CreateCourseError::RepositoryError(msg)) => {
            error!("Course creation failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/courses/{course_id}",
    tag = "courses",
    security(("BearerAuth" = [])),
    params(("course_id" = i32, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = inline(SuccessResponse<CourseView>)),
        (status = 400, description = "Code taken or capacity below enrollment", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[put("/api/v1/courses/{course_id}")]
pub async fn update_course_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateCourseRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match UpdateCourseCommand::new(
        path.into_inner(),
        dto.title,
        dto.code,
        dto.capacity,
        dto.is_active,
    ) {
        Ok(cmd) => cmd,
        Err(errors) => return field_errors(errors),
    };

    match data.courses.update.execute(command).await {
        Ok(course) => {
            info!(course_id = course.id, admin_id = admin.id(), "Course updated");
            ApiResponse::success("Course updated", course)
        }
        Err(err) => map_update_error(err),
    }
}

fn field_errors(errors: Vec<CourseFieldError>) -> HttpResponse {
    ApiResponse::validation_failed(errors.iter().map(ToString::to_string).collect())
}

fn code_exists() -> HttpResponse {
    ApiResponse::bad_request("COURSE_CODE_EXISTS", "Course code already exists")
}

fn map_update_error(err: UpdateCourseError) -> HttpResponse {
    match err {
        UpdateCourseError::NotFound => course_not_found(),
        UpdateCourseError::CodeAlreadyExists => code_exists(),
        UpdateCourseError::CapacityBelowEnrollment => {
            warn!("Course update rejected: capacity below enrollment");
            ApiResponse::bad_request(
                "CAPACITY_BELOW_ENROLLMENT",
                "Capacity cannot be lower than current enrollment count",
            )
        }
        UpdateCourseError::RepositoryError(msg) => {
            error!("Course update failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
