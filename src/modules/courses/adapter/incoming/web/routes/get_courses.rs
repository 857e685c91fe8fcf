use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::courses::application::ports::incoming::use_cases::{GetCourseError, ListCoursesError};
use crate::courses::application::ports::outgoing::{
    CourseListFilter, CourseView, CourseWithStudents,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{page_param, PageRequest};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CourseListQuery {
    #[serde(default, deserialize_with = "page_param")]
    pub skip: Option<u64>,
    /// Capped at 1000.
    #[serde(default, deserialize_with = "page_param")]
    pub limit: Option<u64>,
    /// Case-insensitive match on title or code.
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = "courses",
    params(CourseListQuery),
    responses(
        (status = 200, description = "Courses retrieved"),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
#[get("/api/v1/courses")]
pub async fn get_courses_handler(
    data: web::Data<AppState>,
    query: web::Query<CourseListQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let filter = CourseListFilter {
        search: query.search,
        is_active: query.is_active,
    };

    match data
        .courses
        .list
        .execute(filter, PageRequest::new(query.skip, query.limit))
        .await
    {
        Ok(page) => ApiResponse::success("Courses retrieved", page),
        Err(ListCoursesError::QueryError(msg)) => {
            error!("Listing courses failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{course_id}",
    tag = "courses",
    params(("course_id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course retrieved", body = inline(SuccessResponse<CourseView>)),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/courses/{course_id}")]
pub async fn get_course_handler(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match data.courses.get.execute(path.into_inner()).await {
        Ok(course) => ApiResponse::success("Course retrieved", course),
        Err(err) => map_get_course_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{course_id}/with-students",
    tag = "courses",
    security(("BearerAuth" = [])),
    params(("course_id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course with students retrieved", body = inline(SuccessResponse<CourseWithStudents>)),
        (status = 403, description = "Admin privileges required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/courses/{course_id}/with-students")]
pub async fn get_course_with_students_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match data
        .courses
        .get_with_students
        .execute(path.into_inner())
        .await
    {
        Ok(course) => ApiResponse::success("Course with students retrieved", course),
        Err(err) => map_get_course_error(err),
    }
}

pub(crate) fn course_not_found() -> HttpResponse {
    ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
}

fn map_get_course_error(err: GetCourseError) -> HttpResponse {
    match err {
        GetCourseError::NotFound => course_not_found(),
        GetCourseError::QueryError(msg) => {
            error!("Failed to load course: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
