use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::CurrentUser;
use crate::enrollments::application::domain::policy::EnrollmentRejection;
use crate::enrollments::application::ports::incoming::use_cases::EnrollError;
use crate::enrollments::application::ports::outgoing::EnrollmentDetails;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollRequest {
    #[schema(example = 3)]
    pub course_id: i32,
}

#[utoipa::path(
    post,
    path = "/api/v1/enrollments",
    tag = "enrollments",
    security(("BearerAuth" = [])),
    request_body = EnrollRequest,
    responses(
        (status = 201, description = "Enrolled successfully", body = inline(SuccessResponse<EnrollmentDetails>)),
        (status = 400, description = "Course inactive, full, or already enrolled", body = ErrorResponse),
        (status = 403, description = "Only students can enroll", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[post("/api/v1/enrollments")]
pub async fn enroll_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
    payload: web::Json<EnrollRequest>,
) -> impl Responder {
    match data
        .enrollments
        .enroll
        .execute(user.actor(), payload.course_id)
        .await
    {
        Ok(enrollment) => ApiResponse::created("Enrolled successfully", enrollment),
        Err(err) => map_enroll_error(err),
    }
}

fn map_enroll_error(err: EnrollError) -> HttpResponse {
    match err {
        EnrollError::CourseNotFound => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        EnrollError::Rejected(reason) => {
            let message = reason.to_string();
            match reason {
                EnrollmentRejection::OnlyStudents => {
                    ApiResponse::forbidden("ONLY_STUDENTS", &message)
                }
                EnrollmentRejection::CourseInactive => {
                    ApiResponse::bad_request("COURSE_INACTIVE", &message)
                }
                EnrollmentRejection::AlreadyEnrolled => {
                    ApiResponse::bad_request("ALREADY_ENROLLED", &message)
                }
                EnrollmentRejection::CourseFull => {
                    ApiResponse::bad_request("COURSE_FULL", &message)
                }
            }
        }
        EnrollError::RepositoryError(msg) => {
            error!("Enrollment failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
