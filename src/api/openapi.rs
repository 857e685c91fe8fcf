use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, LoginResponse};
use crate::courses::adapter::incoming::web::routes::{CreateCourseRequest, UpdateCourseRequest};
use crate::courses::application::ports::outgoing::{
    CourseView, CourseWithStudents, EnrolledStudentItem,
};
use crate::enrollments::adapter::incoming::web::routes::EnrollRequest;
use crate::enrollments::application::ports::outgoing::{
    EnrollmentCourseItem, EnrollmentDetails, EnrollmentUserItem,
};
use crate::health::{DatabaseHealth, HealthData, WelcomeData};
use crate::users::adapter::incoming::web::routes::{RegisterUserRequest, UpdateProfileRequest};
use crate::users::application::domain::entities::UserRole;
use crate::users::application::ports::outgoing::{
    EnrolledCourseItem, UserView, UserWithEnrollments,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LMS API",
        version = "1.0.0",
        description = "Learning management backend: users, courses and enrollments"
    ),
    paths(
        // Health
        crate::health::root,
        crate::health::health,

        // Auth
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Users
        crate::users::adapter::incoming::web::routes::register_user_handler,
        crate::users::adapter::incoming::web::routes::get_my_profile_handler,
        crate::users::adapter::incoming::web::routes::get_my_profile_with_enrollments_handler,
        crate::users::adapter::incoming::web::routes::update_my_profile_handler,
        crate::users::adapter::incoming::web::routes::get_users_handler,
        crate::users::adapter::incoming::web::routes::get_user_handler,
        crate::users::adapter::incoming::web::routes::get_user_with_enrollments_handler,

        // Courses
        crate::courses::adapter::incoming::web::routes::get_courses_handler,
        crate::courses::adapter::incoming::web::routes::get_course_handler,
        crate::courses::adapter::incoming::web::routes::get_course_with_students_handler,
        crate::courses::adapter::incoming::web::routes::create_course_handler,
        crate::courses::adapter::incoming::web::routes::update_course_handler,
        crate::courses::adapter::incoming::web::routes::delete_course_handler,
        crate::courses::adapter::incoming::web::routes::activate_course_handler,
        crate::courses::adapter::incoming::web::routes::deactivate_course_handler,

        // Enrollments
        crate::enrollments::adapter::incoming::web::routes::enroll_handler,
        crate::enrollments::adapter::incoming::web::routes::deregister_handler,
        crate::enrollments::adapter::incoming::web::routes::deregister_from_course_handler,
        crate::enrollments::adapter::incoming::web::routes::my_enrollments_handler,
        crate::enrollments::adapter::incoming::web::routes::list_enrollments_handler,
        crate::enrollments::adapter::incoming::web::routes::course_enrollments_handler,
        crate::enrollments::adapter::incoming::web::routes::remove_enrollment_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            WelcomeData,
            HealthData,
            DatabaseHealth,
            LoginRequestDto,
            LoginResponse,
            UserRole,
            UserView,
            EnrolledCourseItem,
            UserWithEnrollments,
            RegisterUserRequest,
            UpdateProfileRequest,
            CourseView,
            EnrolledStudentItem,
            CourseWithStudents,
            CreateCourseRequest,
            UpdateCourseRequest,
            EnrollRequest,
            EnrollmentUserItem,
            EnrollmentCourseItem,
            EnrollmentDetails,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Service status"),
        (name = "auth", description = "Login"),
        (name = "users", description = "Registration, profiles and user administration"),
        (name = "courses", description = "Course catalogue and administration"),
        (name = "enrollments", description = "Enrolling and deregistering students"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/v1/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
