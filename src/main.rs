pub mod modules;
pub use modules::{auth, courses, enrollments, users};
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

#[cfg(test)]
mod tests;

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::incoming::use_cases::LoginUserUseCase;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::password::StrengthPasswordPolicy;
use crate::auth::application::services::LoginUserService;
use crate::config::AppConfig;
use crate::courses::adapter::outgoing::{CourseQueryPostgres, CourseRepositoryPostgres};
use crate::courses::application::course_use_cases::CourseUseCases;
use crate::courses::application::services::{
    CreateCourseService, GetCourseService, GetCourseWithStudentsService, ListCoursesService,
    SetCourseStatusService, UpdateCourseService,
};
use crate::enrollments::adapter::outgoing::{
    EnrollmentQueryPostgres, EnrollmentRepositoryPostgres,
};
use crate::enrollments::application::enrollment_use_cases::EnrollmentUseCases;
use crate::enrollments::application::services::{
    DeregisterFromCourseService, DeregisterService, EnrollService, ListCourseEnrollmentsService,
    ListEnrollmentsService, ListMyEnrollmentsService,
};
use crate::health::HealthInfo;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::users::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::users::application::services::{
    GetUserService, GetUserWithEnrollmentsService, ListUsersService, RegisterUserService,
    UpdateProfileService,
};
use crate::users::application::user_use_cases::UserUseCases;

#[derive(Clone)]
pub struct AppState {
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    pub users: UserUseCases,
    pub courses: CourseUseCases,
    pub enrollments: EnrollmentUseCases,
}

/// Wires every use case to its Postgres adapters.
fn build_state(
    db: Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
) -> AppState {
    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
    let course_query = CourseQueryPostgres::new(Arc::clone(&db));
    let course_repo = CourseRepositoryPostgres::new(Arc::clone(&db));
    let enrollment_query = EnrollmentQueryPostgres::new(Arc::clone(&db));
    let enrollment_repo = EnrollmentRepositoryPostgres::new(db);

    let users = UserUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher),
        )),
        get: Arc::new(GetUserService::new(user_query.clone())),
        get_with_enrollments: Arc::new(GetUserWithEnrollmentsService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(user_repo)),
        list: Arc::new(ListUsersService::new(user_query.clone())),
    };

    let courses = CourseUseCases {
        list: Arc::new(ListCoursesService::new(course_query.clone())),
        get: Arc::new(GetCourseService::new(course_query.clone())),
        get_with_students: Arc::new(GetCourseWithStudentsService::new(course_query.clone())),
        create: Arc::new(CreateCourseService::new(
            course_query.clone(),
            course_repo.clone(),
        )),
        update: Arc::new(UpdateCourseService::new(course_query, course_repo.clone())),
        set_status: Arc::new(SetCourseStatusService::new(course_repo)),
    };

    let enrollments = EnrollmentUseCases {
        enroll: Arc::new(EnrollService::new(
            enrollment_query.clone(),
            enrollment_repo.clone(),
        )),
        deregister: Arc::new(DeregisterService::new(
            enrollment_query.clone(),
            enrollment_repo.clone(),
        )),
        deregister_from_course: Arc::new(DeregisterFromCourseService::new(
            enrollment_query.clone(),
            enrollment_repo,
        )),
        my_enrollments: Arc::new(ListMyEnrollmentsService::new(enrollment_query.clone())),
        list: Arc::new(ListEnrollmentsService::new(enrollment_query.clone())),
        course_enrollments: Arc::new(ListCourseEnrollmentsService::new(enrollment_query)),
    };

    AppState {
        login_user_use_case: Arc::new(LoginUserService::new(user_query, hasher, tokens)),
        password_policy: Arc::new(StrengthPasswordPolicy),
        users,
        courses,
        enrollments,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!(
        app = %config.app_name,
        environment = %config.environment,
        "Starting application"
    );

    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .map_err(|e| io::Error::other(format!("migration failed: {e}")))?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let hasher = Argon2Hasher::from_settings(config.argon2)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    let state = build_state(
        Arc::clone(&db_arc),
        Arc::new(hasher),
        Arc::clone(&token_provider),
    );
    let health_info = HealthInfo::new(
        config.environment.clone(),
        config.database.public_location(),
    );

    let server_url = config.server_url();
    info!("Server listening on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(health_info.clone()))
            .service(
                SwaggerUi::new("/api/docs/{_:.*}").url("/api/docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::courses::adapter::incoming::web::routes as course_routes;
    use crate::enrollments::adapter::incoming::web::routes as enrollment_routes;
    use crate::users::adapter::incoming::web::routes as user_routes;

    // Health
    cfg.service(crate::health::root);
    cfg.service(crate::health::health);

    // Auth
    cfg.service(auth_routes::login_user_handler);

    // Users: `/me` must precede `/{user_id}`
    cfg.service(user_routes::register_user_handler);
    cfg.service(user_routes::get_my_profile_with_enrollments_handler);
    cfg.service(user_routes::get_my_profile_handler);
    cfg.service(user_routes::update_my_profile_handler);
    cfg.service(user_routes::get_users_handler);
    cfg.service(user_routes::get_user_with_enrollments_handler);
    cfg.service(user_routes::get_user_handler);

    // Courses
    cfg.service(course_routes::get_courses_handler);
    cfg.service(course_routes::create_course_handler);
    cfg.service(course_routes::get_course_with_students_handler);
    cfg.service(course_routes::activate_course_handler);
    cfg.service(course_routes::deactivate_course_handler);
    cfg.service(course_routes::get_course_handler);
    cfg.service(course_routes::update_course_handler);
    cfg.service(course_routes::delete_course_handler);

    // Enrollments: fixed segments before `/{enrollment_id}`
    cfg.service(enrollment_routes::my_enrollments_handler);
    cfg.service(enrollment_routes::list_enrollments_handler);
    cfg.service(enrollment_routes::enroll_handler);
    cfg.service(enrollment_routes::course_enrollments_handler);
    cfg.service(enrollment_routes::deregister_from_course_handler);
    cfg.service(enrollment_routes::remove_enrollment_handler);
    cfg.service(enrollment_routes::deregister_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
