use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{page_param, PageRequest};
use crate::users::application::domain::entities::UserRole;
use crate::users::application::ports::incoming::use_cases::ListUsersError;
use crate::users::application::ports::outgoing::{UserListFilter, UserView, UserWithEnrollments};
use crate::AppState;

use super::profile::map_get_user_error;

#[derive(Debug, Deserialize, IntoParams)]
pub struct UserListQuery {
    #[serde(default, deserialize_with = "page_param")]
    pub skip: Option<u64>,
    /// Capped at 1000.
    #[serde(default, deserialize_with = "page_param")]
    pub limit: Option<u64>,
    /// Case-insensitive match on name or email.
    pub search: Option<String>,
    /// `student` or `admin`.
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Routes (admin only)
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    security(("BearerAuth" = [])),
    params(UserListQuery),
    responses(
        (status = 200, description = "Users retrieved successfully"),
        (status = 403, description = "Admin privileges required", body = ErrorResponse),
    )
)]
#[get("/api/v1/users")]
pub async fn get_users_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    query: web::Query<UserListQuery>,
) -> impl Responder {
    let query = query.into_inner();

    let role = match query.role.as_deref().map(str::parse::<UserRole>).transpose() {
        Ok(role) => role,
        Err(e) => return ApiResponse::validation_failed(vec![format!("role: {}", e)]),
    };

    let filter = UserListFilter {
        search: query.search,
        role,
        is_active: query.is_active,
    };
    let page = PageRequest::new(query.skip, query.limit);

    match data.users.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success("Users retrieved successfully", result),
        Err(ListUsersError::QueryError(msg)) => {
            error!("Listing users failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    security(("BearerAuth" = [])),
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User retrieved successfully", body = inline(SuccessResponse<UserView>)),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/{user_id}")]
pub async fn get_user_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match data.users.get.execute(path.into_inner()).await {
        Ok(user) => ApiResponse::success("User retrieved successfully", user),
        Err(err) => map_get_user_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/with-enrollments",
    tag = "users",
    security(("BearerAuth" = [])),
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User with courses", body = inline(SuccessResponse<UserWithEnrollments>)),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/{user_id}/with-enrollments")]
pub async fn get_user_with_enrollments_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> HttpResponse {
    match data
        .users
        .get_with_enrollments
        .execute(path.into_inner())
        .await
    {
        Ok(user) => ApiResponse::success("User with courses retrieved successfully", user),
        Err(err) => map_get_user_error(err),
    }
}
