use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{AdminUser, CurrentUser};
use crate::enrollments::application::ports::incoming::use_cases::ListEnrollmentsError;
use crate::enrollments::application::ports::outgoing::{EnrollmentDetails, EnrollmentListFilter};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{page_param, PageRequest};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct EnrollmentListQuery {
    #[serde(default, deserialize_with = "page_param")]
    pub skip: Option<u64>,
    /// Capped at 1000.
    #[serde(default, deserialize_with = "page_param")]
    pub limit: Option<u64>,
    pub user_id: Option<i32>,
    pub course_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/enrollments/my-enrollments",
    tag = "enrollments",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "My enrollments retrieved", body = inline(SuccessResponse<Vec<EnrollmentDetails>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/v1/enrollments/my-enrollments")]
pub async fn my_enrollments_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.enrollments.my_enrollments.execute(user.id()).await {
        Ok(items) => ApiResponse::success("My enrollments retrieved", items),
        Err(err) => map_list_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/enrollments",
    tag = "enrollments",
    security(("BearerAuth" = [])),
    params(EnrollmentListQuery),
    responses(
        (status = 200, description = "All enrollments retrieved"),
        (status = 403, description = "Admin privileges required", body = ErrorResponse),
    )
)]
#[get("/api/v1/enrollments")]
pub async fn list_enrollments_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    query: web::Query<EnrollmentListQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let filter = EnrollmentListFilter {
        user_id: query.user_id,
        course_id: query.course_id,
    };

    match data
        .enrollments
        .list
        .execute(filter, PageRequest::new(query.skip, query.limit))
        .await
    {
        Ok(page) => ApiResponse::success("All enrollments retrieved", page),
        Err(err) => map_list_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/enrollments/courses/{course_id}",
    tag = "enrollments",
    security(("BearerAuth" = [])),
    params(("course_id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course enrollments retrieved", body = inline(SuccessResponse<Vec<EnrollmentDetails>>)),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/enrollments/courses/{course_id}")]
pub async fn course_enrollments_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match data
        .enrollments
        .course_enrollments
        .execute(path.into_inner())
        .await
    {
        Ok(items) => ApiResponse::success("Course enrollments retrieved", items),
        Err(err) => map_list_error(err),
    }
}

fn map_list_error(err: ListEnrollmentsError) -> HttpResponse {
    match err {
        ListEnrollmentsError::CourseNotFound => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        ListEnrollmentsError::QueryError(msg) => {
            error!("Listing enrollments failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::enrollments::application::ports::incoming::use_cases::{
        ListCourseEnrollmentsUseCase, ListEnrollmentsUseCase, ListMyEnrollmentsUseCase,
    };
    use crate::shared::api::custom_query_config;
    use crate::shared::pagination::PageResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{
        admin_view, bearer, student_view, token_provider_for, StubGetUserUseCase,
    };
    use crate::tests::support::stubs::sample_enrollment;
    use crate::users::application::ports::outgoing::UserView;

    #[derive(Clone)]
    struct StubLists {
        course_missing: bool,
    }

    #[async_trait]
    impl ListMyEnrollmentsUseCase for StubLists {
        async fn execute(
            &self,
            user_id: i32,
        ) -> Result<Vec<EnrollmentDetails>, ListEnrollmentsError> {
            Ok(vec![sample_enrollment(1, user_id, 2)])
        }
    }

    #[async_trait]
    impl ListEnrollmentsUseCase for StubLists {
        async fn execute(
            &self,
            filter: EnrollmentListFilter,
            page: PageRequest,
        ) -> Result<PageResult<EnrollmentDetails>, ListEnrollmentsError> {
            let user_id = filter.user_id.unwrap_or(4);
            Ok(PageResult::new(vec![sample_enrollment(1, user_id, 2)], 1, page))
        }
    }

    #[async_trait]
    impl ListCourseEnrollmentsUseCase for StubLists {
        async fn execute(
            &self,
            course_id: i32,
        ) -> Result<Vec<EnrollmentDetails>, ListEnrollmentsError> {
            if self.course_missing {
                return Err(ListEnrollmentsError::CourseNotFound);
            }
            Ok(vec![sample_enrollment(1, 4, course_id)])
        }
    }

    async fn get(
        caller: UserView,
        lists: StubLists,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let caller_id = caller.id;
        let state = TestAppStateBuilder::default()
            .with_get_user(StubGetUserUseCase::found(caller))
            .with_my_enrollments(lists.clone())
            .with_list_enrollments(lists.clone())
            .with_course_enrollments(lists)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_query_config())
                .app_data(token_provider_for(caller_id))
                .service(my_enrollments_handler)
                .service(course_enrollments_handler)
                .service(list_enrollments_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer())
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn my_enrollments_lists_own_rows() {
        let resp = get(
            student_view(4),
            StubLists { course_missing: false },
            "/api/v1/enrollments/my-enrollments",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "My enrollments retrieved");
        assert_eq!(body["data"][0]["user_id"], 4);
    }

    #[actix_web::test]
    async fn admin_lists_all_with_filters() {
        let resp = get(
            admin_view(1),
            StubLists { course_missing: false },
            "/api/v1/enrollments?user_id=9&limit=2000",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "All enrollments retrieved");
        assert_eq!(body["data"]["limit"], 1000);
        assert_eq!(body["data"]["items"][0]["user_id"], 9);
    }

    #[actix_web::test]
    async fn student_cannot_list_all() {
        let resp = get(
            student_view(4),
            StubLists { course_missing: false },
            "/api/v1/enrollments",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn course_enrollments_for_missing_course() {
        let resp = get(
            admin_view(1),
            StubLists { course_missing: true },
            "/api/v1/enrollments/courses/3",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "COURSE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn course_enrollments_returns_rows() {
        let resp = get(
            admin_view(1),
            StubLists { course_missing: false },
            "/api/v1/enrollments/courses/3",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Course enrollments retrieved");
        assert_eq!(body["data"][0]["course"]["id"], 3);
    }
}
