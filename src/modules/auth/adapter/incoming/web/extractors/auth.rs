use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::Actor, ports::outgoing::token_provider::TokenProvider,
};
use crate::shared::api::ApiResponse;
use crate::users::application::ports::incoming::use_cases::GetUserError;
use crate::users::application::ports::outgoing::UserView;
use crate::AppState;

/// Authenticated, active user, reloaded from the database on every request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: UserView,
}

impl CurrentUser {
    pub fn id(&self) -> i32 {
        self.user.id
    }

    pub fn actor(&self) -> Actor {
        Actor::new(self.user.id, self.user.role)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn invalid_token() -> ActixError {
    create_api_error(ApiResponse::unauthorized(
        "INVALID_TOKEN",
        "Could not validate credentials",
    ))
}

impl FromRequest for CurrentUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = req
            .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
            .cloned();
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let (Some(token_provider), Some(state)) = (token_provider, state) else {
                tracing::error!("Auth extractor is missing application data");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            let claims = token_provider.verify_token(&token).map_err(|e| {
                tracing::warn!("Rejected bearer token: {}", e);
                invalid_token()
            })?;

            let user = match state.users.get.execute(claims.sub).await {
                Ok(user) => user,
                Err(GetUserError::NotFound) => {
                    tracing::warn!(user_id = claims.sub, "Token subject no longer exists");
                    return Err(invalid_token());
                }
                Err(GetUserError::QueryError(msg)) => {
                    tracing::error!("Failed to load user {}: {}", claims.sub, msg);
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            };

            if !user.is_active {
                return Err(create_api_error(ApiResponse::forbidden(
                    "INACTIVE_USER",
                    "Inactive user",
                )));
            }

            Ok(CurrentUser { user })
        })
    }
}

/// [`CurrentUser`] whose role is admin.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl AdminUser {
    pub fn id(&self) -> i32 {
        self.0.id()
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let current = CurrentUser::from_request(req, payload);

        Box::pin(async move {
            let current = current.await?;

            if !current.actor().is_admin() {
                tracing::warn!(user_id = current.id(), "Admin route refused");
                return Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "Admin privileges required",
                )));
            }

            Ok(AdminUser(current))
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|s| s.to_string())
}
