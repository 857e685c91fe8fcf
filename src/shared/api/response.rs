// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";

/// Envelope shared by every JSON body the API returns.
///
/// `data` is always serialized (as `null` when absent); `code` only
/// appears on errors.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            status: STATUS_SUCCESS,
            message: message.to_string(),
            data: Some(data),
            code: None,
        })
    }

    pub fn created(message: &str, data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            status: STATUS_SUCCESS,
            message: message.to_string(),
            data: Some(data),
            code: None,
        })
    }
}

impl ApiResponse<()> {
    /// 200 with `data: null`.
    pub fn message_only(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            status: STATUS_SUCCESS,
            message: message.to_string(),
            data: None,
            code: None,
        })
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            status: STATUS_ERROR,
            message: message.to_string(),
            data: None,
            code: Some(code.to_string()),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    /// 422 carrying one `"<field>: <reason>"` line per failed rule.
    pub fn validation_failed(errors: Vec<String>) -> HttpResponse {
        HttpResponse::UnprocessableEntity().json(ApiResponse {
            status: STATUS_ERROR,
            message: "Validation failed".to_string(),
            data: Some(ValidationErrors { errors }),
            code: Some("VALIDATION_ERROR".to_string()),
        })
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
