use serde::Serialize;
use utoipa::ToSchema;

/// Envelope returned by every successful request.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = "success")]
    pub status: String,

    #[schema(example = "Course retrieved")]
    pub message: String,

    pub data: T,
}

/// Envelope returned by every failed request.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "error")]
    pub status: String,

    #[schema(example = "Course not found")]
    pub message: String,

    /// Present on validation failures as `{ "errors": [...] }`, otherwise null.
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,

    /// Machine-readable error code.
    #[schema(example = "COURSE_NOT_FOUND")]
    pub code: String,
}
