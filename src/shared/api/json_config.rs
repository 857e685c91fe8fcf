// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = format!("body: {}", err);
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_failed(vec![message]),
        )
        .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = format!("query: {}", err);
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_failed(vec![message]),
        )
        .into()
    })
}

pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = format!("path: {}", err);
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_failed(vec![message]),
        )
        .into()
    })
}
