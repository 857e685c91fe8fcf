use actix_web::{get, web, Responder};
use chrono::{SecondsFormat, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;

/// Process facts reported by the health endpoints.
#[derive(Debug, Clone)]
pub struct HealthInfo {
    pub environment: String,
    pub version: &'static str,
    pub database_location: String,
    pub started_at: Instant,
}

impl HealthInfo {
    pub fn new(environment: String, database_location: String) -> Self {
        Self {
            environment,
            version: env!("CARGO_PKG_VERSION"),
            database_location,
            started_at: Instant::now(),
        }
    }

    /// Seconds since start, rounded to two decimals.
    pub fn uptime(&self) -> f64 {
        (self.started_at.elapsed().as_secs_f64() * 100.0).round() / 100.0
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeData {
    pub docs: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseHealth {
    /// `connected` or `error: <reason>`.
    pub status: String,
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthData {
    pub timestamp: String,
    pub uptime: f64,
    pub environment: String,
    pub database: DatabaseHealth,
    pub version: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Welcome to the LMS API"))
)]
#[get("/")]
pub async fn root(info: web::Data<HealthInfo>) -> impl Responder {
    ApiResponse::success(
        "Welcome to the LMS API",
        WelcomeData {
            docs: "/api/docs",
            version: info.version,
        },
    )
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "System is healthy"))
)]
#[get("/health")]
pub async fn health(
    info: web::Data<HealthInfo>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> impl Responder {
    let status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "connected".to_string(),
        Err(e) => {
            tracing::error!("Health check database probe failed: {}", e);
            format!("error: {}", e)
        }
    };

    ApiResponse::success(
        "System is healthy",
        HealthData {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            uptime: info.uptime(),
            environment: info.environment.clone(),
            database: DatabaseHealth {
                status,
                url: info.database_location.clone(),
            },
            version: info.version,
        },
    )
}
