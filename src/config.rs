use std::env;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Host part of the URL, with credentials stripped, for the health report.
    pub fn public_location(&self) -> String {
        match self.url.rsplit_once('@') {
            Some((_, location)) => location.to_string(),
            None => self.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub run_migrations: bool,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub argon2: Argon2Settings,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` (falling back to `.env`) and read the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let access_token_expiry: i64 =
            parse("JWT_ACCESS_EXPIRY", &get_or("JWT_ACCESS_EXPIRY", "1800"))?;
        if !(1..=86_400).contains(&access_token_expiry) {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds".to_string(),
            });
        }

        let max_connections: u32 =
            parse("DB_MAX_CONNECTIONS", &get_or("DB_MAX_CONNECTIONS", "20"))?;
        let min_connections: u32 = parse("DB_MIN_CONNECTIONS", &get_or("DB_MIN_CONNECTIONS", "2"))?;
        if min_connections > max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        Ok(Self {
            app_name: get_or("APP_NAME", "LMS API"),
            environment: get_or("RUST_ENV", "development"),
            host: get_or("HOST", "127.0.0.1"),
            port: parse("PORT", &get_or("PORT", "8000"))?,
            run_migrations: parse("RUN_MIGRATIONS", &get_or("RUN_MIGRATIONS", "true"))?,
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                min_connections,
            },
            jwt: JwtConfig {
                secret_key,
                issuer: get_or("JWT_ISSUER", "lms-backend"),
                access_token_expiry,
            },
            argon2: Argon2Settings {
                memory_kib: parse("ARGON2_MEMORY_KIB", &get_or("ARGON2_MEMORY_KIB", "4096"))?,
                iterations: parse("ARGON2_ITERATIONS", &get_or("ARGON2_ITERATIONS", "3"))?,
                parallelism: parse("ARGON2_PARALLELISM", &get_or("ARGON2_PARALLELISM", "1"))?,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}
