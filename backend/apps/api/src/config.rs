//! Environment Configuration
//!
//! All configuration is read from the environment once at startup. The two
//! JWT secrets are mandatory; everything else has a default.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};

/// Immutable application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_refresh_secret: String,
    pub jwt_expire: Duration,
    pub jwt_refresh_expire: Duration,
    pub cors_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(value) => value.parse().context("PORT must be a valid port number")?,
            Err(_) => 3001,
        };

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => compose_database_url(),
        };

        let Ok(jwt_secret) = env::var("JWT_SECRET") else {
            bail!("JWT_SECRET must be set");
        };
        let Ok(jwt_refresh_secret) = env::var("JWT_REFRESH_SECRET") else {
            bail!("JWT_REFRESH_SECRET must be set");
        };

        let jwt_expire = duration_from_env("JWT_EXPIRE", 3600)?;
        let jwt_refresh_expire = duration_from_env("JWT_REFRESH_EXPIRE", 604_800)?;

        let cors_origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        Ok(Self {
            port,
            database_url,
            jwt_secret,
            jwt_refresh_secret,
            jwt_expire,
            jwt_refresh_expire,
            cors_origin,
        })
    }
}

/// Build a connection string from the individual DB_* variables when
/// DATABASE_URL is not set.
fn compose_database_url() -> String {
    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let name = env::var("DB_NAME").unwrap_or_else(|_| "blogdb".to_string());
    let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
    let password = env::var("DB_PASSWORD").unwrap_or_default();

    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}

fn duration_from_env(key: &str, default_secs: u64) -> Result<Duration> {
    let secs = match env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{key} must be a number of seconds"))?,
        Err(_) => default_secs,
    };
    Ok(Duration::from_secs(secs))
}
