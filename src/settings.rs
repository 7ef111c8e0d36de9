use std::env;

use config::{Config, Environment};
use serde::Deserialize;

/// Runtime configuration. Every key can be set through a `CINEMA_`-prefixed
/// environment variable; `DATABASE_URL` overrides `database_url`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub uploads_dir: String,
    pub pool_size: u32,
    pub busy_timeout_ms: u32,
    pub max_upload_bytes: usize,
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        let settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000)?
            .set_default("database_url", "moviedatabase.db")?
            .set_default("uploads_dir", "uploads")?
            .set_default("pool_size", 8)?
            .set_default("busy_timeout_ms", 5000)?
            .set_default("max_upload_bytes", 10 * 1024 * 1024)?
            .add_source(Environment::with_prefix("CINEMA"))
            .set_override_option("database_url", env::var("DATABASE_URL").ok())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let settings = Settings::load().unwrap();
        if env::var("CINEMA_PORT").is_err() {
            assert_eq!(settings.port, 8000);
        }
        if env::var("CINEMA_MAX_UPLOAD_BYTES").is_err() {
            assert_eq!(settings.max_upload_bytes, 10 * 1024 * 1024);
        }
        if env::var("CINEMA_UPLOADS_DIR").is_err() {
            assert_eq!(settings.uploads_dir, "uploads");
        }
        if env::var("DATABASE_URL").is_err() && env::var("CINEMA_DATABASE_URL").is_err() {
            assert_eq!(settings.database_url, "moviedatabase.db");
        }
    }
}
