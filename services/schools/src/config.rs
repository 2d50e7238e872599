use std::time::Duration;

use sea_orm::ConnectOptions;
use serde::Deserialize;

use elimu_core::config::Config;
use elimu_core::tracing::LogFormat;

use crate::domain::types::StudentCascade;

/// Schools service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct SchoolsConfig {
    /// Database connection URL (PostgreSQL or SQLite).
    pub database_url: String,
    /// Fate of students when their school is unregistered. Env var: `STUDENT_CASCADE`.
    #[serde(default)]
    pub student_cascade: StudentCascade,
    /// Env var: `LOG_FORMAT`.
    #[serde(default)]
    pub log_format: LogFormat,
    /// Pool size (default 10). Env var: `DB_MAX_CONNECTIONS`.
    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

impl Config for SchoolsConfig {}

impl SchoolsConfig {
    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.database_url.clone());
        options
            .max_connections(self.db_max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);
        options
    }
}
