//! Health check: API liveness plus a `SELECT 1` probe on the request's connection.

use crate::config::{ConfigSource, DbConfig};
use crate::store::Session;
use axum::Json;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DatabaseStatus {
    #[serde(rename = "Connected and Responsive")]
    Responsive,
    #[serde(rename = "Connected but Unresponsive")]
    Unresponsive,
    #[serde(rename = "Connection Error")]
    ConnectionError,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub message: &'static str,
    pub api_status: &'static str,
    pub database_status: DatabaseStatus,
    pub database_message: String,
    pub database_config_source: ConfigSource,
    pub runtime_version: String,
    pub timestamp: String,
    pub info: &'static str,
}

/// Always answered with 200; database trouble is reported in the body only.
pub async fn check(config: &DbConfig, session: &mut Session) -> Json<HealthReport> {
    let (database_status, database_message) = match session.store() {
        Err(e) => (DatabaseStatus::ConnectionError, e.to_string()),
        Ok(store) => match store.ping().await {
            Ok(()) => (
                DatabaseStatus::Responsive,
                "Successfully executed a test query.".to_string(),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "health probe failed");
                (
                    DatabaseStatus::Unresponsive,
                    format!("Failed to execute a test query: {}", e),
                )
            }
        },
    };
    Json(HealthReport {
        message: "Welcome to the Items CRUD API!",
        api_status: "OK",
        database_status,
        database_message,
        database_config_source: config.source,
        runtime_version: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        info: "Try accessing /items (or /api/items)",
    })
}
