//! Shared application state for all routes. Holds resolved settings only; connections are per request.

use crate::config::DbConfig;
use crate::store::{Connector, PgConnector};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbConfig>,
    pub connector: Arc<dyn Connector>,
}

impl AppState {
    pub fn new(db: DbConfig, connector: Arc<dyn Connector>) -> Self {
        AppState {
            db: Arc::new(db),
            connector,
        }
    }

    /// PostgreSQL-backed state for the given settings.
    pub fn postgres(db: DbConfig) -> Self {
        Self::new(db, Arc::new(PgConnector))
    }
}
