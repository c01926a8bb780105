//! Per-request database access: connector, item statements, and the session that scopes one connection.

mod postgres;
#[cfg(test)]
pub mod memory;

pub use postgres::{PgConnector, PgItemStore};

use crate::config::{DbConfig, DbSettings};
use crate::error::{AppError, DbError};
use crate::model::{Item, NewItem};
use async_trait::async_trait;

/// Opens one connection per request.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Fails with `AppError::Connection` carrying the driver text.
    async fn connect(&self, settings: &DbSettings) -> Result<Box<dyn ItemStore>, AppError>;
}

/// Statements against the `items` table over a single open connection.
/// Ids are passed as received in the path; the database decides whether they are valid.
#[async_trait]
pub trait ItemStore: Send {
    /// `SELECT 1`.
    async fn ping(&mut self) -> Result<(), DbError>;

    async fn list(&mut self) -> Result<Vec<Item>, DbError>;

    async fn get(&mut self, id: &str) -> Result<Option<Item>, DbError>;

    async fn create(&mut self, item: &NewItem) -> Result<Item, DbError>;

    async fn update(&mut self, id: &str, item: &NewItem) -> Result<Option<Item>, DbError>;

    /// Returns the deleted row's id, or None when nothing matched.
    async fn delete(&mut self, id: &str) -> Result<Option<i64>, DbError>;

    async fn close(self: Box<Self>);
}

/// The connection for one request, or the configuration/connection error that prevented it.
pub struct Session {
    store: Result<Box<dyn ItemStore>, AppError>,
}

impl Session {
    pub async fn open(config: &DbConfig, connector: &dyn Connector) -> Self {
        let store = match &config.settings {
            Ok(settings) => connector.connect(settings).await,
            Err(e) => Err(AppError::Config(e.clone())),
        };
        if let Err(e) = &store {
            tracing::warn!(error = %e, "database unavailable");
        }
        Session { store }
    }

    /// The live store, or the stored error as a 503.
    pub fn store(&mut self) -> Result<&mut (dyn ItemStore + 'static), AppError> {
        match &mut self.store {
            Ok(store) => Ok(&mut **store),
            Err(e) => Err(e.clone()),
        }
    }

    pub async fn close(self) {
        if let Ok(store) = self.store {
            store.close().await;
        }
    }
}
