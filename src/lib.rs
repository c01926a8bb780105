//! Items API: minimal CRUD REST backend over a single PostgreSQL table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{DbConfig, DbSettings, ServerConfig};
pub use error::{AppError, ConfigError, ValidationError};
pub use model::{Item, ItemPayload};
pub use routes::api_routes;
pub use state::AppState;
pub use store::{Connector, ItemStore, PgConnector};
