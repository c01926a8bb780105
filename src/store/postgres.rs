//! PostgreSQL implementation over a single `PgConnection`.

use super::{Connector, ItemStore};
use crate::config::DbSettings;
use crate::error::{AppError, DbError};
use crate::model::{Item, NewItem};
use async_trait::async_trait;
use sqlx::{ConnectOptions, Connection, PgConnection};

// Path ids are bound as text and cast server-side, so a non-numeric id is rejected by the database.
const SELECT_ALL: &str = "SELECT id::bigint AS id, name, description FROM items ORDER BY id";
const SELECT_BY_ID: &str =
    "SELECT id::bigint AS id, name, description FROM items WHERE id = CAST($1 AS BIGINT)";
const INSERT: &str = "INSERT INTO items (name, description) VALUES ($1, $2) \
     RETURNING id::bigint AS id, name, description";
const UPDATE: &str = "UPDATE items SET name = $1, description = $2 WHERE id = CAST($3 AS BIGINT) \
     RETURNING id::bigint AS id, name, description";
const DELETE: &str = "DELETE FROM items WHERE id = CAST($1 AS BIGINT) RETURNING id::bigint";

#[derive(Clone, Copy, Debug, Default)]
pub struct PgConnector;

#[async_trait]
impl Connector for PgConnector {
    async fn connect(&self, settings: &DbSettings) -> Result<Box<dyn ItemStore>, AppError> {
        tracing::debug!(host = %settings.host, port = settings.port, database = %settings.database, "connect");
        let conn = settings
            .connect_options()
            .connect()
            .await
            .map_err(|e| AppError::Connection(format!("Failed to connect to PostgreSQL: {}", DbError::from(e))))?;
        Ok(Box::new(PgItemStore { conn }))
    }
}

pub struct PgItemStore {
    conn: PgConnection,
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn ping(&mut self) -> Result<(), DbError> {
        tracing::debug!(sql = "SELECT 1", "query");
        sqlx::query("SELECT 1").execute(&mut self.conn).await?;
        Ok(())
    }

    async fn list(&mut self) -> Result<Vec<Item>, DbError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Item>(SELECT_ALL)
            .fetch_all(&mut self.conn)
            .await?;
        Ok(rows)
    }

    async fn get(&mut self, id: &str) -> Result<Option<Item>, DbError> {
        tracing::debug!(sql = %SELECT_BY_ID, id = %id, "query");
        let row = sqlx::query_as::<_, Item>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut self.conn)
            .await?;
        Ok(row)
    }

    async fn create(&mut self, item: &NewItem) -> Result<Item, DbError> {
        tracing::debug!(sql = %INSERT, "query");
        let row = sqlx::query_as::<_, Item>(INSERT)
            .bind(&item.name)
            .bind(&item.description)
            .fetch_one(&mut self.conn)
            .await?;
        Ok(row)
    }

    async fn update(&mut self, id: &str, item: &NewItem) -> Result<Option<Item>, DbError> {
        tracing::debug!(sql = %UPDATE, id = %id, "query");
        let row = sqlx::query_as::<_, Item>(UPDATE)
            .bind(&item.name)
            .bind(&item.description)
            .bind(id)
            .fetch_optional(&mut self.conn)
            .await?;
        Ok(row)
    }

    async fn delete(&mut self, id: &str) -> Result<Option<i64>, DbError> {
        tracing::debug!(sql = %DELETE, id = %id, "query");
        let deleted = sqlx::query_scalar::<_, i64>(DELETE)
            .bind(id)
            .fetch_optional(&mut self.conn)
            .await?;
        Ok(deleted)
    }

    async fn close(self: Box<Self>) {
        if let Err(e) = self.conn.close().await {
            tracing::warn!(error = %e, "closing database connection");
        }
    }
}
