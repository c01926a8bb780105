//! Item CRUD handlers: list, read, create, update, delete.

use crate::error::{AppError, DbError, ItemOp, ValidationError};
use crate::model::{DeletedItem, ItemPayload};
use crate::response::{success_created, success_ok};
use crate::routes::ItemsAction;
use crate::store::{ItemStore, Session};
use axum::response::{IntoResponse, Response};

/// Runs one items action. A missing connection short-circuits every action, including unsupported methods.
pub async fn dispatch(action: ItemsAction<'_>, session: &mut Session, body: &[u8]) -> Result<Response, AppError> {
    let store = session.store()?;
    let response = match action {
        ItemsAction::List => list(store).await?,
        ItemsAction::Get(id) => read(store, id).await?,
        ItemsAction::Create => create(store, body).await?,
        ItemsAction::Update(id) => update(store, id, body).await?,
        ItemsAction::Delete(id) => delete(store, id).await?,
        ItemsAction::MethodNotAllowed => return Err(AppError::MethodNotAllowed),
    };
    Ok(response)
}

fn failed(op: ItemOp) -> impl FnOnce(DbError) -> AppError {
    move |e| {
        tracing::warn!(op = ?op, error = %e, "item query failed");
        AppError::query(op, e)
    }
}

pub async fn list(store: &mut dyn ItemStore) -> Result<Response, AppError> {
    let items = store.list().await.map_err(failed(ItemOp::List))?;
    Ok(success_ok(items).into_response())
}

pub async fn read(store: &mut dyn ItemStore, id: &str) -> Result<Response, AppError> {
    let item = store
        .get(id)
        .await
        .map_err(failed(ItemOp::Get))?
        .ok_or_else(|| AppError::no_row(ItemOp::Get))?;
    Ok(success_ok(item).into_response())
}

pub async fn create(store: &mut dyn ItemStore, body: &[u8]) -> Result<Response, AppError> {
    let new = ItemPayload::from_bytes(body).validate()?;
    let item = store.create(&new).await.map_err(failed(ItemOp::Create))?;
    tracing::info!(id = item.id, "item created");
    Ok(success_created(item).into_response())
}

pub async fn update(store: &mut dyn ItemStore, id: Option<&str>, body: &[u8]) -> Result<Response, AppError> {
    let id = id.ok_or(ValidationError::MissingIdForUpdate)?;
    let new = ItemPayload::from_bytes(body).validate()?;
    let item = store
        .update(id, &new)
        .await
        .map_err(failed(ItemOp::Update))?
        .ok_or_else(|| AppError::no_row(ItemOp::Update))?;
    Ok(success_ok(item).into_response())
}

pub async fn delete(store: &mut dyn ItemStore, id: Option<&str>) -> Result<Response, AppError> {
    let id = id.ok_or(ValidationError::MissingIdForDelete)?;
    store
        .delete(id)
        .await
        .map_err(failed(ItemOp::Delete))?
        .ok_or_else(|| AppError::no_row(ItemOp::Delete))?;
    tracing::info!(id = %id, "item deleted");
    Ok(success_ok(DeletedItem::new(id)).into_response())
}
