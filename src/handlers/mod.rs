//! HTTP handlers: request lifecycle, health check, and item CRUD.

pub mod health;
pub mod items;

use crate::error::AppError;
use crate::routes::{Action, Route};
use crate::state::AppState;
use crate::store::Session;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// Single entry point for every request. Actions that need the database open one
/// connection, run at most one statement, and close it before the response is returned.
pub async fn handle(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let route = Route::parse(uri.path());
    let action = Action::select(&method, &route);
    tracing::debug!(method = %method, path = %uri.path(), action = ?action, "dispatch");
    match action {
        Action::Preflight => StatusCode::NO_CONTENT.into_response(),
        Action::Invalid => AppError::InvalidRequest.into_response(),
        Action::Health => {
            let mut session = Session::open(&state.db, state.connector.as_ref()).await;
            let response = health::check(&state.db, &mut session).await.into_response();
            session.close().await;
            response
        }
        Action::Items(op) => {
            let body = match body {
                Ok(body) => body,
                Err(rejection) => return body_rejected(rejection).into_response(),
            };
            let mut session = Session::open(&state.db, state.connector.as_ref()).await;
            let response = items::dispatch(op, &mut session, &body).await.into_response();
            session.close().await;
            response
        }
    }
}

fn body_rejected(rejection: BytesRejection) -> AppError {
    tracing::warn!(error = %rejection, "request body rejected");
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::InvalidRequest
    }
}
