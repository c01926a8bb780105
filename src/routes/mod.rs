//! Router assembly: every path goes to one dispatcher, wrapped in the response-header,
//! body-limit, and trace layers.

mod path;

pub use path::{Action, ItemsAction, Route, ITEMS, MOUNT_PREFIX};

use crate::handlers::handle;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";

fn header_layer(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

/// Full API: `/`, `/api` (health) and `/items`, `/api/items` (CRUD). Anything else is a 400.
pub fn api_routes(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .fallback(handle)
        // Enforced by the body extractor so oversized bodies still get a JSON error.
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(header_layer(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .layer(header_layer(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
        .layer(header_layer(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
