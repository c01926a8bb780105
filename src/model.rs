//! Item entity and request payloads.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Body of POST and PUT. Fields are only checked for presence; empty strings pass.
#[derive(Clone, Debug, Default)]
pub struct ItemPayload {
    pub name: Option<Value>,
    pub description: Option<Value>,
}

/// Validated payload, ready to bind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl ItemPayload {
    /// Lenient parse: a body that is not a JSON object yields an empty payload.
    pub fn from_bytes(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut m)) => ItemPayload {
                name: m.remove("name"),
                description: m.remove("description"),
            },
            _ => ItemPayload::default(),
        }
    }

    pub fn validate(self) -> Result<NewItem, ValidationError> {
        match (as_text(self.name), as_text(self.description)) {
            (Some(name), Some(description)) => Ok(NewItem { name, description }),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

/// Any non-null value counts as present; non-strings are bound as their JSON text.
fn as_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Response of a successful delete. `id` echoes the path segment as received.
#[derive(Clone, Debug, Serialize)]
pub struct DeletedItem {
    pub message: &'static str,
    pub id: String,
}

impl DeletedItem {
    pub fn new(id: impl Into<String>) -> Self {
        DeletedItem {
            message: "Item deleted successfully",
            id: id.into(),
        }
    }
}
