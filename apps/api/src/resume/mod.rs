pub mod education;
pub mod experience;
pub mod personal_info;
pub mod skill;

use axum::Json;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Rejects absent, unparseable or non-object request bodies up front, so the
/// client always sees the `{"error": ...}` shape instead of the extractor's
/// default rejection.
pub(crate) fn require_json_object(body: Option<Json<Value>>) -> Result<Map<String, Value>, AppError> {
    match body {
        Some(Json(Value::Object(map))) => Ok(map),
        _ => Err(AppError::MalformedBody),
    }
}
