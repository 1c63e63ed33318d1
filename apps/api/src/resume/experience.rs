use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::resume::Experience;
use crate::resume::require_json_object;
use crate::state::AppState;

/// GET /resume/experience
pub async fn handle_list_experience(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.store.experiences())
}

/// GET /resume/experience/:index
pub async fn handle_get_experience(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Experience>, AppError> {
    state
        .store
        .experience(index)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Experience not found".to_string()))
}

/// POST /resume/experience
/// Appends an entry and returns its positional id. A missing `logo` gets the
/// default placeholder.
pub async fn handle_create_experience(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let body = require_json_object(body)?;
    let entry: Experience = serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = state.store.add_experience(entry);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Experience added successfully", "id": id })),
    ))
}
