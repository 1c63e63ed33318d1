use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::resume::Education;
use crate::resume::require_json_object;
use crate::state::AppState;

/// GET /resume/education
pub async fn handle_list_education(State(state): State<AppState>) -> Json<Vec<Education>> {
    Json(state.store.educations())
}

/// GET /resume/education/:index
pub async fn handle_get_education(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Education>, AppError> {
    state
        .store
        .education(index)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Education not found".to_string()))
}

/// POST /resume/education
pub async fn handle_create_education(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let body = require_json_object(body)?;
    let entry: Education = serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = state.store.add_education(entry);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Education added successfully", "id": id })),
    ))
}

/// DELETE /resume/education/:index
/// Removes the addressed entry; every later entry's positional id shifts down
/// by one.
pub async fn handle_delete_education(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Value>, AppError> {
    let deleted = state
        .store
        .remove_education(index)
        .ok_or_else(|| AppError::NotFound("Education not found".to_string()))?;

    Ok(Json(json!({
        "message": "Education deleted successfully",
        "deleted": deleted
    })))
}
