use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::resume::{Skill, SkillDelete, SkillUpdate};
use crate::resume::require_json_object;
use crate::state::AppState;

/// Optional `?id=` on GET /resume/skill. Kept as a raw string so a
/// non-numeric id maps to the same "Invalid skill ID" error as an
/// out-of-range one.
#[derive(Debug, Deserialize)]
pub struct SkillIdQuery {
    pub id: Option<String>,
}

fn invalid_skill_id() -> AppError {
    AppError::InvalidId("Invalid skill ID".to_string())
}

/// GET /resume/skill
/// Returns the full list, or a single record when `?id=` is given.
pub async fn handle_get_skill(
    State(state): State<AppState>,
    Query(query): Query<SkillIdQuery>,
) -> Result<Json<Value>, AppError> {
    let Some(raw) = query.id else {
        return Ok(Json(json!(state.store.skills())));
    };

    let index: usize = raw.parse().map_err(|_| invalid_skill_id())?;
    let skill = state.store.skill(index).ok_or_else(invalid_skill_id)?;
    Ok(Json(json!(skill)))
}

/// POST /resume/skill
pub async fn handle_create_skill(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let body = require_json_object(body)?;
    let entry: Skill = serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = state.store.add_skill(entry);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Skill added successfully", "id": id })),
    ))
}

/// PUT /resume/skill
/// Body carries the positional id plus any subset of updatable fields;
/// omitted fields are retained.
pub async fn handle_update_skill(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, AppError> {
    let body = require_json_object(body)?;
    let update: SkillUpdate = serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let skill = state.store.update_skill(update).ok_or_else(invalid_skill_id)?;
    Ok(Json(json!({
        "message": "Skill updated successfully",
        "skill": skill
    })))
}

/// DELETE /resume/skill
/// Removes the entry addressed by the body `id`; later ids shift down by one.
pub async fn handle_delete_skill(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, AppError> {
    let body = require_json_object(body)?;
    let request: SkillDelete =
        serde_json::from_value(Value::Object(body)).map_err(|_| invalid_skill_id())?;

    state.store.remove_skill(request.id).ok_or_else(invalid_skill_id)?;
    Ok(Json(json!({ "message": "Skill deleted successfully" })))
}
