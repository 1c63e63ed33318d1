use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Map, Value};

use crate::errors::AppError;
use crate::models::resume::PersonalInfoCreate;
use crate::resume::require_json_object;
use crate::state::AppState;
use crate::validation::{is_valid_email, is_valid_phone};

/// GET /resume/personal-info
/// Returns the singleton, or an empty object if never set.
pub async fn handle_get_personal_info(State(state): State<AppState>) -> Json<Map<String, Value>> {
    Json(state.store.personal_info().unwrap_or_default())
}

/// POST /resume/personal-info
/// Replaces the singleton wholesale. Extra keys beyond name/email/phone are
/// stored verbatim.
pub async fn handle_create_personal_info(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Map<String, Value>>), AppError> {
    let body = require_json_object(body)?;
    let info: PersonalInfoCreate = serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if !is_valid_email(&info.email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }
    if !is_valid_phone(&info.phone) {
        return Err(AppError::Validation("Invalid phone format".to_string()));
    }

    let record = info.into_record();
    state.store.set_personal_info(record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /resume/personal-info
/// Shallow-merges the given fields into the singleton. A present email or
/// phone must still pass validation.
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let fields = require_json_object(body)?;

    if let Some(email) = fields.get("email") {
        if !email.as_str().is_some_and(is_valid_email) {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }
    }
    if let Some(phone) = fields.get("phone") {
        if !phone.as_str().is_some_and(is_valid_phone) {
            return Err(AppError::Validation("Invalid phone format".to_string()));
        }
    }

    Ok(Json(state.store.merge_personal_info(fields)))
}

/// DELETE /resume/personal-info
/// Unconditionally resets the singleton to empty.
pub async fn handle_delete_personal_info(State(state): State<AppState>) -> Json<Value> {
    state.store.clear_personal_info();
    Json(json!({ "message": "Personal information deleted successfully" }))
}
