use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::resume::{education, experience, personal_info, skill};
use crate::state::AppState;

/// GET /test
/// Connectivity check used by the resume front end.
async fn test_handler() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test_handler))
        .route(
            "/resume/personal-info",
            get(personal_info::handle_get_personal_info)
                .post(personal_info::handle_create_personal_info)
                .put(personal_info::handle_update_personal_info)
                .delete(personal_info::handle_delete_personal_info),
        )
        .route(
            "/resume/experience",
            get(experience::handle_list_experience).post(experience::handle_create_experience),
        )
        .route("/resume/experience/:index", get(experience::handle_get_experience))
        .route(
            "/resume/education",
            get(education::handle_list_education).post(education::handle_create_education),
        )
        .route(
            "/resume/education/:index",
            get(education::handle_get_education).delete(education::handle_delete_education),
        )
        .route(
            "/resume/skill",
            get(skill::handle_get_skill)
                .post(skill::handle_create_skill)
                .put(skill::handle_update_skill)
                .delete(skill::handle_delete_skill),
        )
        .with_state(state)
}
