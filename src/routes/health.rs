use axum::{extract::State, Json, Router};
use serde_json::{json, Value};

use super::read_only;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", read_only(health))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let storage = &state.storage;
    Json(json!({
        "status": "ok",
        "researchProjects": storage.list_research_projects().await.len(),
        "publications": storage.list_publications().await.len(),
        "experiences": storage.list_experiences().await.len(),
        "contactMessages": storage.list_contact_messages().await.len(),
    }))
}
