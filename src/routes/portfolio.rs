use axum::{
    extract::{Path, State},
    Json, Router,
};
use tracing::instrument;

use super::read_only;
use crate::{
    error::AppError,
    resource::Resource,
    schema::{Experience, Publication, ResearchProject},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/research-projects", read_only(list_research_projects))
        .route("/research-projects/:id", read_only(get_research_project))
        .route("/publications", read_only(list_publications))
        .route("/publications/:id", read_only(get_publication))
        .route("/experiences", read_only(list_experiences))
        .route("/experiences/:id", read_only(get_experience))
}

#[instrument(skip(state))]
pub async fn list_research_projects(State(state): State<AppState>) -> Json<Vec<ResearchProject>> {
    Json(state.storage.list_research_projects().await)
}

#[instrument(skip(state))]
pub async fn get_research_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResearchProject>, AppError> {
    state
        .storage
        .find_research_project(&id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound(Resource::ResearchProjects.singular()))
}

#[instrument(skip(state))]
pub async fn list_publications(State(state): State<AppState>) -> Json<Vec<Publication>> {
    Json(state.storage.list_publications().await)
}

#[instrument(skip(state))]
pub async fn get_publication(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Publication>, AppError> {
    state
        .storage
        .find_publication(&id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound(Resource::Publications.singular()))
}

#[instrument(skip(state))]
pub async fn list_experiences(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.storage.list_experiences().await)
}

#[instrument(skip(state))]
pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Experience>, AppError> {
    state
        .storage
        .find_experience(&id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound(Resource::Experiences.singular()))
}
