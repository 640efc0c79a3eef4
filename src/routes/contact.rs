use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, instrument};

use super::{method_not_allowed, preflight, read_only};
use crate::{
    error::AppError,
    resource::Resource,
    schema::ContactMessage,
    state::AppState,
    storage::Storage,
    validation::validate_contact_message,
};

pub const SENT_MESSAGE: &str = "Message sent successfully";

/// Largest accepted contact form body.
pub const CONTACT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Debug, Serialize)]
pub struct ContactCreatedResponse {
    pub message: &'static str,
    pub id: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contact-messages",
            get(list_contact_messages)
                .post(create_contact_message)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/contact-messages/:id", read_only(get_contact_message))
        .layer(DefaultBodyLimit::max(CONTACT_BODY_LIMIT))
}

/// Parse, validate and store a contact form submission.
///
/// A body that is not JSON at all is an internal error; JSON of the wrong
/// shape is a validation error. Nothing is stored unless validation passes.
pub async fn submit_contact_message(
    storage: &dyn Storage,
    body: &[u8],
) -> Result<ContactMessage, AppError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).context("parse contact message body")?;
    let insert = validate_contact_message(&value)?;
    let message = storage.create_contact_message(insert).await;
    info!(id = %message.id, subject = %message.subject, "contact message stored");
    Ok(message)
}

#[instrument(skip(state))]
pub async fn list_contact_messages(State(state): State<AppState>) -> Json<Vec<ContactMessage>> {
    Json(state.storage.list_contact_messages().await)
}

#[instrument(skip(state))]
pub async fn get_contact_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContactMessage>, AppError> {
    state
        .storage
        .find_contact_message(&id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound(Resource::ContactMessages.singular()))
}

#[instrument(skip(state, body))]
pub async fn create_contact_message(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ContactCreatedResponse>), AppError> {
    let body = body.context("read contact message body")?;
    let message = submit_contact_message(state.storage.as_ref(), &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            message: SENT_MESSAGE,
            id: message.id,
        }),
    ))
}
