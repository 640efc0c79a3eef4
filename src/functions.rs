//! Per-route function handlers.
//!
//! Each [`Resource`] can be deployed as its own function that receives a
//! serverless-style event and returns a serverless-style response. Status
//! codes and bodies match the axum routes because both go through the same
//! storage calls and [`AppError`] mapping.

use std::collections::BTreeMap;

use anyhow::Context;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::instrument;

use crate::app::ALLOWED_METHODS;
use crate::error::AppError;
use crate::resource::Resource;
use crate::routes::contact::{submit_contact_message, SENT_MESSAGE};
use crate::storage::Storage;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[instrument(skip(event, storage), fields(method = %event.http_method, path = %event.path))]
pub async fn handle(resource: Resource, event: &FunctionEvent, storage: &dyn Storage) -> FunctionResponse {
    if event.http_method.eq_ignore_ascii_case("OPTIONS") {
        return preflight_response();
    }
    match dispatch(resource, event, storage).await {
        Ok((status, body)) => json_response(status, &body),
        Err(err) => error_response(err),
    }
}

/// Decode a raw event and handle it. An undecodable event is answered with
/// a 500 response rather than failing the invocation.
pub async fn handle_raw(resource: Resource, raw: &str, storage: &dyn Storage) -> FunctionResponse {
    match serde_json::from_str::<FunctionEvent>(raw).context("parse function event") {
        Ok(event) => handle(resource, &event, storage).await,
        Err(err) => error_response(AppError::Internal(err)),
    }
}

async fn dispatch(
    resource: Resource,
    event: &FunctionEvent,
    storage: &dyn Storage,
) -> Result<(StatusCode, Value), AppError> {
    let method = event.http_method.to_ascii_uppercase();
    match (method.as_str(), record_id(resource, &event.path)) {
        ("GET", None) => Ok((StatusCode::OK, list(resource, storage).await?)),
        ("GET", Some(id)) => Ok((StatusCode::OK, find(resource, id, storage).await?)),
        ("POST", None) if resource.accepts_create() => {
            let body = event.body.as_deref().unwrap_or_default();
            let message = submit_contact_message(storage, body.as_bytes()).await?;
            Ok((
                StatusCode::CREATED,
                json!({ "message": SENT_MESSAGE, "id": message.id }),
            ))
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn list(resource: Resource, storage: &dyn Storage) -> anyhow::Result<Value> {
    let value = match resource {
        Resource::ResearchProjects => serde_json::to_value(storage.list_research_projects().await),
        Resource::Publications => serde_json::to_value(storage.list_publications().await),
        Resource::Experiences => serde_json::to_value(storage.list_experiences().await),
        Resource::ContactMessages => serde_json::to_value(storage.list_contact_messages().await),
    };
    value.with_context(|| format!("serialize {resource}"))
}

async fn find(resource: Resource, id: &str, storage: &dyn Storage) -> Result<Value, AppError> {
    let found = match resource {
        Resource::ResearchProjects => storage.find_research_project(id).await.map(serde_json::to_value),
        Resource::Publications => storage.find_publication(id).await.map(serde_json::to_value),
        Resource::Experiences => storage.find_experience(id).await.map(serde_json::to_value),
        Resource::ContactMessages => storage.find_contact_message(id).await.map(serde_json::to_value),
    };
    match found {
        Some(value) => Ok(value.with_context(|| format!("serialize {resource} {id}"))?),
        None => Err(AppError::NotFound(resource.singular())),
    }
}

/// Id segment following the resource slug, if the path has one.
fn record_id<'a>(resource: Resource, path: &'a str) -> Option<&'a str> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    segments.find(|s| *s == resource.slug())?;
    segments.next()
}

fn error_response(err: AppError) -> FunctionResponse {
    err.log();
    json_response(err.status(), &err.body())
}

fn json_response(status: StatusCode, body: &Value) -> FunctionResponse {
    FunctionResponse {
        status_code: status.as_u16(),
        headers: BTreeMap::from([
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]),
        body: body.to_string(),
    }
}

fn preflight_response() -> FunctionResponse {
    let methods = ALLOWED_METHODS
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    FunctionResponse {
        status_code: StatusCode::OK.as_u16(),
        headers: BTreeMap::from([
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
            ("Access-Control-Allow-Methods".to_string(), methods),
            ("Access-Control-Allow-Headers".to_string(), "Content-Type".to_string()),
        ]),
        body: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_follows_slug() {
        let r = Resource::Publications;
        assert_eq!(record_id(r, "/.netlify/functions/publications"), None);
        assert_eq!(record_id(r, "/.netlify/functions/publications/"), None);
        assert_eq!(record_id(r, "/api/publications/2"), Some("2"));
        assert_eq!(record_id(r, ""), None);
        assert_eq!(record_id(r, "/api/experiences/2"), None);
    }

    #[test]
    fn preflight_lists_methods_and_has_no_body() {
        let res = preflight_response();
        assert_eq!(res.status_code, 200);
        assert!(res.body.is_empty());
        assert_eq!(
            res.headers["Access-Control-Allow-Methods"],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert!(!res.headers.contains_key("Content-Type"));
    }

    #[test]
    fn event_uses_camel_case() {
        let event: FunctionEvent =
            serde_json::from_str(r#"{"httpMethod":"GET","path":"/x"}"#).unwrap();
        assert_eq!(event.http_method, "GET");
        assert!(event.body.is_none());
    }
}
