use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body sent to the client. Internal causes stay in the logs.
    pub fn body(&self) -> Value {
        match self {
            AppError::Validation(e) => json!({
                "message": "Validation failed",
                "errors": e.issues,
            }),
            AppError::NotFound(kind) => json!({ "message": format!("{kind} not found") }),
            AppError::MethodNotAllowed => json!({ "message": "Method not allowed" }),
            AppError::Internal(_) => json!({ "message": "Internal server error" }),
        }
    }

    pub(crate) fn log(&self) {
        match self {
            AppError::Validation(e) => warn!(fields = ?e.fields(), "validation failed"),
            AppError::NotFound(kind) => debug!(kind = %kind, "record not found"),
            AppError::MethodNotAllowed => debug!("method not allowed"),
            AppError::Internal(e) => error!(error = %format!("{e:#}"), "request failed"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_contact_message;

    #[test]
    fn internal_cause_is_not_exposed() {
        let err = AppError::from(anyhow::anyhow!("secret db path /var/x"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.body().to_string();
        assert!(!body.contains("secret"));
        assert!(body.contains("Internal server error"));
    }

    #[test]
    fn validation_body_lists_issues() {
        let v = validate_contact_message(&json!({})).unwrap_err();
        let err = AppError::from(v);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let body = err.body();
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"].as_array().unwrap().len(), 4);
        assert_eq!(body["errors"][0]["path"], json!(["name"]));
    }

    #[test]
    fn not_found_names_the_kind() {
        let err = AppError::NotFound("Publication");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body()["message"], "Publication not found");
        assert_eq!(AppError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
