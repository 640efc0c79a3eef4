use axum::{
    handler::Handler,
    http::StatusCode,
    routing::{get, MethodRouter},
    Router,
};

use crate::error::AppError;
use crate::state::AppState;

pub mod contact;
pub mod health;
pub mod portfolio;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(portfolio::routes())
        .merge(contact::routes())
        .merge(health::routes())
}

/// CORS preflight; the CORS layer supplies the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route")
}

/// GET-only route: OPTIONS answers the preflight, everything else is a 405.
pub(crate) fn read_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).options(preflight).fallback(method_not_allowed)
}
