pub mod app;
pub mod config;
pub mod error;
pub mod functions;
pub mod logging;
pub mod presentation;
pub mod resource;
pub mod routes;
pub mod schema;
pub mod seed;
pub mod state;
pub mod storage;
pub mod validation;
