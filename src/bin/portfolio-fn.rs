//! Runs one resource handler as a standalone function.
//!
//! Usage: `portfolio-fn <resource> < event.json`
//!
//! The event (`httpMethod`, `path`, `body`) is read from stdin and the
//! response (`statusCode`, `headers`, `body`) is written to stdout, a 500
//! one if the event cannot be decoded. Every invocation starts from a fresh
//! store, like a cold start.

use std::io::Read;

use anyhow::Context;
use portfolio::{config::AppConfig, functions, logging, resource::Resource, state::AppState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    logging::init(config.log_format);

    let resource: Resource = std::env::args()
        .nth(1)
        .context("usage: portfolio-fn <resource> < event.json")?
        .parse()?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("read event from stdin")?;

    let state = AppState::init(config);
    let response = functions::handle_raw(resource, &input, state.storage.as_ref()).await;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
