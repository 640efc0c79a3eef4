use portfolio::{app, config::AppConfig, logging, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    logging::init(config.log_format);

    let addr = config.addr()?;
    if !config.seed_sample_data {
        tracing::warn!("sample data disabled; starting with an empty store");
    }
    let app_state = AppState::init(config);

    app::serve(app::build_app(app_state), addr).await
}
