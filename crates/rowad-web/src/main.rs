use std::sync::Arc;

use rowad_export::render::Renderer;
use rowad_genai::generate::GenerationSettings;
use rowad_genai::provider::gemini::GeminiProvider;
use rowad_web::config::{AppConfig, LogFormat};
use rowad_web::controller::Controller;
use rowad_web::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    tracing::info!(?config, "starting rowad-web");

    let provider = GeminiProvider::new(config.api_key.clone(), config.model.clone())?
        .with_base_url(config.api_base.clone());
    let settings = GenerationSettings {
        timeout: config.timeout,
    };

    let controller = Controller::new(Arc::new(provider), settings);
    let state = AppState::new(controller, Renderer::new()?, config.credit.clone());

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, rowad_web::router(state)).await?;
    Ok(())
}
