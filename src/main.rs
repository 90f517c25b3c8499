use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cardgen_gateway::app;
use cardgen_gateway::config::{Args, Config};
use cardgen_gateway::error::Error;
use cardgen_gateway::provider::OpenAiProvider;
use cardgen_gateway::state::AppState;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();
}

async fn run(config: Config) -> Result<(), Error> {
    let provider = OpenAiProvider::new(&config.api_base, &config.api_key, &config.model);
    info!(model = provider.model(), api_base = %config.api_base, "Provider configured");

    let state = Arc::new(AppState::new(Arc::new(provider)));
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    info!("Card generator running on http://{}", config.bind_addr());
    axum::serve(listener, app(state)).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    // .env values feed the env-backed CLI flags
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();
    let result = match Config::from_args(args) {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
