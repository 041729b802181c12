use augur::{api, config::Config, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "augur=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Starting Augur server on {}:{}", config.host, config.port);
    match config.rng_seed {
        Some(seed) => info!("Replaying fixed RNG seed {}", seed),
        None => info!("Seeding each request from OS entropy"),
    }
    info!(
        "History: {} days, indicators: {:?}",
        config.history_days, config.indicators
    );

    let addr = format!("{}:{}", config.host, config.port);
    let app = api::app(AppState::new(config));

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Augur server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
