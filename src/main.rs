use movie_mood::{
    api::{create_router, AppState},
    config::Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let default_filter = if config.debug {
        "movie_mood=debug,tower_http=debug"
    } else {
        "movie_mood=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    for credential in config.missing_credentials() {
        tracing::warn!(credential, "Credential not configured; provider disabled");
    }
    if !config.debug && config.uses_default_secret() {
        tracing::warn!("SECRET_KEY is the development default");
    }

    // Initialize application state
    let state = AppState::from_config(&config)?;

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, debug = config.debug, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
