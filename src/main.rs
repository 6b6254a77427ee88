use apikey_gate::api::{create_router, AppState};
use apikey_gate::infrastructure::AppConfig;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| config.config.server.host.clone());
    let port: u16 = match std::env::var("SERVER_PORT") {
        Ok(port) => port.parse()?,
        Err(_) => config.config.server.port,
    };
    let addr = SocketAddr::new(host.parse()?, port);

    let state = AppState::new(config);
    let app = create_router(state);

    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
