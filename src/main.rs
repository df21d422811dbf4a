use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use garden_services::config::{AppConfig, Transport};
use garden_services::mcp::serve_stdio;
use garden_services::router::create_app_router;
use garden_services::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout belongs to the stdio transport, so logs always go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,garden_services=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    let state = Arc::new(AppState::new());

    match config.transport {
        Transport::Stdio => {
            serve_stdio(&state).await?;
        }
        Transport::Http => {
            let app = create_app_router(state);

            let addr = SocketAddr::from((config.host.parse::<IpAddr>()?, config.port));
            tracing::info!("Server running on http://{}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
