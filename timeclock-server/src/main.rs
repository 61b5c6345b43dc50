//! Employee time management API server
//!
//! Long-running HTTP service exposing employee and per-employee time
//! entry CRUD over PostgreSQL.

use timeclock_server::api;
use timeclock_server::config::Config;
use timeclock_server::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timeclock_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting timeclock-server (env: {})", config.environment);

    // Connect, migrate, build state
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("timeclock-server HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
