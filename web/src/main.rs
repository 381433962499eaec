//! Barista HTTP server.
//!
//! Serves the dispatch router over a fresh in-memory environment.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin barista-web
//! BARISTA_ADDR=127.0.0.1:8080 cargo run --bin barista-web
//! ```

use barista_web::{AppState, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::in_memory();
    let app = router(state);

    let addr = std::env::var("BARISTA_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("barista listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
