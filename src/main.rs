//! Roster service entry-point: wires REST endpoints and OpenAPI docs.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::inbound::http::health::HealthState;
use roster::server::{ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(&settings, health_state)?;
    info!(host = settings.host(), port = settings.port, "listening");

    server.await
}
