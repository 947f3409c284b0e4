//! Backend entry-point: loads settings, initialises logging and serves the
//! member sign-up API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use signup::inbound::http::health::HealthState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid host {:?}: {e}", settings.host()),
        )
    })?;

    let config = ServerConfig::new(bind_addr, settings.member_limit());

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
