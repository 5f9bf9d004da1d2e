//! Service entry-point: loads settings, connects to MongoDB and serves the
//! employee API.

mod server;

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employees::inbound::http::health::HealthState;
use employees::outbound::persistence::{MongoEmployeeRepository, StoreClient};
use employees::settings::StoreSettings;
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server, drain_on};

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

    let settings = StoreSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let store_config = settings.store_config().map_err(std::io::Error::other)?;

    let client = StoreClient::connect(store_config)
        .await
        .map_err(|e| std::io::Error::other(format!("failed to reach MongoDB: {e}")))?;

    let repository = Arc::new(MongoEmployeeRepository::new(&client));
    let config = ServerConfig::new(repository);
    info!(bind_addr = %config.bind_addr(), "starting HTTP server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {}
        () = terminate => {}
    }
}
