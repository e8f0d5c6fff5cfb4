mod cli;
mod telemetry;

use crate::cli::CLI;
use burrow_gateway::{App, AppState};
use burrow_logging::{Level, LogEntry, LogSink, NoopSink, Package, RemoteLogClient, RemoteLogConfig};
use burrow_shortener::ShortenerService;
use burrow_storage::InMemoryRepository;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;
    telemetry::init(config.log_format)?;

    let log_sink = build_log_sink(&config)?;
    let service = ShortenerService::new(InMemoryRepository::new(), config.base_url())
        .with_log_sink(log_sink.clone());

    info!(
        listen_addr = %config.listen_addr,
        base_url = %service.base_url(),
        remote_logging = config.log_endpoint.is_some(),
        log_format = %config.log_format,
        "starting gateway server"
    );

    let app = App::router(AppState::new(Arc::new(service)));

    let listener = TcpListener::bind(config.listen_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(listen_addr = %local_addr, "gateway listening");
    log_sink.emit(LogEntry::backend(
        Level::Info,
        Package::Config,
        format!("server running on {}", local_addr),
    ));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

fn build_log_sink(config: &CLI) -> Result<Arc<dyn LogSink>, Box<dyn std::error::Error>> {
    let Some(endpoint) = config.log_endpoint.clone() else {
        return Ok(Arc::new(NoopSink));
    };

    if config.log_token.is_none() {
        warn!(endpoint = %endpoint, "remote logging enabled without a token");
    }

    let client = RemoteLogClient::new(RemoteLogConfig {
        endpoint,
        token: config.log_token.clone(),
        timeout: Duration::from_secs(config.log_timeout_secs),
    })?;
    info!(
        endpoint = %client.config().endpoint,
        timeout = ?client.config().timeout,
        "remote logging enabled"
    );
    Ok(Arc::new(client))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
