//! # Console Gateway
//!
//! Serves the console's `/api/proxy/...` endpoints by rewriting each request
//! onto the backend API, and redirects the retired `/dashboard` pages to
//! `/projects`.
//!
//! ## Architecture
//!
//! - Axum handles HTTP routing and request/response lifecycle
//! - Each proxy route renders a backend path and hands off to the forwarder
//! - The forwarder relays method, headers and body through a pooled reqwest client

use tokio::signal;
use tracing::info;

use console_gateway::config::GatewayConfig;
use console_gateway::create_app;
use console_gateway::proxy::HttpForwarder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "console_gateway=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting console gateway");

    let config = GatewayConfig::from_env()?;
    info!(
        "Forwarding to {} (timeout {}s)",
        config.backend_url,
        config.request_timeout.as_secs()
    );

    let forwarder = HttpForwarder::new(&config)?.shared();
    let app = create_app(forwarder);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Console gateway stopped");
    Ok(())
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
