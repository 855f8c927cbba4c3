use crate::frameworks::config::{LogFormat, ServerConfig};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, StubCredentialChecker};
use std::io::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Json => subscriber.json().with_current_span(true).init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    // Report panics through the subscriber with a backtrace.
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn build_state(config: &ServerConfig) -> AppState {
    AppState {
        credentials: Arc::new(StubCredentialChecker),
        max_body_bytes: config.max_body_bytes,
    }
}

// Serve the login routes on an already bound listener until shutdown.
pub async fn run(listener: tokio::net::TcpListener, config: ServerConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(build_state(&config));

    tracing::info!(%address, max_body_bytes = config.max_body_bytes, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        })
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing(LogFormat::from_env());

    let config = ServerConfig::load().map_err(|e| {
        tracing::error!(error = %e, "failed to load config");
        std::io::Error::other(e)
    })?;
    let address = config.addr();

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
