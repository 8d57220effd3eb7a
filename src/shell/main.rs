use anyhow::Context;
use tokio::net::TcpListener;

use revision_playground::shell::config::PlaygroundConfig;
use revision_playground::shell::http::router;
use revision_playground::shell::observability::init_tracing;
use revision_playground::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional; production sets variables directly.
    dotenvy::dotenv().ok();

    let config = PlaygroundConfig::from_env().context("invalid configuration")?;
    init_tracing(config.log_format);

    let app = router(AppState::from_config(&config));

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {e}");
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
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received, draining connections");
}
