use geoblog_service::db::Database;
use geoblog_service::{app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}

/// Geoblog Service
///
/// Serves the map, marker, comment and blog pages plus signup/login.
///
/// # Configuration
///
/// See [`Config::load`]; the most relevant variables are `SERVER__PORT`,
/// `DATABASE__URL` and `SESSION__SECRET`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoblog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!("Starting geoblog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.server.env);

    // Initialize database
    let db = Database::connect(&config.database).await?;
    db.run_migrations().await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let router = app(AppState::new(db, &config));

    tracing::info!("Starting HTTP server at {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Geoblog-service shutting down");
    Ok(())
}
