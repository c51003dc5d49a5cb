use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidhub_api::config::{ServerConfig, StorageConfig};
use vidhub_api::router::build_app_router;
use vidhub_api::state::AppState;
use vidhub_media::{FfprobeProbe, LocalStorage, MediaIngestor, ObjectStorage, S3Storage};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidhub_api=debug,vidhub_media=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL is required");
    let pool = vidhub_db::create_pool(&database_url)
        .await
        .expect("Cannot connect to DATABASE_URL");
    vidhub_db::health_check(&pool)
        .await
        .expect("Database is not answering queries");
    vidhub_db::run_migrations(&pool)
        .await
        .expect("Migrations failed");
    tracing::info!("Database ready, migrations applied");

    // --- Media storage ---
    let storage = connect_storage(&config.storage).await;
    tracing::info!(backend = storage.backend_name(), "Object storage ready");

    let media = Arc::new(MediaIngestor::new(storage, Arc::new(FfprobeProbe)));

    tokio::fs::create_dir_all(&config.upload_staging_dir)
        .await
        .expect("Cannot create UPLOAD_STAGING_DIR");

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot bind {addr}: {e}"));
    tracing::info!(%addr, "vidhub listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Stopped");
}

/// Build the object storage backend selected by `STORAGE_BACKEND`.
async fn connect_storage(config: &StorageConfig) -> Arc<dyn ObjectStorage> {
    match config {
        StorageConfig::Local { path, public_url } => {
            match LocalStorage::new(path.clone(), public_url.clone()).await {
                Ok(local) => Arc::new(local),
                Err(e) => panic!("Local storage at {} is unusable: {e}", path.display()),
            }
        }
        StorageConfig::S3 {
            bucket,
            region,
            endpoint_url,
        } => match S3Storage::new(bucket.clone(), region.clone(), endpoint_url.clone()).await {
            Ok(s3) => Arc::new(s3),
            Err(e) => panic!("S3 bucket '{bucket}' is unusable: {e}"),
        },
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
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
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down");
}
