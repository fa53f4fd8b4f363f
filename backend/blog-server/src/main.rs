use blog_server::{AppState, build_router, cookie_key, logger};

use blog_config::Config;
use blog_db::SqliteDocumentStore;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if log_file_path.is_some() {
        std::fs::create_dir_all(config.log_dir()?)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting blog-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = blog_db::connect(&database_path, config.database.max_connections).await?;

    info!("Running database migrations...");
    blog_db::migrate(&pool).await?;
    info!("Migrations complete");

    let key = cookie_key(config.session.secret.as_deref())?;
    let app_state = AppState::new(Arc::new(SqliteDocumentStore::new(pool)), key);
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving without signal-driven shutdown
            std::future::pending::<()>().await;
        }
    }
}
