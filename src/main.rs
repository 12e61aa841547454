use blogly::config::{AppState, Config};
use blogly::seeders;
use blogly::utils::app_error::AppError;
use blogly::utils::templates::load_templates;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blogly=debug,tower_http=debug")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Blogly stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let cfg = Config::init()?;
    tracing::info!("Starting Blogly...");

    // 1. Database Connection
    tracing::info!("Connecting to database...");
    let mut opts = ConnectOptions::new(cfg.database_url.clone());
    opts.sqlx_logging(true);
    let db = Database::connect(opts).await?;

    // 2. Schema
    Migrator::up(&db, None).await?;
    tracing::info!("Database ready");

    // 3. Database Seeding
    if cfg.seed_tags {
        if let Err(e) = seeders::run_seeders(&db).await {
            tracing::error!("Seeding failed: {}", e);
        }
    }

    // 4. Templates
    let templates = load_templates(&cfg.templates_dir)?;

    // 5. Initialize Router
    let app = blogly::app(AppState::new(db, templates));

    // 6. Start Server
    let addr: SocketAddr = cfg
        .server_addr()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {}: {}", cfg.server_addr(), e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server ready! Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
