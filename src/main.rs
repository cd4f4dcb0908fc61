use std::sync::Arc;

use tracing::info;

use linkboard::board::{BoardService, SqliteLinkRepository};
use linkboard::web::{handlers::AppState, WebServer};
use linkboard::{db, Config, Result};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = linkboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        linkboard::logging::init_console_only(&config.logging.level);
    }

    info!("linkboard - community link-sharing board");

    if let Err(e) = run(config).await {
        tracing::error!("Fatal: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let pool = db::connect(&config.database.path, config.database.max_connections).await?;

    let repo = Arc::new(SqliteLinkRepository::new(pool));
    let service = BoardService::new(repo);
    let app_state = Arc::new(AppState::new(service));

    WebServer::new(&config.server, app_state)?.run().await
}
