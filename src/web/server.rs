//! Web server for linkboard.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::{LinkboardError, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Web server hosting the board UI.
pub struct WebServer {
    addr: SocketAddr,
    app_state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &ServerConfig, app_state: Arc<AppState>) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| LinkboardError::Config(format!("invalid server address: {e}")))?;

        Ok(Self { addr, app_state })
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let router = create_router(self.app_state);
        let listener = TcpListener::bind(self.addr).await?;
        info!("Web server listening on {}", self.addr);

        axum::serve(listener, router)
            .await
            .map_err(LinkboardError::Io)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardService, SqliteLinkRepository};

    #[tokio::test]
    async fn test_rejects_invalid_address() {
        let pool = crate::db::connect_in_memory().await.unwrap();
        let service = BoardService::new(Arc::new(SqliteLinkRepository::new(pool)));
        let state = Arc::new(AppState::new(service));

        let config = ServerConfig {
            host: "not an address".to_string(),
            port: 0,
        };
        assert!(matches!(
            WebServer::new(&config, state),
            Err(LinkboardError::Config(_))
        ));
    }
}
