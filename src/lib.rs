//! linkboard - a minimal community link-sharing board.
//!
//! Users submit URLs under a named community, browse submissions sorted by
//! recency, and attach text comments to a submission.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{is_valid_url, BoardService, Link, LinkRepository, NewLink, SqliteLinkRepository};
pub use config::Config;
pub use db::DbPool;
pub use error::{LinkboardError, Result};
