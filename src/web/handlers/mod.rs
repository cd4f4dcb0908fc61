//! Web handlers for linkboard.

pub mod board;

pub use board::*;

use crate::board::BoardService;

/// State shared across all handlers.
pub struct AppState {
    /// The board service backing every route.
    pub service: BoardService,
}

impl AppState {
    /// Create the shared application state.
    pub fn new(service: BoardService) -> Self {
        Self { service }
    }
}
