//! Web module for linkboard.
//!
//! HTML-over-HTTP surface: listings, the submission form, link detail
//! pages with comments, and a generic error view.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod templates;

pub use error::WebError;
pub use router::create_router;
pub use server::WebServer;
