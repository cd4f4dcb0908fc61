//! Board module for linkboard.
//!
//! This module provides the link-sharing board functionality:
//! - The Link entity (a submitted URL with its comments)
//! - URL validation for submissions
//! - The repository abstraction over the persistent store
//! - The board service (list, submit, fetch, comment)

mod link;
mod repository;
mod service;
mod validation;

pub use link::{Link, NewLink, ANONYMOUS_USER};
pub use repository::{LinkRepository, SqliteLinkRepository};
pub use service::BoardService;
pub use validation::{is_valid_url, MAX_URL_LEN};
