//! Web error handling for linkboard.
//!
//! Every failure path produces a response. NotFound and store failures both
//! render the generic error view; the underlying cause goes to the log, not
//! to the user.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::LinkboardError;

use super::templates::ErrorTemplate;

/// Error type returned by web handlers.
#[derive(Debug)]
pub struct WebError {
    status: StatusCode,
}

impl WebError {
    /// Error view with 404.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
        }
    }

    /// Error view with 500.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LinkboardError> for WebError {
    fn from(err: LinkboardError) -> Self {
        match err {
            LinkboardError::NotFound(_) => {
                tracing::debug!("Request failed: {err}");
                Self::not_found()
            }
            _ => {
                tracing::error!("Request failed: {err}");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = ErrorTemplate
            .render()
            .unwrap_or_else(|_| "Something went wrong.".to_string());
        (self.status, Html(body)).into_response()
    }
}
