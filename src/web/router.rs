//! Router configuration for the web UI.

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    add_comment, community_index, index, new_link_form, show_link, submit_link, AppState,
};

/// Create the main router.
///
/// The path spelling is part of the contract: listings at `/` and
/// `/lb/:community`, submission at `/new`, link pages at `/link/:id`,
/// comments at `/link/:id/comment`.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/lb/:community", get(community_index))
        .route("/new", get(new_link_form).post(submit_link))
        .route("/link/:id", get(show_link))
        .route("/link/:id/comment", post(add_comment))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
