//! Board handlers for the web UI.

use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::board::NewLink;
use crate::web::error::WebError;
use crate::web::templates::{IndexTemplate, LinkTemplate, NewLinkTemplate};
use crate::LinkboardError;

use super::AppState;

/// Form body for POST /new.
#[derive(Debug, Deserialize)]
pub struct NewLinkForm {
    pub title: String,
    pub url: String,
    pub community: String,
    #[serde(default)]
    pub user: Option<String>,
}

/// Form body for POST /link/:id/comment.
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub comment: String,
}

fn render<T: Template>(template: &T) -> Result<Html<String>, WebError> {
    let html = template.render().map_err(|e| {
        tracing::error!("Template rendering failed: {e}");
        WebError::internal()
    })?;
    Ok(Html(html))
}

/// GET / - list all links, newest first.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let links = state.service.list_all().await?;
    render(&IndexTemplate {
        links: &links,
        community: None,
    })
}

/// GET /lb/:community - list links for one community, newest first.
pub async fn community_index(
    State(state): State<Arc<AppState>>,
    Path(community): Path<String>,
) -> Result<Html<String>, WebError> {
    let links = state.service.list_by_community(&community).await?;
    render(&IndexTemplate {
        links: &links,
        community: Some(&community),
    })
}

/// GET /new - the empty submission form.
pub async fn new_link_form() -> Result<Html<String>, WebError> {
    render(&NewLinkTemplate { error: None })
}

/// POST /new - submit a link.
///
/// Redirects to the new link's page on success. A validation failure
/// re-renders the form with the error; anything else is the generic
/// error view.
pub async fn submit_link(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewLinkForm>,
) -> Response {
    let new_link = NewLink {
        title: form.title,
        url: form.url,
        community: form.community,
        user: form.user,
    };

    match state.service.create(new_link).await {
        Ok(link) => Redirect::to(&format!("/link/{}", link.id)).into_response(),
        Err(LinkboardError::Validation(message)) => {
            match render(&NewLinkTemplate {
                error: Some(&message),
            }) {
                Ok(html) => html.into_response(),
                Err(err) => err.into_response(),
            }
        }
        Err(err) => WebError::from(err).into_response(),
    }
}

/// GET /link/:id - a single link with its comments.
///
/// Malformed and unknown IDs both end up on the generic error view.
pub async fn show_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let link = state.service.get_by_id(&id).await?;
    render(&LinkTemplate { link: &link })
}

/// POST /link/:id/comment - append a comment, then return to the link.
pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, WebError> {
    let link = state.service.add_comment(&id, &form.comment).await?;
    Ok(Redirect::to(&format!("/link/{}", link.id)))
}
