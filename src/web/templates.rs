//! Askama templates for the board views.

use askama::Template;

use crate::board::Link;

/// Listing of links, optionally scoped to a community.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub links: &'a [Link],
    pub community: Option<&'a str>,
}

/// The link submission form, with an error message after a failed submit.
#[derive(Template)]
#[template(path = "new.html")]
pub struct NewLinkTemplate<'a> {
    pub error: Option<&'a str>,
}

/// A single link with its comments.
#[derive(Template)]
#[template(path = "link.html")]
pub struct LinkTemplate<'a> {
    pub link: &'a Link,
}

/// Generic error view. Deliberately carries no cause detail.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate;
