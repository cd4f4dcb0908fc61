//! Link model for linkboard.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Submitter label used when no user is given.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Link entity representing a single submitted URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Unique link ID, assigned at creation.
    pub id: Uuid,
    /// Link title.
    pub title: String,
    /// The submitted URL.
    pub url: String,
    /// Community the link was posted to (free-text partition label).
    pub community: String,
    /// Submitter label. Not an identity, just text.
    pub user: String,
    /// Creation timestamp. Listings sort by this, newest first.
    pub created: DateTime<Utc>,
    /// Comment texts in append order.
    pub comments: Vec<String>,
}

/// Data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    /// Link title.
    pub title: String,
    /// The URL to submit.
    pub url: String,
    /// Community to post to.
    pub community: String,
    /// Optional submitter label. Defaults to "anonymous" when absent.
    pub user: Option<String>,
}

impl NewLink {
    /// Create a new link submission with required fields.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        community: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            community: community.into(),
            user: None,
        }
    }

    /// Set the submitter label.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_link_required_fields() {
        let new_link = NewLink::new("Rust 1.80", "https://blog.rust-lang.org/", "rust");
        assert_eq!(new_link.title, "Rust 1.80");
        assert_eq!(new_link.url, "https://blog.rust-lang.org/");
        assert_eq!(new_link.community, "rust");
        assert!(new_link.user.is_none());
    }

    #[test]
    fn test_new_link_with_user() {
        let new_link = NewLink::new("t", "https://example.com", "c").with_user("alice");
        assert_eq!(new_link.user.as_deref(), Some("alice"));
    }

    #[test]
    fn test_link_starts_without_comments() {
        let link = Link {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            url: "https://example.com".to_string(),
            community: "c".to_string(),
            user: ANONYMOUS_USER.to_string(),
            created: Utc::now(),
            comments: Vec::new(),
        };
        assert!(link.comments.is_empty());
        assert_eq!(link.user, "anonymous");
    }
}
