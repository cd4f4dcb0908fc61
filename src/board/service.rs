//! Board service for linkboard.
//!
//! High-level operations over the link collection. The service is stateless
//! between calls; all state lives behind the injected repository.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{LinkboardError, Result};

use super::link::{Link, NewLink, ANONYMOUS_USER};
use super::repository::LinkRepository;
use super::validation::is_valid_url;

/// Validate that a required field is present.
fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(LinkboardError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Service exposing the board operations.
#[derive(Clone)]
pub struct BoardService {
    repo: Arc<dyn LinkRepository>,
}

impl BoardService {
    /// Create a new board service over the given repository.
    pub fn new(repo: Arc<dyn LinkRepository>) -> Self {
        Self { repo }
    }

    /// List every link, newest first.
    pub async fn list_all(&self) -> Result<Vec<Link>> {
        self.repo.list_all().await
    }

    /// List links posted to a community, newest first.
    ///
    /// Communities are implicit and case-sensitive; an unknown community
    /// simply yields an empty list.
    pub async fn list_by_community(&self, community: &str) -> Result<Vec<Link>> {
        self.repo.list_by_community(community).await
    }

    /// Validate and persist a new link submission.
    ///
    /// Assigns the ID and creation timestamp, and defaults a missing or
    /// blank user to "anonymous".
    pub async fn create(&self, new_link: NewLink) -> Result<Link> {
        validate_required("title", &new_link.title)?;
        validate_required("url", &new_link.url)?;
        validate_required("community", &new_link.community)?;

        if !is_valid_url(&new_link.url) {
            return Err(LinkboardError::Validation(format!(
                "{} is not a valid URL!",
                new_link.url
            )));
        }

        let user = new_link
            .user
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS_USER.to_string());

        let link = Link {
            id: Uuid::new_v4(),
            title: new_link.title,
            url: new_link.url,
            community: new_link.community,
            user,
            created: Utc::now(),
            comments: Vec::new(),
        };

        self.repo.insert(&link).await?;

        tracing::info!(
            link_id = %link.id,
            community = %link.community,
            "Link created"
        );

        Ok(link)
    }

    /// Fetch a single link by its ID text.
    ///
    /// A malformed ID is indistinguishable from an unknown one: both are
    /// NotFound.
    pub async fn get_by_id(&self, id: &str) -> Result<Link> {
        let id = parse_id(id)?;
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| LinkboardError::NotFound("link".to_string()))
    }

    /// Append a comment to a link and return the updated link.
    pub async fn add_comment(&self, id: &str, comment: &str) -> Result<Link> {
        let id = parse_id(id)?;
        self.repo
            .append_comment(id, comment)
            .await?
            .ok_or_else(|| LinkboardError::NotFound("link".to_string()))
    }
}

fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| LinkboardError::NotFound("link".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration};
    use std::sync::Mutex;

    /// In-memory stand-in for the SQLite repository.
    struct InMemoryLinkRepository {
        links: Mutex<Vec<Link>>,
    }

    impl InMemoryLinkRepository {
        fn new() -> Self {
            Self {
                links: Mutex::new(Vec::new()),
            }
        }

        fn len(&self) -> usize {
            self.links.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LinkRepository for InMemoryLinkRepository {
        async fn insert(&self, link: &Link) -> Result<()> {
            self.links.lock().unwrap().push(link.clone());
            Ok(())
        }

        async fn list_all(&self) -> Result<Vec<Link>> {
            let mut links = self.links.lock().unwrap().clone();
            links.sort_by(|a, b| b.created.cmp(&a.created));
            Ok(links)
        }

        async fn list_by_community(&self, community: &str) -> Result<Vec<Link>> {
            let mut links: Vec<Link> = self
                .links
                .lock()
                .unwrap()
                .iter()
                .filter(|l| l.community == community)
                .cloned()
                .collect();
            links.sort_by(|a, b| b.created.cmp(&a.created));
            Ok(links)
        }

        async fn get_by_id(&self, id: Uuid) -> Result<Option<Link>> {
            Ok(self
                .links
                .lock()
                .unwrap()
                .iter()
                .find(|l| l.id == id)
                .cloned())
        }

        async fn append_comment(&self, id: Uuid, comment: &str) -> Result<Option<Link>> {
            let mut links = self.links.lock().unwrap();
            match links.iter_mut().find(|l| l.id == id) {
                Some(link) => {
                    link.comments.push(comment.to_string());
                    Ok(Some(link.clone()))
                }
                None => Ok(None),
            }
        }
    }

    fn service() -> (BoardService, Arc<InMemoryLinkRepository>) {
        let repo = Arc::new(InMemoryLinkRepository::new());
        (BoardService::new(repo.clone()), repo)
    }

    fn stored_link(title: &str, community: &str, created: DateTime<Utc>) -> Link {
        Link {
            id: Uuid::new_v4(),
            title: title.to_string(),
            url: "https://example.com".to_string(),
            community: community.to_string(),
            user: ANONYMOUS_USER.to_string(),
            created,
            comments: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_create_defaults_user_to_anonymous() {
        let (service, _) = service();
        let link = service
            .create(NewLink::new("Title", "https://example.com", "tech"))
            .await
            .unwrap();
        assert_eq!(link.user, "anonymous");
        assert!(link.comments.is_empty());
    }

    #[tokio::test]
    async fn test_create_blank_user_counts_as_omitted() {
        let (service, _) = service();
        let link = service
            .create(NewLink::new("Title", "https://example.com", "tech").with_user("  "))
            .await
            .unwrap();
        assert_eq!(link.user, "anonymous");
    }

    #[tokio::test]
    async fn test_create_keeps_given_user() {
        let (service, _) = service();
        let link = service
            .create(NewLink::new("Title", "https://example.com", "tech").with_user("alice"))
            .await
            .unwrap();
        assert_eq!(link.user, "alice");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_url_and_persists_nothing() {
        let (service, repo) = service();
        let result = service
            .create(NewLink::new("Title", "javascript:alert(1)", "tech"))
            .await;
        assert!(matches!(result, Err(LinkboardError::Validation(_))));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_required_fields() {
        let (service, repo) = service();
        for new_link in [
            NewLink::new("", "https://example.com", "tech"),
            NewLink::new("Title", "", "tech"),
            NewLink::new("Title", "https://example.com", ""),
        ] {
            let result = service.create(new_link).await;
            assert!(matches!(result, Err(LinkboardError::Validation(_))));
        }
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_round_trip_by_returned_id() {
        let (service, _) = service();
        let created = service
            .create(NewLink::new("Title", "https://example.com/x", "tech").with_user("bob"))
            .await
            .unwrap();
        let fetched = service.get_by_id(&created.id.to_string()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_and_malformed_are_not_found() {
        let (service, _) = service();
        let unknown = service.get_by_id(&Uuid::new_v4().to_string()).await;
        assert!(matches!(unknown, Err(LinkboardError::NotFound(_))));

        let malformed = service.get_by_id("not-a-uuid").await;
        assert!(matches!(malformed, Err(LinkboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_by_community_filters_and_sorts() {
        let (service, repo) = service();
        let base = Utc::now();
        for (i, community) in ["x", "x", "x", "y", "y"].iter().enumerate() {
            let link = stored_link(
                &format!("link {i}"),
                community,
                base + Duration::seconds(i as i64),
            );
            repo.insert(&link).await.unwrap();
        }

        let links = service.list_by_community("x").await.unwrap();
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|l| l.community == "x"));
        assert!(links.windows(2).all(|w| w[0].created >= w[1].created));

        let empty = service.list_by_community("z").await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_communities_are_case_sensitive() {
        let (service, repo) = service();
        repo.insert(&stored_link("a", "Tech", Utc::now()))
            .await
            .unwrap();
        repo.insert(&stored_link("b", "tech", Utc::now()))
            .await
            .unwrap();

        assert_eq!(service.list_by_community("Tech").await.unwrap().len(), 1);
        assert_eq!(service.list_by_community("tech").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let (service, repo) = service();
        let base = Utc::now();
        for i in 0..4 {
            let link = stored_link(&format!("link {i}"), "c", base + Duration::seconds(i));
            repo.insert(&link).await.unwrap();
        }

        let links = service.list_all().await.unwrap();
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].title, "link 3");
        assert!(links.windows(2).all(|w| w[0].created >= w[1].created));
    }

    #[tokio::test]
    async fn test_add_comment_appends_at_tail() {
        let (service, _) = service();
        let link = service
            .create(NewLink::new("Title", "https://example.com", "tech"))
            .await
            .unwrap();
        let id = link.id.to_string();

        service.add_comment(&id, "first").await.unwrap();
        let updated = service.add_comment(&id, "nice").await.unwrap();

        assert_eq!(updated.comments, vec!["first", "nice"]);
        assert_eq!(updated.comments.last().map(String::as_str), Some("nice"));
        // Everything except the comment sequence is untouched.
        assert_eq!(updated.id, link.id);
        assert_eq!(updated.title, link.title);
        assert_eq!(updated.url, link.url);
        assert_eq!(updated.community, link.community);
        assert_eq!(updated.user, link.user);
        assert_eq!(updated.created, link.created);
    }

    #[tokio::test]
    async fn test_add_comment_unknown_id_mutates_nothing() {
        let (service, repo) = service();
        let link = service
            .create(NewLink::new("Title", "https://example.com", "tech"))
            .await
            .unwrap();

        let result = service
            .add_comment(&Uuid::new_v4().to_string(), "orphan")
            .await;
        assert!(matches!(result, Err(LinkboardError::NotFound(_))));

        let unchanged = service.get_by_id(&link.id.to_string()).await.unwrap();
        assert!(unchanged.comments.is_empty());
    }
}
