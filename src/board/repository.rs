//! Link repository for linkboard.
//!
//! The `LinkRepository` trait is the persistence seam: the board service is
//! handed an implementation at construction time, so tests can substitute an
//! in-memory fake for the SQLite-backed repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::DbPool;
use crate::{LinkboardError, Result};

use super::link::Link;

/// Persistence contract for the link collection.
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persist a newly created link.
    async fn insert(&self, link: &Link) -> Result<()>;

    /// Fetch every link, newest first.
    async fn list_all(&self) -> Result<Vec<Link>>;

    /// Fetch links posted to the given community, newest first.
    async fn list_by_community(&self, community: &str) -> Result<Vec<Link>>;

    /// Fetch a single link by ID.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Link>>;

    /// Append a comment to a link and return the updated link.
    ///
    /// Returns None when no link with the given ID exists.
    async fn append_comment(&self, id: Uuid, comment: &str) -> Result<Option<Link>>;
}

/// SQLite-backed repository for the link collection.
pub struct SqliteLinkRepository {
    pool: DbPool,
}

/// Row shape for the links table. Comments live in their own table and are
/// attached when the row is converted into a Link.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: String,
    title: String,
    url: String,
    community: String,
    user: String,
    created: DateTime<Utc>,
}

impl LinkRow {
    fn into_link(self, comments: Vec<String>) -> Result<Link> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| LinkboardError::Store(format!("bad link id in store: {e}")))?;
        Ok(Link {
            id,
            title: self.title,
            url: self.url,
            community: self.community,
            user: self.user,
            created: self.created,
            comments,
        })
    }
}

impl SqliteLinkRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn comments_for(&self, link_id: &str) -> Result<Vec<String>> {
        let comments = sqlx::query_scalar("SELECT body FROM comments WHERE link_id = ? ORDER BY id")
            .bind(link_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(comments)
    }

    async fn attach_comments(&self, rows: Vec<LinkRow>) -> Result<Vec<Link>> {
        let mut links = Vec::with_capacity(rows.len());
        for row in rows {
            let comments = self.comments_for(&row.id).await?;
            links.push(row.into_link(comments)?);
        }
        Ok(links)
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, link: &Link) -> Result<()> {
        sqlx::query(
            "INSERT INTO links (id, title, url, community, user, created)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(link.id.to_string())
        .bind(&link.title)
        .bind(&link.url)
        .bind(&link.community)
        .bind(&link.user)
        .bind(link.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Link>> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            "SELECT id, title, url, community, user, created
             FROM links ORDER BY created DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        self.attach_comments(rows).await
    }

    async fn list_by_community(&self, community: &str) -> Result<Vec<Link>> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            "SELECT id, title, url, community, user, created
             FROM links WHERE community = ? ORDER BY created DESC",
        )
        .bind(community)
        .fetch_all(&self.pool)
        .await?;

        self.attach_comments(rows).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Link>> {
        let row: Option<LinkRow> = sqlx::query_as(
            "SELECT id, title, url, community, user, created
             FROM links WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let comments = self.comments_for(&row.id).await?;
                Ok(Some(row.into_link(comments)?))
            }
            None => Ok(None),
        }
    }

    async fn append_comment(&self, id: Uuid, comment: &str) -> Result<Option<Link>> {
        // INSERT..SELECT checks existence and appends in one atomic
        // statement, so concurrent appends to the same link cannot lose
        // each other's writes.
        let result = sqlx::query(
            "INSERT INTO comments (link_id, body)
             SELECT id, ? FROM links WHERE id = ?",
        )
        .bind(comment)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }
}
