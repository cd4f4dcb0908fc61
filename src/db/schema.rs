//! Database schema and migrations for linkboard.
//!
//! Migrations are applied sequentially when the database is opened.
//! The schema_version table tracks which migrations have been applied.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: Links table - one row per submitted URL
    r#"
CREATE TABLE links (
    id          TEXT PRIMARY KEY,                -- UUID assigned at creation
    title       TEXT NOT NULL,
    url         TEXT NOT NULL,
    community   TEXT NOT NULL,                   -- free-text partition label
    user        TEXT NOT NULL DEFAULT 'anonymous',
    created     TEXT NOT NULL                    -- UTC timestamp, sole sort key
);

CREATE INDEX idx_links_community ON links(community);
CREATE INDEX idx_links_created ON links(created);
"#,
    // v2: Comments table - append-only text entries attached to a link
    r#"
CREATE TABLE comments (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    link_id     TEXT NOT NULL REFERENCES links(id) ON DELETE CASCADE,
    body        TEXT NOT NULL
);

CREATE INDEX idx_comments_link_id ON comments(link_id);
"#,
];
