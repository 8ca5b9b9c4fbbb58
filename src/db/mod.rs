//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all content data. Nested collections
//! (itineraries, highlights, FAQs and the homepage document) are stored as
//! JSON in TEXT columns.

mod repository;
mod seed;

pub use repository::*;
pub use seed::seed_demo_data;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::models::HomepageData;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tours (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            slug TEXT NOT NULL,
            category TEXT NOT NULL,
            duration TEXT NOT NULL,
            price REAL NOT NULL DEFAULT 0,
            currency TEXT,
            highlights TEXT,
            itinerary TEXT,
            images TEXT,
            is_published INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            description TEXT,
            whats_included TEXT,
            whats_excluded TEXT,
            important_info TEXT,
            cancellation_policy TEXT,
            faq TEXT,
            similar_tours TEXT,
            difficulty TEXT,
            max_altitude TEXT,
            group_size TEXT,
            best_time TEXT,
            detailed_description TEXT,
            preparation_guide TEXT,
            what_to_expect TEXT,
            reviews TEXT,
            custom_styles TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blogs (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            slug TEXT NOT NULL,
            content TEXT NOT NULL,
            excerpt TEXT,
            cover_image TEXT NOT NULL DEFAULT '',
            is_published INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            author TEXT,
            images TEXT,
            tags TEXT,
            read_time TEXT,
            views INTEGER NOT NULL DEFAULT 0,
            category TEXT,
            featured INTEGER NOT NULL DEFAULT 0,
            custom_styles TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            message TEXT NOT NULL,
            created_at TEXT NOT NULL,
            is_read INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS homepage (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            data TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Install the default homepage document on first run
    let default_homepage = serde_json::to_string(&HomepageData::default()).unwrap_or_default();
    sqlx::query(
        "INSERT OR IGNORE INTO homepage (id, data, updated_at) VALUES (1, ?, datetime('now'))",
    )
    .bind(&default_homepage)
    .execute(pool)
    .await?;

    // Create indexes for common queries
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_tours_slug ON tours(slug);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_blogs_slug ON blogs(slug);
        CREATE INDEX IF NOT EXISTS idx_tours_published ON tours(is_published);
        CREATE INDEX IF NOT EXISTS idx_blogs_published ON blogs(is_published);
        CREATE INDEX IF NOT EXISTS idx_messages_is_read ON messages(is_read);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
