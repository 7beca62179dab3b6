//! Repository for the `articles` table.
//!
//! Every method is a single autocommitted statement. "Not found" comes back
//! as `Ok(None)`; `Err` is reserved for connectivity and storage faults.

use blog_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::article::{Article, CreateArticle, UpdateArticle};

/// Column list for articles queries.
const COLUMNS: &str = "id, title, content, author, created_at";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the stored row with its generated id.
    pub async fn create<'e, E>(executor: E, input: &CreateArticle) -> Result<Article, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO articles (title, content, author, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.author)
            .bind(chrono::Utc::now())
            .fetch_one(executor)
            .await
    }

    /// Find an article by ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Article>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List articles in insertion order.
    pub async fn list<'e, E>(
        executor: E,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(executor)
            .await
    }

    /// Update only the supplied fields.
    ///
    /// Uses `COALESCE` so `None` keeps the existing value. Returns `None` if
    /// no row has the given id.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE articles SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                author = COALESCE($4, author)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.author)
            .fetch_optional(executor)
            .await
    }

    /// Delete an article, returning the row as it was before deletion.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<Option<Article>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("DELETE FROM articles WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
