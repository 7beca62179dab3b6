//! Handlers for the article CRUD endpoints.
//!
//! Every handler checks out one [`DbSession`] for the request. Payloads are
//! validated before the connection is acquired; a zero-row result becomes a
//! 404 naming the requested id.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use blog_core::article::{ArticleInput, ENTITY};
use blog_core::error::CoreError;
use blog_core::pagination::{clamp_limit, clamp_offset};
use blog_core::types::DbId;
use blog_db::models::article::{Article, CreateArticle, UpdateArticle};
use blog_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery, DbSession};
use crate::query::PaginationParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /articles/
pub async fn create_article(
    State(state): State<AppState>,
    AppJson(input): AppJson<ArticleInput>,
) -> AppResult<impl IntoResponse> {
    let input = CreateArticle::try_from(input)?;
    let mut db = DbSession::acquire(&state.pool).await?;
    let article = ArticleRepo::create(&mut *db, &input).await?;

    tracing::info!(article_id = article.id, "Article created");

    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /articles/?skip=&limit=
///
/// Returns articles in insertion order. `limit` defaults to 10 and is capped.
pub async fn list_articles(
    AppQuery(params): AppQuery<PaginationParams>,
    mut db: DbSession,
) -> AppResult<Json<Vec<Article>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.skip);

    let articles = ArticleRepo::list(&mut *db, limit, offset).await?;
    Ok(Json(articles))
}

/// GET /articles/{id}
pub async fn get_article(
    AppPath(id): AppPath<DbId>,
    mut db: DbSession,
) -> AppResult<Json<Article>> {
    let article = ArticleRepo::find_by_id(&mut *db, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(article))
}

/// PUT /articles/{id}
///
/// Overwrites only the fields present in the body. Explicit `null` is
/// rejected.
pub async fn update_article(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ArticleInput>,
) -> AppResult<Json<Article>> {
    let input = UpdateArticle::try_from(input)?;
    let mut db = DbSession::acquire(&state.pool).await?;
    let article = ArticleRepo::update(&mut *db, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(article_id = id, "Article updated");

    Ok(Json(article))
}

/// DELETE /articles/{id}
///
/// Responds with the article as it was before deletion.
pub async fn delete_article(
    AppPath(id): AppPath<DbId>,
    mut db: DbSession,
) -> AppResult<Json<Article>> {
    let article = ArticleRepo::delete(&mut *db, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(article_id = id, "Article deleted");

    Ok(Json(article))
}
