//! Route definitions for articles.

use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes, merged into `/api/v1`.
///
/// ```text
/// GET    /articles/         list_articles
/// POST   /articles/         create_article
/// GET    /articles/{id}     get_article
/// PUT    /articles/{id}     update_article
/// DELETE /articles/{id}     delete_article
/// ```
///
/// The collection is served with and without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/articles/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
}
