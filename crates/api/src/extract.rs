//! Request extractors shared by the handlers.

use std::ops::{Deref, DerefMut};

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};

use blog_db::DbPool;

use crate::error::AppError;
use crate::state::AppState;

/// A database connection scoped to a single request.
///
/// Read-only handlers take it as an extractor. Handlers with a body call
/// [`DbSession::acquire`] once the payload has been validated, so a rejected
/// payload never checks out a connection. Either way the connection returns
/// to the pool when the handler's future is dropped, including on timeout.
///
/// ```ignore
/// async fn handler(mut db: DbSession) -> AppResult<Json<Vec<Article>>> {
///     Ok(Json(ArticleRepo::list(&mut *db, 10, 0).await?))
/// }
/// ```
pub struct DbSession(pub PoolConnection<Postgres>);

impl DbSession {
    pub async fn acquire(pool: &DbPool) -> Result<Self, AppError> {
        Ok(DbSession(pool.acquire().await?))
    }
}

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        DbSession::acquire(&state.pool).await
    }
}

impl Deref for DbSession {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        &*self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut PgConnection {
        &mut *self.0
    }
}

/// `axum::Json` with rejections reported through [`AppError`], so malformed
/// bodies get the same JSON error shape as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` reporting parse failures as [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `axum::extract::Query` reporting parse failures as [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
