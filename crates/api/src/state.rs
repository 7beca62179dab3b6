/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and handed to the router; cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers check out one connection per
    /// request through [`crate::extract::DbSession`].
    pub pool: blog_db::DbPool,
}
