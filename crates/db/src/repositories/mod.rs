//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept any Postgres executor (a pool or a checked-out connection) as the
//! first argument.

pub mod article_repo;

pub use article_repo::ArticleRepo;
