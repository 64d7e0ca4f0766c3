//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{AuthorRepository, CategoryRepository, PostRepository};
use quill_infra::{
    DbPool, PostgresAuthorRepository, PostgresCategoryRepository, PostgresPostRepository,
};

/// Shared application state.
///
/// Every repository borrows connections from the same pool; nothing else is
/// shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub author: Arc<dyn AuthorRepository>,
    pub db: DbPool,
}

impl AppState {
    /// Build the repositories on top of an open pool.
    pub fn new(db: DbPool) -> Self {
        let state = Self {
            posts: Arc::new(PostgresPostRepository::new(db.shared())),
            categories: Arc::new(PostgresCategoryRepository::new(db.shared())),
            author: Arc::new(PostgresAuthorRepository::new(db.shared())),
            db,
        };

        tracing::info!("Application state initialized");
        state
    }
}
