use async_trait::async_trait;

use crate::domain::{
    Author, AuthorPatch, Category, CategoryName, NewAuthor, NewPost, Post, PostDetail, PostPage,
    PostQuery,
};
use crate::error::RepoError;

/// Post repository.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// One page of posts matching the query, newest first, with totals.
    async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError>;

    /// A single post with its category, status and like count.
    async fn find_by_id(&self, id: i32) -> Result<Option<PostDetail>, RepoError>;

    /// Insert a post, stamping the creation time.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Replace every mutable field of an existing post and refresh its timestamp.
    /// Returns `None` when the post does not exist.
    async fn update(&self, id: i32, post: NewPost) -> Result<Option<Post>, RepoError>;

    /// Delete a post. Returns `false` when the post does not exist.
    async fn delete(&self, id: i32) -> Result<bool, RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, RepoError>;

    async fn create(&self, name: CategoryName) -> Result<Category, RepoError>;

    /// Returns `None` when the category does not exist.
    async fn rename(&self, id: i32, name: CategoryName) -> Result<Option<Category>, RepoError>;

    /// Returns the deleted row, or `None` when the category does not exist.
    async fn delete(&self, id: i32) -> Result<Option<Category>, RepoError>;
}

/// Repository for the single author record keyed by `AUTHOR_ID`.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn get(&self) -> Result<Option<Author>, RepoError>;

    async fn username_exists(&self, username: &str) -> Result<bool, RepoError>;

    /// Insert an author with an empty password placeholder.
    async fn create(&self, author: NewAuthor) -> Result<Author, RepoError>;

    /// Apply a patch. Returns `None` when the author row is missing.
    ///
    /// Callers reject empty patches with [`AuthorPatch::ensure_not_empty`];
    /// an empty one writes nothing and only re-reads the row.
    async fn update(&self, patch: AuthorPatch) -> Result<Option<Author>, RepoError>;
}
