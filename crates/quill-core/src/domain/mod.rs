//! Domain entities - the core business objects.

mod author;
mod category;
mod page;
mod post;

pub use author::{AUTHOR_ID, Author, AuthorPatch, NewAuthor};
pub use category::{Category, CategoryName};
pub use page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PostPage, PostQuery};
pub use post::{NewPost, Post, PostDetail};
