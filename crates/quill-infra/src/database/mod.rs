//! Database pool and PostgreSQL repositories.

mod pool;
mod post_query;
mod postgres_base;
pub mod postgres_repo;

pub mod entity;

pub use pool::{DatabaseConfig, DbPool};
pub use postgres_repo::{
    PostgresAuthorRepository, PostgresCategoryRepository, PostgresPostRepository,
};
