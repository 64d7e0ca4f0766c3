//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! SeaORM entities for the blog schema, the pooled connection handle and
//! the PostgreSQL repositories.

pub mod database;

pub use database::{
    DatabaseConfig, DbPool, PostgresAuthorRepository, PostgresCategoryRepository,
    PostgresPostRepository,
};
