//! # Quill Core
//!
//! The domain layer of the Quill blog backend.
//! This crate contains the blog's entities, input rules and repository ports,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
