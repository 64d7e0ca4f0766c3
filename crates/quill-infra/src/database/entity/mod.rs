//! SeaORM entities for the blog schema.

pub mod author;
pub mod category;
pub mod like;
pub mod post;
pub mod status;
