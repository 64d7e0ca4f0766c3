use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - a blog article as stored in the `posts` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub category_id: i32,
    pub description: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub status_id: i32,
}

/// A post joined with its category name, status label and like count.
///
/// This is the shape returned by the detail and listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub category_id: i32,
    pub category: String,
    pub description: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub status_id: i32,
    pub status: String,
    pub likes_count: i64,
}

/// The full set of mutable post fields.
///
/// Used for both create and update: posts are always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub image: String,
    pub category_id: i32,
    pub description: String,
    pub content: String,
    pub status_id: i32,
}

impl NewPost {
    /// Names of required fields that are blank or zero.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        for (name, value) in [
            ("title", &self.title),
            ("image", &self.image),
            ("description", &self.description),
            ("content", &self.content),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        if self.category_id <= 0 {
            missing.push("category_id");
        }
        if self.status_id <= 0 {
            missing.push("status_id");
        }

        missing
    }

    /// Reject posts with any required field missing.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "missing required post fields: {}",
                missing.join(", ")
            )))
        }
    }
}
