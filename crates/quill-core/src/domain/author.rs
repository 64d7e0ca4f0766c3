use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Key of the single author row.
///
/// There is no authentication layer, so every author operation targets this
/// record. A multi-author design would replace it with the caller's identity.
pub const AUTHOR_ID: i32 = 1;

/// Author profile. The stored password column is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub img_url: Option<String>,
}

/// Input for creating the author record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuthor {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub img_url: Option<String>,
}

impl NewAuthor {
    /// Check required fields and turn empty optional strings into `None`.
    pub fn normalize(self) -> Result<Self, DomainError> {
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            return Err(DomainError::Validation(
                "Username and email are required".to_string(),
            ));
        }

        Ok(Self {
            name: self.name.filter(|s| !s.is_empty()),
            bio: self.bio.filter(|s| !s.is_empty()),
            img_url: self.img_url.filter(|s| !s.is_empty()),
            ..self
        })
    }
}

/// Partial update of the author record.
///
/// `None` leaves a column untouched. For the nullable columns,
/// `Some(None)` clears the value (an explicit JSON `null`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorPatch {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub img_url: Option<Option<String>>,
}

impl AuthorPatch {
    /// True when the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.name.is_none()
            && self.bio.is_none()
            && self.img_url.is_none()
    }

    /// Reject a patch that names no column.
    pub fn ensure_not_empty(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation("No fields to update".to_string()));
        }
        Ok(())
    }
}

/// Distinguish a field sent as `null` from a missing one.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
