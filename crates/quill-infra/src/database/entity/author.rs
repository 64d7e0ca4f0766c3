//! Author entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{AuthorPatch, NewAuthor};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "author")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub img_url: Option<String>,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author. Drops the password column.
impl From<Model> for quill_core::domain::Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            name: model.name,
            bio: model.bio,
            img_url: model.img_url,
        }
    }
}

/// New author rows carry an empty password placeholder.
impl From<NewAuthor> for ActiveModel {
    fn from(author: NewAuthor) -> Self {
        Self {
            username: Set(author.username),
            email: Set(author.email),
            name: Set(author.name),
            bio: Set(author.bio),
            img_url: Set(author.img_url),
            password: Set(String::new()),
            ..Default::default()
        }
    }
}

impl ActiveModel {
    /// Only the patched columns are set, so the UPDATE names just those.
    pub fn from_patch(id: i32, patch: AuthorPatch) -> Self {
        let mut model = Self {
            id: sea_orm::Unchanged(id),
            ..Default::default()
        };

        if let Some(username) = patch.username {
            model.username = Set(username);
        }
        if let Some(email) = patch.email {
            model.email = Set(email);
        }
        if let Some(name) = patch.name {
            model.name = Set(name);
        }
        if let Some(bio) = patch.bio {
            model.bio = Set(bio);
        }
        if let Some(img_url) = patch.img_url {
            model.img_url = Set(img_url);
        }

        model
    }
}
