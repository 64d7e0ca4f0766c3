//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::NewPost;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub image: String,
    pub category_id: i32,
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub date: DateTimeWithTimeZone,
    pub status_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::status::Entity",
        from = "Column::StatusId",
        to = "super::status::Column::Id"
    )]
    Status,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            image: model.image,
            category_id: model.category_id,
            description: model.description,
            content: model.content,
            date: model.date.into(),
            status_id: model.status_id,
        }
    }
}

impl ActiveModel {
    /// Every mutable column set from `post`, stamped with `date`.
    ///
    /// The id is left unset; callers set it for updates.
    pub fn from_new_post(post: NewPost, date: DateTimeWithTimeZone) -> Self {
        Self {
            title: Set(post.title),
            image: Set(post.image),
            category_id: Set(post.category_id),
            description: Set(post.description),
            content: Set(post.content),
            date: Set(date),
            status_id: Set(post.status_id),
            ..Default::default()
        }
    }
}
