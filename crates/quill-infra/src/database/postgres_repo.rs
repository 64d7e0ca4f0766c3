//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    Unchanged,
};

use quill_core::domain::{
    AUTHOR_ID, Author, AuthorPatch, Category, CategoryName, NewAuthor, NewPost, Post, PostDetail,
    PostPage, PostQuery,
};
use quill_core::error::RepoError;
use quill_core::ports::{AuthorRepository, CategoryRepository, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::post_query::{self, PostDetailRow};
use super::postgres_base::{PostgresBaseRepository, map_db_err, none_if_not_updated};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError> {
        tracing::debug!(
            page = query.page.page,
            limit = query.page.limit,
            category = ?query.category,
            keyword = ?query.keyword,
            "Listing posts"
        );

        // Two independent statements; a write in between can skew the total.
        let rows = post_query::page_window(query)
            .into_model::<PostDetailRow>()
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        let total = post_query::filtered_posts(query)
            .count(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(PostPage::new(
            rows.into_iter().map(Into::into).collect(),
            total,
            query.page,
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PostDetail>, RepoError> {
        tracing::debug!(post_id = id, "Finding post");

        let row = post_query::post_detail(id)
            .into_model::<PostDetailRow>()
            .one(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from_new_post(post, Utc::now().into())
            .insert(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, id: i32, post: NewPost) -> Result<Option<Post>, RepoError> {
        if self.find_model(id).await?.is_none() {
            return Ok(None);
        }

        let mut active = post::ActiveModel::from_new_post(post, Utc::now().into());
        active.id = Unchanged(id);

        Ok(none_if_not_updated(active.update(self.conn()).await)?.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepoError> {
        if self.find_model(id).await?.is_none() {
            return Ok(false);
        }

        self.delete_model(id).await
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let result = CategoryEntity::find()
            .order_by_asc(category::Column::Id)
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, name: CategoryName) -> Result<Category, RepoError> {
        let model = category::ActiveModel {
            name: Set(name.into_inner()),
            ..Default::default()
        }
        .insert(self.conn())
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn rename(&self, id: i32, name: CategoryName) -> Result<Option<Category>, RepoError> {
        let active = category::ActiveModel {
            id: Unchanged(id),
            name: Set(name.into_inner()),
        };

        Ok(none_if_not_updated(active.update(self.conn()).await)?.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<Option<Category>, RepoError> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        if !self.delete_model(id).await? {
            return Ok(None);
        }

        Ok(Some(model.into()))
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn get(&self) -> Result<Option<Author>, RepoError> {
        Ok(self.find_model(AUTHOR_ID).await?.map(Into::into))
    }

    async fn username_exists(&self, username: &str) -> Result<bool, RepoError> {
        tracing::debug!(username, "Checking author username");

        let existing = AuthorEntity::find()
            .filter(author::Column::Username.eq(username))
            .one(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(existing.is_some())
    }

    async fn create(&self, author: NewAuthor) -> Result<Author, RepoError> {
        let model = author::ActiveModel::from(author)
            .insert(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, patch: AuthorPatch) -> Result<Option<Author>, RepoError> {
        let active = author::ActiveModel::from_patch(AUTHOR_ID, patch);
        Ok(none_if_not_updated(active.update(self.conn()).await)?.map(Into::into))
    }
}
