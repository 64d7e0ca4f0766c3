//! Query shapes for reading posts.
//!
//! Listing runs two statements built from the same filtered select: the page
//! window with names and like counts, and a `COUNT(*)` over the filtered posts.
//! User input only ever reaches SQL as bound values.

use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Condition, Expr, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

use quill_core::domain::{PostDetail, PostQuery};

use super::entity::{category, like, post, status};

/// A post row with its joined names and aggregated like count.
#[derive(Debug, Clone, FromQueryResult)]
pub(crate) struct PostDetailRow {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub category_id: i32,
    pub category: String,
    pub description: String,
    pub content: String,
    pub date: DateTimeWithTimeZone,
    pub status_id: i32,
    pub status: String,
    pub likes_count: i64,
}

impl From<PostDetailRow> for PostDetail {
    fn from(row: PostDetailRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            image: row.image,
            category_id: row.category_id,
            category: row.category,
            description: row.description,
            content: row.content,
            date: row.date.into(),
            status_id: row.status_id,
            status: row.status,
            likes_count: row.likes_count,
        }
    }
}

/// Posts inner-joined with their category and status.
fn joined_posts() -> Select<post::Entity> {
    post::Entity::find()
        .join(JoinType::InnerJoin, post::Relation::Category.def())
        .join(JoinType::InnerJoin, post::Relation::Status.def())
}

/// Joined posts narrowed by the query's category and keyword filters.
pub(crate) fn filtered_posts(query: &PostQuery) -> Select<post::Entity> {
    let mut select = joined_posts();

    if let Some(name) = &query.category {
        select = select.filter(category::Column::Name.eq(name.as_str()));
    }

    if let Some(keyword) = &query.keyword {
        select = select.filter(
            Condition::any()
                .add(contains_ignore_case(post::Column::Title, keyword))
                .add(contains_ignore_case(post::Column::Description, keyword))
                .add(contains_ignore_case(post::Column::Content, keyword)),
        );
    }

    select
}

/// Project the detail columns and count likes per post.
fn with_details(select: Select<post::Entity>) -> Select<post::Entity> {
    select
        .select_only()
        .columns([
            post::Column::Id,
            post::Column::Title,
            post::Column::Image,
            post::Column::CategoryId,
            post::Column::Description,
            post::Column::Content,
            post::Column::Date,
            post::Column::StatusId,
        ])
        .column_as(category::Column::Name, "category")
        .column_as(status::Column::Status, "status")
        .column_as(
            Expr::col((like::Entity, like::Column::Id)).count(),
            "likes_count",
        )
        .join(JoinType::LeftJoin, post::Relation::Like.def())
        .group_by(post::Column::Id)
        .group_by(category::Column::Name)
        .group_by(status::Column::Status)
}

/// The requested page of matching posts, newest first.
pub(crate) fn page_window(query: &PostQuery) -> Select<post::Entity> {
    with_details(filtered_posts(query))
        .order_by_desc(post::Column::Date)
        .order_by_desc(post::Column::Id)
        .limit(query.page.limit)
        .offset(query.page.offset())
}

/// A single post with details.
pub(crate) fn post_detail(id: i32) -> Select<post::Entity> {
    with_details(joined_posts()).filter(post::Column::Id.eq(id))
}

/// `posts.<column> ILIKE '%keyword%'` with the keyword escaped.
///
/// Case folding happens on the server for both sides of the match.
fn contains_ignore_case(column: post::Column, keyword: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(keyword));

    Expr::col((post::Entity, column)).ilike(LikeExpr::new(pattern).escape('\\'))
}

/// Make `%`, `_` and `\` match literally inside a LIKE pattern.
pub(crate) fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
