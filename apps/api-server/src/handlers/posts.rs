//! Post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{NewPost, PageRequest, PostQuery};
use quill_shared::dto::PostListParams;
use quill_shared::{ApiResponse, MessageResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts?page=&limit=&category=&keyword=
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<PostListParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let query = PostQuery::new(
        PageRequest::new(params.page, params.limit),
        params.category,
        params.keyword,
    );

    let page = state.posts.list(&query).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<NewPost>,
) -> AppResult<HttpResponse> {
    let post = body.into_inner();
    post.validate()?;

    let created = state.posts.create(post).await?;
    tracing::info!(post_id = created.id, "Post created");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        created,
        "Created post successfully",
    )))
}

/// PUT /posts/{id} - replaces every field; partial bodies never reach here.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<NewPost>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = body.into_inner();
    post.validate()?;

    let updated = state
        .posts
        .update(id, post)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
    tracing::info!(post_id = id, "Post updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        updated,
        "Updated post successfully",
    )))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if !state.posts.delete(id).await? {
        return Err(AppError::NotFound("Post not found".to_string()));
    }
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted post successfully")))
}
