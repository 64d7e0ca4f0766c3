//! Category handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::CategoryName;
use quill_shared::ApiResponse;
use quill_shared::dto::CategoryRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(categories)))
}

/// POST /categories
pub async fn create_category(
    state: web::Data<AppState>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let name = CategoryName::parse(&body.name)?;

    let category = state.categories.create(name).await?;
    tracing::info!(category_id = category.id, "Category created");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        category,
        "Category created successfully",
    )))
}

/// PUT /categories/{id}
pub async fn rename_category(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let name = CategoryName::parse(&body.name)?;

    let category = state
        .categories
        .rename(id, name)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
    tracing::info!(category_id = id, "Category renamed");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        category,
        "Category updated successfully",
    )))
}

/// DELETE /categories/{id}
pub async fn delete_category(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let deleted = state
        .categories
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
    tracing::info!(category_id = id, "Category deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        deleted,
        "Category deleted successfully",
    )))
}
