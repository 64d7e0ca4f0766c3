//! Author profile handlers. All of them act on the single author record.

use actix_web::{HttpResponse, web};

use quill_core::DomainError;
use quill_core::domain::{AuthorPatch, NewAuthor};
use quill_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /author
pub async fn get_author(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let author = state
        .author
        .get()
        .await?
        .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(author)))
}

/// POST /author
pub async fn create_author(
    state: web::Data<AppState>,
    body: web::Json<NewAuthor>,
) -> AppResult<HttpResponse> {
    let author = body.into_inner().normalize()?;

    if state.author.username_exists(&author.username).await? {
        return Err(DomainError::Duplicate("Username already exists".to_string()).into());
    }

    let created = state.author.create(author).await?;
    tracing::info!(author_id = created.id, "Author created");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        created,
        "Author created successfully",
    )))
}

/// PUT /author - patches only the fields present in the body.
pub async fn update_author(
    state: web::Data<AppState>,
    body: web::Json<AuthorPatch>,
) -> AppResult<HttpResponse> {
    let patch = body.into_inner();
    patch.ensure_not_empty()?;

    let author = state
        .author
        .update(patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;
    tracing::info!(author_id = author.id, "Author updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        author,
        "Author updated successfully",
    )))
}
