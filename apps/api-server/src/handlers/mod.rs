//! HTTP handlers and route configuration.

mod author;
mod categories;
mod health;
mod posts;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, web};

use crate::middleware::error::AppError;
use crate::middleware::post_validation::PostValidation;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::index))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list_posts))
                .route("", web::post().to(posts::create_post).wrap(PostValidation))
                .route("/{id}", web::get().to(posts::get_post))
                .route("/{id}", web::put().to(posts::update_post).wrap(PostValidation))
                .route("/{id}", web::delete().to(posts::delete_post)),
        )
        .service(
            web::scope("/categories")
                .route("", web::get().to(categories::list_categories))
                .route("", web::post().to(categories::create_category))
                .route("/{id}", web::put().to(categories::rename_category))
                .route("/{id}", web::delete().to(categories::delete_category)),
        )
        .service(
            web::scope("/author")
                .route("", web::get().to(author::get_author))
                .route("", web::post().to(author::create_author))
                .route("", web::put().to(author::update_author)),
        );
}

/// JSON body errors answer with the application's 400 body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Query string errors answer with the application's 400 body.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("Not found...")
}
