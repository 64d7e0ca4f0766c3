//! Route-level tests against a mocked database.

use std::collections::BTreeMap;

use actix_web::{App, http::StatusCode, test, web};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult, Value};
use serde_json::{Value as Json, json};

use quill_infra::DbPool;
use quill_infra::database::entity::{author, category, post};

use super::{configure_routes, json_config, not_found, query_config};
use crate::state::AppState;

macro_rules! init_app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(DbPool::from_conn($db))))
                .app_data(json_config())
                .app_data(query_config())
                .configure(configure_routes)
                .default_service(web::to(not_found)),
        )
        .await
    };
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn posted_at() -> DateTimeWithTimeZone {
    "2024-09-12T08:30:00+07:00".parse().unwrap()
}

fn post_model(id: i32, title: &str) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        image: "https://img.example/cat.png".to_owned(),
        category_id: 1,
        description: "About cats".to_owned(),
        content: "Cats sleep a lot.".to_owned(),
        date: posted_at(),
        status_id: 2,
    }
}

fn detail_row(id: i32) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("title", Value::from(format!("Post {}", id))),
        ("image", Value::from("https://img.example/cat.png")),
        ("category_id", Value::from(1)),
        ("category", Value::from("Cat")),
        ("description", Value::from("About cats")),
        ("content", Value::from("Cats sleep a lot.")),
        ("date", Value::from(posted_at())),
        ("status_id", Value::from(2)),
        ("status", Value::from("publish")),
        ("likes_count", Value::BigInt(Some(1))),
    ])
}

fn author_model() -> author::Model {
    author::Model {
        id: 1,
        username: "writer".to_owned(),
        email: "writer@example.com".to_owned(),
        name: Some("Writer".to_owned()),
        bio: None,
        img_url: None,
        password: String::new(),
    }
}

fn post_body() -> Json {
    json!({
        "title": "Cats",
        "image": "https://img.example/cat.png",
        "category_id": 1,
        "description": "About cats",
        "content": "Cats sleep a lot.",
        "status_id": 2
    })
}

#[actix_web::test]
async fn root_reports_liveness() {
    let app = init_app!(empty_db());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(body, "API is running");
}

#[actix_web::test]
async fn unmatched_route_is_plain_not_found() {
    let app = init_app!(empty_db());

    let req = test::TestRequest::get().uri("/profiles").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Not found...");
}

#[actix_web::test]
async fn list_posts_returns_pagination_envelope() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![detail_row(3), detail_row(2)]])
        .append_query_results([vec![BTreeMap::from([(
            "num_items",
            Value::BigInt(Some(5)),
        )])]])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::get()
        .uri("/posts?page=2&limit=2")
        .to_request();
    let body: Json = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalPosts"], 5);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["currentPage"], 2);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["nextPage"], 3);
    assert_eq!(body["posts"].as_array().unwrap().len(), 2);
    assert_eq!(body["posts"][0]["likes_count"], 1);
}

#[actix_web::test]
async fn get_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::get().uri("/posts/9").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_post_echoes_submitted_fields() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model(12, "Cats")]])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(post_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Json = test::read_body_json(resp).await;
    let submitted = post_body();
    for field in ["title", "image", "category_id", "description", "content", "status_id"] {
        assert_eq!(body["data"][field], submitted[field], "field {}", field);
    }
    assert_eq!(body["data"]["id"], 12);
}

#[actix_web::test]
async fn create_post_with_missing_fields_never_touches_database() {
    // Any query against this mock would fail and surface as a 500.
    let app = init_app!(empty_db());

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({ "title": "Only a title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Json = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("content is required"));
}

#[actix_web::test]
async fn create_post_rejects_string_ids() {
    let app = init_app!(empty_db());

    let mut payload = post_body();
    payload["status_id"] = json!("2");

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::put()
        .uri("/posts/5")
        .set_json(post_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_then_fetch_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model(4, "Cats")]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::delete().uri("/posts/4").to_request();
    let body: Json = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Deleted post successfully");
    assert!(body.get("data").is_none());

    let req = test::TestRequest::get().uri("/posts/4").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_category() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![category::Model {
            id: 1,
            name: "Travel".to_owned(),
        }]])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Travel" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Json = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Travel");
}

#[actix_web::test]
async fn blank_category_name_is_rejected() {
    let app = init_app!(empty_db());

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn rename_missing_category_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<category::Model>::new()])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::put()
        .uri("/categories/8")
        .set_json(json!({ "name": "Food" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn database_failure_is_generic_server_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset".to_owned())])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::get().uri("/categories").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Json = test::read_body_json(resp).await;
    let message = body["message"].as_str().unwrap();
    assert!(!message.contains("connection reset"));
}

#[actix_web::test]
async fn get_author_hides_password() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![author_model()]])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::get().uri("/author").to_request();
    let body: Json = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["username"], "writer");
    assert!(body["data"].get("password").is_none());
}

#[actix_web::test]
async fn duplicate_username_is_conflict() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![author_model()]])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/author")
        .set_json(json!({ "username": "writer", "email": "other@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Json = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Username already exists");
}

#[actix_web::test]
async fn author_requires_username_and_email() {
    let app = init_app!(empty_db());

    let req = test::TestRequest::post()
        .uri("/author")
        .set_json(json!({ "username": "writer" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn empty_author_patch_is_bad_request() {
    let app = init_app!(empty_db());

    let req = test::TestRequest::put()
        .uri("/author")
        .set_json(json!({ "password": "ignored" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Json = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No fields to update");
}

#[actix_web::test]
async fn patch_author() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![author::Model {
            bio: Some("Writes about cats".to_owned()),
            ..author_model()
        }]])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::put()
        .uri("/author")
        .set_json(json!({ "bio": "Writes about cats" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Json = test::read_body_json(resp).await;
    assert_eq!(body["data"]["bio"], "Writes about cats");
    assert_eq!(body["message"], "Author updated successfully");
}

#[actix_web::test]
async fn post_body_on_unknown_post_route_is_plain_not_found() {
    let app = init_app!(empty_db());

    let req = test::TestRequest::post()
        .uri("/posts/5")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Not found...");
}

#[actix_web::test]
async fn replace_post_requires_every_field() {
    let app = init_app!(empty_db());

    let req = test::TestRequest::put()
        .uri("/posts/5")
        .set_json(json!({ "title": "Only the title changes" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Json = test::read_body_json(resp).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("image is required"));
    assert!(message.contains("category_id is required"));
}

#[actix_web::test]
async fn created_category_shows_up_in_listing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![category::Model {
            id: 1,
            name: "Travel".to_owned(),
        }]])
        .append_query_results([vec![
            category::Model {
                id: 1,
                name: "Travel".to_owned(),
            },
            category::Model {
                id: 2,
                name: "Food".to_owned(),
            },
        ]])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Travel" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/categories").to_request();
    let body: Json = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Travel", "Food"]);
}

#[actix_web::test]
async fn create_author() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<author::Model>::new()])
        .append_query_results([vec![author::Model {
            name: None,
            ..author_model()
        }]])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/author")
        .set_json(json!({
            "username": "writer",
            "email": "writer@example.com",
            "name": "",
            "password": "ignored"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Json = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Author created successfully");
    assert_eq!(body["data"]["username"], "writer");
    assert!(body["data"]["name"].is_null());
    assert!(body["data"].get("password").is_none());
}

#[actix_web::test]
async fn author_patch_null_clears_field() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![author::Model {
            name: None,
            ..author_model()
        }]])
        .into_connection();
    let app = init_app!(db);

    let req = test::TestRequest::put()
        .uri("/author")
        .set_json(json!({ "name": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Json = test::read_body_json(resp).await;
    assert!(body["data"]["name"].is_null());
}
