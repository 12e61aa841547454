#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use blogly::config::AppState;
use blogly::entities::{post, tag, user};
use blogly::models::{post_model::PostForm, tag_model::TagForm, user_model::UserForm};
use blogly::services::{post_service::PostService, tag_service::TagService, user_service::UserService};
use blogly::utils::templates::{default_templates_dir, load_templates};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh, migrated in-memory database. One pooled connection keeps every
/// query on the same SQLite memory instance.
pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn test_app(db: DatabaseConnection) -> Router {
    let templates = load_templates(&default_templates_dir()).unwrap();
    blogly::app(AppState::new(db, templates))
}

pub fn user_form(first: &str, last: &str, image_url: Option<&str>) -> UserForm {
    UserForm {
        first_name: first.to_string(),
        last_name: last.to_string(),
        image_url: image_url.map(str::to_string),
    }
}

pub fn post_form(title: &str, tag_ids: &[i32]) -> PostForm {
    PostForm {
        title: title.to_string(),
        content: format!("Content of {}", title),
        tag_ids: tag_ids.to_vec(),
    }
}

pub fn tag_form(name: &str, post_ids: &[i32]) -> TagForm {
    TagForm {
        name: name.to_string(),
        post_ids: post_ids.to_vec(),
    }
}

pub async fn create_user(db: &DatabaseConnection, first: &str, last: &str) -> user::Model {
    UserService::create_user(db, user_form(first, last, None)).await.unwrap()
}

pub async fn create_tag(db: &DatabaseConnection, name: &str) -> tag::Model {
    TagService::create_tag(db, tag_form(name, &[])).await.unwrap()
}

pub async fn create_post(db: &DatabaseConnection, user_id: i32, title: &str, tag_ids: &[i32]) -> post::Model {
    PostService::create_post(db, user_id, post_form(title, tag_ids)).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
