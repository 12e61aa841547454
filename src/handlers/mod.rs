pub mod post_handler;
pub mod tag_handler;
pub mod user_handler;

use axum::{extract::State, response::Html};
use tera::Context;
use tower_cookies::Cookies;
use crate::config::AppState;
use crate::services::post_service::{PostService, HOMEPAGE_POST_LIMIT};
use crate::utils::app_error::AppError;
use crate::utils::html_response::HtmlResponse;

pub async fn homepage_handler(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let posts = PostService::recent_posts(&state.db, HOMEPAGE_POST_LIMIT).await?;

    let mut ctx = Context::new();
    ctx.insert("posts", &posts);
    HtmlResponse::page(&state.templates, "homepage.html", ctx, &cookies)
}

pub async fn not_found_handler() -> AppError {
    AppError::PageNotFound
}

pub async fn health_check_handler() -> &'static str {
    "OK"
}
