use axum::{middleware, routing::get, Router};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;
use crate::config::AppState;
use crate::handlers::{health_check_handler, homepage_handler, not_found_handler};
use crate::middleware::error_page::render_error_pages;

pub mod post_route;
pub mod tag_route;
pub mod user_route;

pub fn create_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(homepage_handler))
        .merge(user_route::user_routes())
        .merge(post_route::post_routes())
        .merge(tag_route::tag_routes())
        // Health check
        .route("/health", get(health_check_handler))
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(state, render_error_pages))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
}
