use axum::{routing::{get, post}, Router};
use crate::config::AppState;
use crate::handlers::post_handler::*;

pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/{id}", get(show_post_handler))
        .route("/posts/{id}/edit", get(edit_post_form_handler).post(update_post_handler))
        .route("/posts/{id}/delete", post(delete_post_handler))
}
