use axum::{routing::{get, post}, Router};
use crate::config::AppState;
use crate::handlers::tag_handler::*;

pub fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/tags", get(list_tags_handler))
        .route("/tags/new", get(new_tag_form_handler).post(create_tag_handler))
        .route("/tags/{id}", get(show_tag_handler))
        .route("/tags/{id}/edit", get(edit_tag_form_handler).post(update_tag_handler))
        .route("/tags/{id}/delete", post(delete_tag_handler))
}
