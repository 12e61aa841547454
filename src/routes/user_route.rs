use axum::{routing::{get, post}, Router};
use crate::config::AppState;
use crate::handlers::post_handler::{create_post_handler, new_post_form_handler};
use crate::handlers::user_handler::*;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler))
        .route("/users/new", get(new_user_form_handler).post(create_user_handler))
        .route("/users/{id}", get(show_user_handler))
        .route("/users/{id}/edit", get(edit_user_form_handler).post(update_user_handler))
        .route("/users/{id}/delete", post(delete_user_handler))
        .route("/users/{id}/posts/new", get(new_post_form_handler).post(create_post_handler))
}
