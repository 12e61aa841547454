use axum::{
    extract::State,
    response::{Html, Response},
};
use tera::Context;
use tower_cookies::Cookies;
use crate::config::AppState;
use crate::models::post_model::PostForm;
use crate::services::{post_service::PostService, tag_service::TagService, user_service::UserService};
use crate::utils::app_error::AppError;
use crate::utils::entity_id::EntityId;
use crate::utils::html_response::HtmlResponse;
use crate::utils::validated_wrapper::FormPayload;

pub async fn new_post_form_handler(
    State(state): State<AppState>,
    EntityId(user_id): EntityId,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let user = UserService::get_user(&state.db, user_id).await?;
    let tags = TagService::list_tags(&state.db).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &user);
    ctx.insert("full_name", &user.full_name());
    ctx.insert("tags", &tags);
    HtmlResponse::page(&state.templates, "posts/new.html", ctx, &cookies)
}

pub async fn create_post_handler(
    State(state): State<AppState>,
    EntityId(user_id): EntityId,
    cookies: Cookies,
    form: FormPayload<PostForm>,
) -> Result<Response, AppError> {
    UserService::get_user(&state.db, user_id).await?;
    let post = PostService::create_post(&state.db, user_id, form.validated()?).await?;
    Ok(HtmlResponse::redirect_with_flash(
        &cookies,
        &format!("/users/{}", post.user_id),
        format!("Post '{}' added.", post.title),
    ))
}

pub async fn show_post_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let detail = PostService::get_post_detail(&state.db, id).await?;

    let mut ctx = Context::new();
    ctx.insert("post", &detail);
    HtmlResponse::page(&state.templates, "posts/show.html", ctx, &cookies)
}

pub async fn edit_post_form_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let detail = PostService::get_post_detail(&state.db, id).await?;
    let tags = TagService::list_tags(&state.db).await?;

    let mut ctx = Context::new();
    ctx.insert("selected_tag_ids", &detail.tag_ids());
    ctx.insert("post", &detail);
    ctx.insert("tags", &tags);
    HtmlResponse::page(&state.templates, "posts/edit.html", ctx, &cookies)
}

pub async fn update_post_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
    form: FormPayload<PostForm>,
) -> Result<Response, AppError> {
    PostService::get_post(&state.db, id).await?;
    let post = PostService::update_post(&state.db, id, form.validated()?).await?;
    Ok(HtmlResponse::redirect_with_flash(
        &cookies,
        &format!("/users/{}", post.user_id),
        format!("Post '{}' edited.", post.title),
    ))
}

pub async fn delete_post_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
) -> Result<Response, AppError> {
    let post = PostService::delete_post(&state.db, id).await?;
    Ok(HtmlResponse::redirect_with_flash(
        &cookies,
        &format!("/users/{}", post.user_id),
        format!("Post '{}' deleted.", post.title),
    ))
}
