use axum::{
    extract::State,
    response::{Html, Response},
};
use tera::Context;
use tower_cookies::Cookies;
use crate::config::AppState;
use crate::models::{post_model::PostSummary, tag_model::TagForm};
use crate::services::{post_service::PostService, tag_service::TagService};
use crate::utils::app_error::AppError;
use crate::utils::entity_id::EntityId;
use crate::utils::html_response::HtmlResponse;
use crate::utils::validated_wrapper::{FormPayload, ValidatedForm};

pub async fn list_tags_handler(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let tags = TagService::list_tags(&state.db).await?;

    let mut ctx = Context::new();
    ctx.insert("tags", &tags);
    HtmlResponse::page(&state.templates, "tags/index.html", ctx, &cookies)
}

pub async fn new_tag_form_handler(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let posts: Vec<PostSummary> = PostService::list_posts(&state.db)
        .await?
        .into_iter()
        .map(PostSummary::from)
        .collect();

    let mut ctx = Context::new();
    ctx.insert("posts", &posts);
    HtmlResponse::page(&state.templates, "tags/new.html", ctx, &cookies)
}

pub async fn create_tag_handler(
    State(state): State<AppState>,
    cookies: Cookies,
    ValidatedForm(payload): ValidatedForm<TagForm>,
) -> Result<Response, AppError> {
    let tag = TagService::create_tag(&state.db, payload).await?;
    Ok(HtmlResponse::redirect_with_flash(
        &cookies,
        "/tags",
        format!("Tag '{}' added.", tag.name),
    ))
}

pub async fn show_tag_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let detail = TagService::get_tag_detail(&state.db, id).await?;

    let mut ctx = Context::new();
    ctx.insert("tag", &detail.tag);
    ctx.insert("posts", &detail.posts);
    HtmlResponse::page(&state.templates, "tags/show.html", ctx, &cookies)
}

pub async fn edit_tag_form_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let detail = TagService::get_tag_detail(&state.db, id).await?;
    let posts: Vec<PostSummary> = PostService::list_posts(&state.db)
        .await?
        .into_iter()
        .map(PostSummary::from)
        .collect();

    let mut ctx = Context::new();
    ctx.insert("tag", &detail.tag);
    ctx.insert("selected_post_ids", &detail.post_ids());
    ctx.insert("posts", &posts);
    HtmlResponse::page(&state.templates, "tags/edit.html", ctx, &cookies)
}

pub async fn update_tag_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
    form: FormPayload<TagForm>,
) -> Result<Response, AppError> {
    TagService::get_tag(&state.db, id).await?;
    let tag = TagService::update_tag(&state.db, id, form.validated()?).await?;
    Ok(HtmlResponse::redirect_with_flash(
        &cookies,
        "/tags",
        format!("Tag '{}' edited.", tag.name),
    ))
}

pub async fn delete_tag_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
) -> Result<Response, AppError> {
    let tag = TagService::delete_tag(&state.db, id).await?;
    Ok(HtmlResponse::redirect_with_flash(
        &cookies,
        "/tags",
        format!("Tag '{}' deleted.", tag.name),
    ))
}
