use axum::{
    extract::State,
    response::{Html, Response},
};
use tera::Context;
use tower_cookies::Cookies;
use crate::config::AppState;
use crate::models::user_model::UserForm;
use crate::services::user_service::UserService;
use crate::utils::app_error::AppError;
use crate::utils::entity_id::EntityId;
use crate::utils::html_response::HtmlResponse;
use crate::utils::validated_wrapper::{FormPayload, ValidatedForm};

pub async fn list_users_handler(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let users = UserService::list_users(&state.db).await?;

    let mut ctx = Context::new();
    ctx.insert("users", &users);
    HtmlResponse::page(&state.templates, "users/index.html", ctx, &cookies)
}

pub async fn new_user_form_handler(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    HtmlResponse::page(&state.templates, "users/new.html", Context::new(), &cookies)
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    cookies: Cookies,
    ValidatedForm(payload): ValidatedForm<UserForm>,
) -> Result<Response, AppError> {
    let user = UserService::create_user(&state.db, payload).await?;
    Ok(HtmlResponse::redirect_with_flash(
        &cookies,
        "/users",
        format!("User {} added.", user.full_name()),
    ))
}

pub async fn show_user_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let detail = UserService::get_user_detail(&state.db, id).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &detail.user);
    ctx.insert("full_name", &detail.full_name);
    ctx.insert("posts", &detail.posts);
    HtmlResponse::page(&state.templates, "users/details.html", ctx, &cookies)
}

pub async fn edit_user_form_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let user = UserService::get_user(&state.db, id).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &user);
    HtmlResponse::page(&state.templates, "users/edit.html", ctx, &cookies)
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
    form: FormPayload<UserForm>,
) -> Result<Response, AppError> {
    UserService::get_user(&state.db, id).await?;
    let user = UserService::update_user(&state.db, id, form.validated()?).await?;
    Ok(HtmlResponse::redirect_with_flash(
        &cookies,
        "/users",
        format!("User {} edited.", user.full_name()),
    ))
}

pub async fn delete_user_handler(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    cookies: Cookies,
) -> Result<Response, AppError> {
    let user = UserService::delete_user(&state.db, id).await?;
    Ok(HtmlResponse::redirect_with_flash(
        &cookies,
        "/users",
        format!("User {} deleted.", user.full_name()),
    ))
}
