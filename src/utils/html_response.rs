use axum::response::{Html, IntoResponse, Redirect, Response};
use tera::{Context, Tera};
use tower_cookies::Cookies;
use crate::utils::app_error::AppError;
use crate::utils::flash::{set_flash_cookie, take_flash_cookie, FlashData};

pub struct HtmlResponse;

impl HtmlResponse {
    /// Renders a page, showing any pending flash message.
    pub fn page(
        templates: &Tera,
        template: &str,
        mut ctx: Context,
        cookies: &Cookies,
    ) -> Result<Html<String>, AppError> {
        if let Some(flash) = take_flash_cookie::<FlashData>(cookies) {
            ctx.insert("flash", &flash);
        }
        Self::render(templates, template, &ctx)
    }

    pub fn render(templates: &Tera, template: &str, ctx: &Context) -> Result<Html<String>, AppError> {
        let body = templates.render(template, ctx)?;
        Ok(Html(body))
    }

    /// 303 to `location` with a one-shot confirmation message.
    pub fn redirect_with_flash(cookies: &Cookies, location: &str, message: impl Into<String>) -> Response {
        set_flash_cookie(cookies, &FlashData::success(message));
        Redirect::to(location).into_response()
    }
}
