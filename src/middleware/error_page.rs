use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use tera::Context;
use crate::config::AppState;
use crate::utils::app_error::ErrorPage;
use crate::utils::html_response::HtmlResponse;

/// Turns `ErrorPage` responses into rendered HTML. 404s use their own template.
pub async fn render_error_pages(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    let Some(page) = response.extensions().get::<ErrorPage>().cloned() else {
        return response;
    };

    let template = if page.status == 404 { "404.html" } else { "error.html" };
    let mut ctx = Context::new();
    ctx.insert("error", &page);

    match HtmlResponse::render(&state.templates, template, &ctx) {
        Ok(Html(body)) => {
            let (mut parts, _) = response.into_parts();
            parts.headers.remove(axum::http::header::CONTENT_TYPE);
            parts.headers.remove(axum::http::header::CONTENT_LENGTH);
            (parts, Html(body)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to render {} for {}: {}", template, page.status, e);
            response
        }
    }
}
