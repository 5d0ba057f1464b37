// src/handlers/markup.rs

use axum::{Json, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::markup::{HtmlResponse, RichTextRequest, SanitizeRequest},
    utils::{html::sanitize_opt, inline::richtext},
};

/// Sanitizes an inline-editor fragment.
///
/// Returns 200 with the cleaned markup. Disallowed content is dropped,
/// never rejected; only oversized input yields 400.
pub async fn sanitize_fragment(
    Json(payload): Json<SanitizeRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let html = sanitize_opt(payload.html.as_deref());
    tracing::debug!(
        input_len = payload.html.as_deref().map_or(0, str::len),
        output_len = html.as_str().len(),
        "Sanitized fragment"
    );

    Ok(Json(HtmlResponse { html }))
}

/// Renders a rich-text block field (newlines become `<br>`).
pub async fn render_richtext(
    Json(payload): Json<RichTextRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let html = richtext(payload.text.as_deref());

    Ok(Json(HtmlResponse { html }))
}
