// src/models/markup.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::html::SafeHtml;

/// DTO for sanitizing an inline-editor fragment.
#[derive(Debug, Deserialize, Validate)]
pub struct SanitizeRequest {
    /// Untrusted markup. Missing or `null` is treated as empty.
    #[validate(length(
        max = 100000,
        message = "Fragment must be at most 100000 characters"
    ))]
    pub html: Option<String>,
}

/// DTO for rendering a rich-text block field.
#[derive(Debug, Deserialize, Validate)]
pub struct RichTextRequest {
    #[validate(length(
        max = 100000,
        message = "Text must be at most 100000 characters"
    ))]
    pub text: Option<String>,
}

/// Sanitized markup, ready to be embedded as-is.
#[derive(Debug, Serialize)]
pub struct HtmlResponse {
    pub html: SafeHtml,
}
