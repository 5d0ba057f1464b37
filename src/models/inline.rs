// src/models/inline.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::html::SafeHtml;

/// Which kind of editable field the attributes are for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineFieldKind {
    #[default]
    Text,
    Image,
}

/// DTO for requesting the edit-mode attributes of a block field.
#[derive(Debug, Deserialize, Validate)]
pub struct InlineAttrsRequest {
    /// Block id; empty for blocks that have not been saved yet.
    #[serde(default)]
    #[validate(length(max = 64, message = "Block id must be at most 64 characters"))]
    pub block_id: String,

    #[validate(length(
        min = 1,
        max = 64,
        message = "Field name must be between 1 and 64 characters"
    ))]
    pub field: String,

    #[serde(default)]
    pub kind: InlineFieldKind,
}

#[derive(Debug, Serialize)]
pub struct InlineAttrsResponse {
    pub attrs: SafeHtml,
}
