// src/utils/inline.rs

//! Helpers used when rendering page-builder blocks in edit mode.

use crate::utils::html::{SafeHtml, escape::escape, sanitize_opt};

/// Renders a rich-text block field: line breaks become `<br>` and the
/// result is sanitized.
pub fn richtext(value: Option<&str>) -> SafeHtml {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return SafeHtml::default();
    };

    let normalized = value.replace("\r\n", "\n").replace('\n', "<br>");
    sanitize_opt(Some(&normalized))
}

/// Attributes that mark an element as an editable text field of a block.
///
/// Empty when the block has no id yet (unsaved blocks are not editable).
pub fn inline_attrs(block_id: &str, field: &str) -> SafeHtml {
    if block_id.is_empty() {
        return SafeHtml::default();
    }

    let block_id = escape(block_id);
    let field = escape(field);
    SafeHtml::from_trusted(format!(
        r#"data-inline-block="{block_id}" data-inline-field="{field}" role="textbox" aria-label="{field}""#
    ))
}

/// Attributes that let the builder attach resize handles to an image field.
pub fn inline_image_attrs(block_id: &str, field: &str) -> SafeHtml {
    if block_id.is_empty() {
        return SafeHtml::default();
    }

    let block_id = escape(block_id);
    let field = escape(field);
    SafeHtml::from_trusted(format!(
        r#"data-inline-block="{block_id}" data-inline-image="{field}" aria-label="{field}""#
    ))
}
