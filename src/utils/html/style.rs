// src/utils/html/style.rs

use super::validators::{
    is_valid_color, is_valid_font_family, is_valid_font_size, is_valid_length,
    is_valid_text_decoration,
};

/// Filters a `style` attribute down to the declarations the editor may
/// produce. Each declaration is judged on its own; rejected ones are dropped
/// and the rest are re-joined as `prop: value; prop: value`.
///
/// Returns `None` when nothing survives.
pub fn clean_style(value: Option<&str>, tag: &str) -> Option<String> {
    let value = value?;
    let mut kept: Vec<String> = Vec::new();

    for chunk in value.split(';') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }

        let Some((prop, val)) = chunk.split_once(':') else {
            continue;
        };
        let prop = prop.trim().to_ascii_lowercase();
        let val = val.trim();
        if prop.is_empty() || val.is_empty() {
            continue;
        }

        if is_allowed_declaration(&prop, val, tag) {
            kept.push(format!("{prop}: {val}"));
        } else {
            tracing::trace!(property = %prop, "dropping style declaration");
        }
    }

    if kept.is_empty() {
        None
    } else {
        Some(kept.join("; "))
    }
}

fn is_allowed_declaration(prop: &str, val: &str, tag: &str) -> bool {
    match prop {
        "font-size" => is_valid_font_size(val),
        "color" | "background-color" => is_valid_color(val),
        "text-decoration" => is_valid_text_decoration(val),
        "font-family" => is_valid_font_family(val),
        "width" | "height" | "max-width" | "max-height" if tag == "img" => is_valid_length(val),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_siblings_of_rejected_declarations() {
        assert_eq!(
            clean_style(Some("color: #ff0000; position: fixed"), "span").as_deref(),
            Some("color: #ff0000")
        );
        assert_eq!(
            clean_style(Some("FONT-SIZE:14px;color:red-ish;"), "p").as_deref(),
            Some("font-size: 14px")
        );
    }

    #[test]
    fn image_dimensions_only_on_images() {
        let style = Some("width: 50%; max-height: 300px");
        assert_eq!(
            clean_style(style, "img").as_deref(),
            Some("width: 50%; max-height: 300px")
        );
        assert_eq!(clean_style(style, "span"), None);
    }

    #[test]
    fn empty_and_malformed_declarations() {
        assert_eq!(clean_style(None, "span"), None);
        assert_eq!(clean_style(Some(" ; color ; :red; color:"), "span"), None);
        assert_eq!(
            clean_style(Some("background-color: rgb(0, 0, 0); text-decoration: underline"), "h2")
                .as_deref(),
            Some("background-color: rgb(0, 0, 0); text-decoration: underline")
        );
    }
}
