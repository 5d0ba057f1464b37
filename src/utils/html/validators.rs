// src/utils/html/validators.rs

//! Value checks for links, image sources and CSS values.

use super::allowlist::LENGTH_UNITS;

const HREF_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "/", "#"];
const SRC_PREFIXES: &[&str] = &["http://", "https://", "/", "data:image/"];

const FONT_SIZE_KEYWORDS: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "smaller", "larger",
];
const TEXT_DECORATIONS: &[&str] = &["none", "underline", "line-through", "overline"];

/// Trimmed link target if it uses an accepted scheme.
pub fn clean_href(value: Option<&str>) -> Option<&str> {
    clean_prefixed(value, HREF_PREFIXES)
}

/// Trimmed image source if it uses an accepted scheme.
pub fn clean_src(value: Option<&str>) -> Option<&str> {
    clean_prefixed(value, SRC_PREFIXES)
}

pub fn clean_target(value: Option<&str>) -> Option<&str> {
    value.filter(|v| matches!(*v, "_blank" | "_self"))
}

/// Trimmed `width`/`height` attribute if it is a CSS length.
pub fn clean_dimension(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    is_valid_length(value).then_some(value)
}

fn clean_prefixed<'a>(value: Option<&'a str>, prefixes: &[&str]) -> Option<&'a str> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    prefixes
        .iter()
        .any(|prefix| starts_with_ignore_case(value, prefix))
        .then_some(value)
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// A number with an optional unit, or `auto`.
pub fn is_valid_length(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    if value.is_empty() {
        return false;
    }
    if value == "auto" {
        return true;
    }

    let number = LENGTH_UNITS
        .iter()
        .find_map(|unit| value.strip_suffix(*unit))
        .unwrap_or(value.as_str());
    is_number(number)
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite)
}

pub fn is_valid_font_size(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    FONT_SIZE_KEYWORDS.contains(&lower.as_str()) || is_valid_length(&lower)
}

/// `#RGB`, `#RRGGBB`, `rgb(...)` or `rgba(...)`.
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let lower = value.to_ascii_lowercase();
    (lower.starts_with("rgb(") || lower.starts_with("rgba(")) && lower.ends_with(')')
}

pub fn is_valid_text_decoration(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    TEXT_DECORATIONS.contains(&lower.as_str())
}

/// Comma-separated family names, optionally quoted, made of letters, digits,
/// spaces, hyphens and underscores.
pub fn is_valid_font_family(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    value.split(',').all(|segment| {
        segment
            .trim()
            .trim_matches('"')
            .trim_matches('\'')
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
    })
}
