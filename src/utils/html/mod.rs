// src/utils/html/mod.rs

//! Allow-list sanitizer for markup produced by the inline rich-text editor.
//!
//! The fragment is tokenized once and every token is either re-emitted in a
//! normalised form or dropped:
//!
//! * tags outside the allow-list are unwrapped (their content is kept);
//! * attributes survive only if permitted on the tag and accepted by its
//!   validator, and are always written back escaped;
//! * text is escaped; character references arrive already resolved and
//!   are escaped again only where the character is markup-significant.
//!
//! Running the sanitizer on its own output yields the same output.

pub mod allowlist;
pub mod escape;
pub mod style;
pub mod tokenizer;
pub mod validators;

use std::fmt;

use serde::Serialize;

use self::{
    allowlist::{AllowList, AttrRule},
    escape::push_escaped,
    style::clean_style,
    tokenizer::{StartTag, Token, tokenize},
    validators::{clean_dimension, clean_href, clean_src, clean_target},
};

/// Markup that is safe to embed in a page without further escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wraps markup assembled from escaped parts.
    pub(crate) fn from_trusted(html: String) -> Self {
        Self(html)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}

/// Sanitizes an optional fragment; `None` and `""` both give empty markup.
pub fn sanitize_opt(fragment: Option<&str>) -> SafeHtml {
    fragment.map(sanitize).unwrap_or_default()
}

/// Sanitizes an inline-editor fragment.
///
/// Never fails: malformed markup is recovered the way browsers tokenize it
/// and any resulting text is escaped.
pub fn sanitize(fragment: &str) -> SafeHtml {
    let allow = AllowList::inline();
    let mut out = String::with_capacity(fragment.len());

    tokenize(fragment, |token| match token {
        Token::StartTag(tag) => push_start_tag(&mut out, allow, &tag),
        Token::EndTag(name) => {
            if allow.allows_tag(&name) && name != "br" {
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            }
        }
        Token::Text(text) => push_escaped(&mut out, text),
    });

    SafeHtml(out)
}

fn push_start_tag(out: &mut String, allow: &AllowList, tag: &StartTag) {
    if !allow.allows_tag(&tag.name) {
        tracing::trace!(tag = %tag.name, "dropping tag");
        return;
    }

    if tag.name == "br" {
        out.push_str("<br>");
        return;
    }

    out.push('<');
    out.push_str(&tag.name);

    for attr in &tag.attrs {
        let Some(rule) = allow.rule(&tag.name, &attr.name) else {
            tracing::trace!(tag = %tag.name, attr = %attr.name, "dropping attribute");
            continue;
        };

        let value = Some(attr.value.as_str());
        let cleaned = match rule {
            AttrRule::Href => clean_href(value).map(str::to_string),
            AttrRule::Target => clean_target(value).map(str::to_string),
            AttrRule::Src => clean_src(value).map(str::to_string),
            AttrRule::Text => Some(attr.value.clone()),
            AttrRule::Dimension => clean_dimension(value).map(str::to_string),
            AttrRule::Style => clean_style(value, &tag.name),
        };

        match cleaned {
            Some(cleaned) => push_attr(out, &attr.name, &cleaned),
            None => {
                tracing::trace!(tag = %tag.name, attr = %attr.name, "rejecting attribute value");
            }
        }
    }

    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value);
    out.push('"');
}
