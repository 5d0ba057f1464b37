// src/utils/html/allowlist.rs

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// CSS length units accepted after a number, longest suffix first so that
/// `rem` is tried before `em`.
pub const LENGTH_UNITS: &[&str] = &["vmin", "vmax", "rem", "px", "em", "pt", "vw", "vh", "%"];

const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

static INLINE: LazyLock<AllowList> = LazyLock::new(AllowList::build_inline);

/// Validator applied to an attribute value before it is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrRule {
    /// Link target: http(s), mailto, root-relative or fragment.
    Href,
    /// `_blank` or `_self`.
    Target,
    /// Image source: http(s), root-relative or inline image data.
    Src,
    /// Free text, escaped on output.
    Text,
    /// CSS length.
    Dimension,
    /// Filtered `style` declarations.
    Style,
}

/// Tags, attributes and style hosts accepted in inline-edited markup.
///
/// Built once per process and never mutated afterwards.
#[derive(Debug)]
pub struct AllowList {
    tags: HashSet<&'static str>,
    attributes: HashMap<&'static str, HashMap<&'static str, AttrRule>>,
    style_tags: HashSet<&'static str>,
}

impl AllowList {
    /// The table used for page-builder rich text.
    pub fn inline() -> &'static AllowList {
        &INLINE
    }

    fn build_inline() -> Self {
        let mut tags: HashSet<&'static str> = [
            "b", "strong", "i", "em", "u", "s", "del", "br", "a", "ul", "ol", "li", "span", "p",
            "img",
        ]
        .into_iter()
        .collect();
        tags.extend(HEADINGS);

        let mut attributes = HashMap::new();
        attributes.insert(
            "a",
            HashMap::from([("href", AttrRule::Href), ("target", AttrRule::Target)]),
        );
        for tag in ["span", "p"].into_iter().chain(HEADINGS) {
            attributes.insert(tag, HashMap::from([("style", AttrRule::Style)]));
        }
        attributes.insert(
            "img",
            HashMap::from([
                ("src", AttrRule::Src),
                ("alt", AttrRule::Text),
                ("title", AttrRule::Text),
                ("style", AttrRule::Style),
                ("width", AttrRule::Dimension),
                ("height", AttrRule::Dimension),
            ]),
        );

        let style_tags = ["span", "p", "img"].into_iter().chain(HEADINGS).collect();

        Self {
            tags,
            attributes,
            style_tags,
        }
    }

    pub fn allows_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Rule for `attr` on `tag`, or `None` when the attribute must be dropped.
    pub fn rule(&self, tag: &str, attr: &str) -> Option<AttrRule> {
        let rule = *self.attributes.get(tag)?.get(attr)?;
        if rule == AttrRule::Style && !self.allows_style(tag) {
            return None;
        }
        Some(rule)
    }

    pub fn allows_style(&self, tag: &str) -> bool {
        self.style_tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_table_covers_editor_markup() {
        let allow = AllowList::inline();
        for tag in ["b", "strong", "a", "img", "h3", "li", "br"] {
            assert!(allow.allows_tag(tag), "{tag} should be allowed");
        }
        for tag in ["script", "iframe", "style", "div", "table"] {
            assert!(!allow.allows_tag(tag), "{tag} should be rejected");
        }

        assert_eq!(allow.rule("a", "href"), Some(AttrRule::Href));
        assert_eq!(allow.rule("img", "height"), Some(AttrRule::Dimension));
        assert_eq!(allow.rule("h6", "style"), Some(AttrRule::Style));
        assert_eq!(allow.rule("a", "style"), None);
        assert_eq!(allow.rule("b", "style"), None);
        assert_eq!(allow.rule("img", "onerror"), None);
    }
}
