// src/utils/html/tokenizer.rs

//! Streams an HTML fragment through the html5ever tokenizer and reports the
//! events the sanitizer cares about, in document order.
//!
//! The tokenizer runs without a tree builder, so it stays in the data state
//! throughout: `<script>` and `<style>` bodies arrive as ordinary text.
//! Recovery follows the HTML tokenization rules:
//!
//! * a `<` that cannot open a tag is text;
//! * a tag still open at the end of input is discarded;
//! * comments, doctypes and `<?...>` (bogus comments) are not reported;
//! * character references are resolved, in text and in attribute values,
//!   and a malformed reference is kept as literal text.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token as RawToken, TokenSink, TokenSinkResult, Tokenizer,
    TokenizerOpts,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercased attribute name.
    pub name: String,
    /// Decoded value; empty for bare attributes.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Lowercased tag name.
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub self_closing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    StartTag(StartTag),
    EndTag(String),
    /// Decoded character data.
    Text(&'a str),
}

/// Feeds `fragment` to the tokenizer in one pass, calling `on_token` for
/// every start tag, end tag and text run.
pub fn tokenize<F>(fragment: &str, on_token: F)
where
    F: FnMut(Token<'_>),
{
    let mut input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(fragment));

    let mut tokenizer = Tokenizer::new(Relay { on_token }, TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
}

/// Adapts html5ever tokens to [`Token`].
struct Relay<F> {
    on_token: F,
}

impl<F> TokenSink for Relay<F>
where
    F: FnMut(Token<'_>),
{
    type Handle = ();

    fn process_token(&mut self, token: RawToken, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            RawToken::TagToken(tag) => match tag.kind {
                TagKind::StartTag => (self.on_token)(Token::StartTag(start_tag(tag))),
                TagKind::EndTag => (self.on_token)(Token::EndTag(tag.name.to_string())),
            },
            RawToken::CharacterTokens(text) => (self.on_token)(Token::Text(&*text)),
            RawToken::ParseError(reason) => {
                tracing::trace!(%reason, "recovered from malformed markup");
            }
            // Comments, doctypes, NUL and end of input produce no output.
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

fn start_tag(tag: Tag) -> StartTag {
    StartTag {
        name: tag.name.to_string(),
        attrs: tag
            .attrs
            .into_iter()
            .map(|attr| Attribute {
                name: attr.name.local.to_string(),
                value: String::from(&*attr.value),
            })
            .collect(),
        self_closing: tag.self_closing,
    }
}
