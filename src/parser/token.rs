/// A single unit of the flat markup token stream.
///
/// The lexer emits tokens in source order; accumulating variants carry the
/// text they absorbed during the scan. Every stream produced by
/// [`tokenize`](super::tokenize) opens with exactly one [`StartOfStream`]
/// and closes with exactly one [`EndOfStream`].
///
/// [`StartOfStream`]: Token::StartOfStream
/// [`EndOfStream`]: Token::EndOfStream
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    StartOfStream,
    EndOfStream,
    CommentStart,
    CommentEnd,
    CommentBody(String),
    TagOpenStart,
    TagCloseStart,
    TagEnd,
    TagName(String),
    AttrName(String),
    AttrEquals,
    AttrValue(String),
    Text(String),
    RawCode(String),
    Newline,
    /// A run of consecutive spaces at a position where no other token is
    /// open, stored as its length.
    Indent(usize),
}

impl Token {
    /// Token kinds the expansion engine scans for substitution markers.
    #[inline]
    #[must_use]
    pub const fn is_expandable(&self) -> bool {
        matches!(self, Token::Text(_) | Token::RawCode(_))
    }
}
