use super::Token;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";
const CLOSE_TAG_START: &str = "</";

/// Elements whose content is captured verbatim as raw code.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// Tokenizes markup into a flat [`Token`] stream.
///
/// The scan is a single left-to-right pass. At every position the first
/// matching rule fires; rules consult only the previously emitted token and
/// a fixed lookahead of at most four bytes. The lexer never rejects input:
/// a character matched by no rule is dropped, and structurally bogus markup
/// comes out as a differently shaped token stream rather than an error.
/// Callers that need strict validation have to layer it on top.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new().run(input)
}

struct Lexer {
    tokens: Vec<Token>,
}

impl Lexer {
    fn new() -> Self {
        Lexer {
            tokens: vec![Token::StartOfStream],
        }
    }

    fn run(mut self, input: &str) -> Vec<Token> {
        let mut pos = 0;

        while pos < input.len() {
            let rest = &input[pos..];

            let Some(ch) = rest.chars().next() else {
                break;
            };

            let prev_byte = if pos > 0 { input.as_bytes()[pos - 1] } else { 0 };

            pos += self.step(rest, ch, prev_byte);
        }

        self.tokens.push(Token::EndOfStream);
        self.tokens
    }

    /// Dispatches one scan position and returns the number of bytes consumed.
    fn step(&mut self, rest: &str, ch: char, prev_byte: u8) -> usize {
        if matches!(self.last(), Token::CommentStart) {
            self.emit(Token::CommentBody(ch.to_string()));
        } else if matches!(self.last(), Token::CommentBody(_)) && rest.starts_with(COMMENT_END) {
            self.emit(Token::CommentEnd);
            return COMMENT_END.len();
        } else if matches!(self.last(), Token::CommentBody(_)) {
            self.append(ch);
        } else if rest.starts_with(COMMENT_START) {
            self.emit(Token::CommentStart);
            return COMMENT_START.len();
        } else if rest.starts_with(CLOSE_TAG_START) {
            // NOTE: checked before the raw code rule, so `</` is the only
            // sequence that terminates a raw code run.
            self.emit(Token::TagCloseStart);
            return CLOSE_TAG_START.len();
        } else if matches!(self.last(), Token::RawCode(_)) {
            self.append(ch);
        } else if ch == '<' {
            self.emit(Token::TagOpenStart);
        } else if ch == '>' {
            self.emit(Token::TagEnd);
        } else if matches!(self.last(), Token::TagName(_))
            && (ch.is_ascii_alphanumeric() || ch == '!')
        {
            self.append(ch);
        } else if matches!(self.last(), Token::TagOpenStart | Token::TagCloseStart)
            && (ch.is_ascii_alphabetic() || ch == '!')
        {
            self.emit(Token::TagName(ch.to_string()));
        } else if matches!(self.last(), Token::AttrName(_))
            && (ch.is_ascii_alphabetic() || ch == '-' || ch == '_')
        {
            self.append(ch);
        } else if matches!(self.last(), Token::TagName(_) | Token::AttrName(_)) && ch == ' ' {
            self.emit(Token::AttrName(String::new()));
        } else if matches!(self.last(), Token::AttrValue(_)) && prev_byte == b'"' && ch == ' ' {
            // An attribute value only counts as closed once its quote is
            // followed by a space. A quote with anything else behind it
            // stays part of the value (the quote itself is never stored).
            self.emit(Token::AttrName(String::new()));
        } else if matches!(self.last(), Token::AttrName(_)) && ch == '=' {
            self.emit(Token::AttrEquals);
        } else if matches!(self.last(), Token::AttrValue(_))
            && (ch.is_ascii_alphanumeric() || ch.is_ascii_punctuation() || ch == ' ')
        {
            if ch != '"' {
                self.append(ch);
            }
        } else if matches!(self.last(), Token::AttrEquals) && ch == '"' {
            self.emit(Token::AttrValue(String::new()));
        } else if self.at_raw_text_start() {
            self.emit(Token::RawCode(ch.to_string()));
        } else if ch == '\n' {
            self.emit(Token::Newline);
        } else if matches!(self.last(), Token::Text(_)) {
            self.append(ch);
        } else if matches!(
            self.last(),
            Token::StartOfStream | Token::TagEnd | Token::Newline | Token::Indent(_)
        ) && ch != ' '
        {
            self.emit(Token::Text(ch.to_string()));
        } else if matches!(self.last(), Token::Indent(_)) && ch == ' ' {
            if let Some(Token::Indent(width)) = self.tokens.last_mut() {
                *width += 1;
            }
        } else if ch == ' ' {
            self.emit(Token::Indent(1));
        }

        ch.len_utf8()
    }

    /// A raw text run opens right after the `>` of a bare `<script>` or
    /// `<style>` start tag, i.e. when the two tokens preceding the last one
    /// are the tag open and one of the raw text element names. A start tag
    /// carrying attributes does not match this shape and its content is
    /// lexed as ordinary markup.
    fn at_raw_text_start(&self) -> bool {
        let len = self.tokens.len();

        if len < 3 {
            return false;
        }

        matches!(self.tokens[len - 3], Token::TagOpenStart)
            && matches!(
                &self.tokens[len - 2],
                Token::TagName(name) if RAW_TEXT_ELEMENTS.contains(&name.as_str())
            )
    }

    #[inline]
    fn emit(&mut self, token: Token) {
        trace!(@emit token);

        self.tokens.push(token);
    }

    #[inline]
    fn append(&mut self, ch: char) {
        if let Some(
            Token::CommentBody(text)
            | Token::TagName(text)
            | Token::AttrName(text)
            | Token::AttrValue(text)
            | Token::Text(text)
            | Token::RawCode(text),
        ) = self.tokens.last_mut()
        {
            text.push(ch);
        }
    }

    #[inline]
    fn last(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Token::*;

    fn name(s: &str) -> Token {
        TagName(s.to_string())
    }

    fn attr(s: &str) -> Token {
        AttrName(s.to_string())
    }

    fn value(s: &str) -> Token {
        AttrValue(s.to_string())
    }

    fn text(s: &str) -> Token {
        Text(s.to_string())
    }

    #[test]
    fn plain_element() {
        assert_eq!(
            tokenize("<div>Hi</div>"),
            vec![
                StartOfStream,
                TagOpenStart,
                name("div"),
                TagEnd,
                text("Hi"),
                TagCloseStart,
                name("div"),
                TagEnd,
                EndOfStream,
            ]
        );
    }

    #[test]
    fn text_at_stream_start() {
        assert_eq!(
            tokenize("hello <b>"),
            vec![
                StartOfStream,
                text("hello "),
                TagOpenStart,
                name("b"),
                TagEnd,
                EndOfStream,
            ]
        );
    }

    #[test]
    fn valued_and_boolean_attributes() {
        assert_eq!(
            tokenize("<input type=\"text\" disabled>"),
            vec![
                StartOfStream,
                TagOpenStart,
                name("input"),
                attr("type"),
                AttrEquals,
                value("text"),
                attr("disabled"),
                TagEnd,
                EndOfStream,
            ]
        );
    }

    #[test]
    fn comment() {
        assert_eq!(
            tokenize("<!--hey-->"),
            vec![
                StartOfStream,
                CommentStart,
                CommentBody("hey".to_string()),
                CommentEnd,
                EndOfStream,
            ]
        );
    }

    #[test]
    fn newlines_and_indent_runs() {
        assert_eq!(
            tokenize("<p>\n    text"),
            vec![
                StartOfStream,
                TagOpenStart,
                name("p"),
                TagEnd,
                Newline,
                Indent(4),
                text("text"),
                EndOfStream,
            ]
        );
    }

    #[test]
    fn doctype_pseudo_tag() {
        assert_eq!(
            tokenize("<!DOCTYPE html>"),
            vec![
                StartOfStream,
                TagOpenStart,
                name("!DOCTYPE"),
                attr("html"),
                TagEnd,
                EndOfStream,
            ]
        );
    }

    mod raw_code {
        use super::*;

        #[test]
        fn script_content_is_captured_verbatim() {
            assert_eq!(
                tokenize("<script>let x = 1;</script>"),
                vec![
                    StartOfStream,
                    TagOpenStart,
                    name("script"),
                    TagEnd,
                    RawCode("let x = 1;".to_string()),
                    TagCloseStart,
                    name("script"),
                    TagEnd,
                    EndOfStream,
                ]
            );
        }

        #[test]
        fn lone_lt_stays_in_code() {
            assert_eq!(
                tokenize("<style>a < b</style>"),
                vec![
                    StartOfStream,
                    TagOpenStart,
                    name("style"),
                    TagEnd,
                    RawCode("a < b".to_string()),
                    TagCloseStart,
                    name("style"),
                    TagEnd,
                    EndOfStream,
                ]
            );
        }

        #[test]
        fn close_sequence_ends_code_regardless_of_content() {
            // The capture has no string awareness, so a `</` inside a
            // literal terminates it.
            let tokens = tokenize("<script>s = \"</\";</script>");

            assert_eq!(tokens[4], RawCode("s = \"".to_string()));
            assert_eq!(tokens[5], TagCloseStart);
        }
    }

    mod attr_value_quirks {
        use super::*;

        #[test]
        fn unescaped_quote_not_followed_by_space_stays_in_value() {
            let tokens = tokenize("<a href=\"a\"b\">");

            assert!(tokens.contains(&value("ab")));
        }

        #[test]
        fn quote_then_space_closes_the_value() {
            assert_eq!(
                tokenize("<a href=\"x\" id=\"y\">"),
                vec![
                    StartOfStream,
                    TagOpenStart,
                    name("a"),
                    attr("href"),
                    AttrEquals,
                    value("x"),
                    attr("id"),
                    AttrEquals,
                    value("y"),
                    TagEnd,
                    EndOfStream,
                ]
            );
        }

        #[test]
        fn gt_terminates_the_tag_even_inside_a_value() {
            let tokens = tokenize("<img alt=\"a > b\">");

            assert_eq!(tokens[5], value("a "));
            assert_eq!(tokens[6], TagEnd);
        }

        #[test]
        fn non_ascii_chars_are_dropped_from_values() {
            let tokens = tokenize("<a title=\"caf\u{e9}!\">");

            assert!(tokens.contains(&value("caf!")));
        }
    }

    #[test]
    fn unmatched_input_is_dropped_not_rejected() {
        // Text right after a comment never opens a content token; it only
        // resumes after a newline, space or tag boundary.
        assert_eq!(
            tokenize("<!--c-->dropped\nkept"),
            vec![
                StartOfStream,
                CommentStart,
                CommentBody("c".to_string()),
                CommentEnd,
                Newline,
                text("kept"),
                EndOfStream,
            ]
        );
    }

    #[test]
    fn stream_is_always_delimited() {
        assert_eq!(tokenize(""), vec![StartOfStream, EndOfStream]);
    }
}
