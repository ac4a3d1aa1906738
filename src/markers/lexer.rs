use super::MarkerToken;
use memchr::memmem::Finder;

/// Splits text into literal content and delimited marker spans.
///
/// Scans left to right for the configured delimiter pair. Inside a marker
/// value only the `end` delimiter is recognized, so markers never nest: a
/// `start` sequence inside a value is ordinary value text. A value left
/// unterminated runs to the end of the input and is reported by the grammar
/// check, not here.
pub struct MarkerLexer<'d> {
    start_seq: &'d str,
    end_seq: &'d str,
}

impl<'d> MarkerLexer<'d> {
    /// Both delimiters must be non-empty; ensuring `end` does not prefix
    /// legitimate literal content is the caller's business.
    #[must_use]
    pub fn new(start_seq: &'d str, end_seq: &'d str) -> Self {
        MarkerLexer { start_seq, end_seq }
    }

    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<MarkerToken> {
        let start = Finder::new(self.start_seq);
        let end = Finder::new(self.end_seq);

        let mut tokens = vec![MarkerToken::StartOfStream];
        let mut pos = 0;
        let mut in_value = false;

        while pos < text.len() {
            let rest = &text[pos..];

            if in_value {
                match end.find(rest.as_bytes()) {
                    Some(offset) => {
                        if let Some(MarkerToken::Value(value)) = tokens.last_mut() {
                            value.push_str(&rest[..offset]);
                        }

                        tokens.push(MarkerToken::MarkerEnd);
                        in_value = false;
                        pos += offset + self.end_seq.len();
                    }
                    None => {
                        if let Some(MarkerToken::Value(value)) = tokens.last_mut() {
                            value.push_str(rest);
                        }

                        pos = text.len();
                    }
                }
            } else {
                match start.find(rest.as_bytes()) {
                    Some(offset) => {
                        if offset > 0 {
                            tokens.push(MarkerToken::Content(rest[..offset].to_string()));
                        }

                        tokens.push(MarkerToken::MarkerStart);
                        tokens.push(MarkerToken::Value(String::new()));
                        in_value = true;
                        pos += offset + self.start_seq.len();
                    }
                    None => {
                        tokens.push(MarkerToken::Content(rest.to_string()));
                        pos = text.len();
                    }
                }
            }
        }

        tokens.push(MarkerToken::EndOfStream);
        tokens
    }
}
