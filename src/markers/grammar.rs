use super::MarkerToken;

/// Validates the adjacency grammar of a marker token sequence:
/// `(content)? ( start value? end (content)? )*` between the stream
/// sentinels. Returns `Err(i)` with the index of the first token whose
/// successor is illegal.
pub fn check(tokens: &[MarkerToken]) -> Result<(), usize> {
    for (i, pair) in tokens.windows(2).enumerate() {
        let legal = match pair[0] {
            MarkerToken::StartOfStream => matches!(
                pair[1],
                MarkerToken::Content(_) | MarkerToken::MarkerStart | MarkerToken::EndOfStream
            ),
            MarkerToken::Content(_) => {
                matches!(pair[1], MarkerToken::MarkerStart | MarkerToken::EndOfStream)
            }
            MarkerToken::MarkerStart => {
                matches!(pair[1], MarkerToken::Value(_) | MarkerToken::MarkerEnd)
            }
            MarkerToken::Value(_) => matches!(pair[1], MarkerToken::MarkerEnd),
            MarkerToken::MarkerEnd => {
                matches!(pair[1], MarkerToken::Content(_) | MarkerToken::EndOfStream)
            }
            MarkerToken::EndOfStream => true,
        };

        if !legal {
            return Err(i);
        }
    }

    Ok(())
}
