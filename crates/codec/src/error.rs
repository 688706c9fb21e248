//! Errors for the flat token codec and its byte wire form.

use thiserror::Error;

/// Errors from encoding or decoding flat token sequences.
///
/// Resilient decoding recovers from `InvalidLiteral`, `MalformedPadding`
/// and `TrailingTokens`. Every other variant is fatal in both modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// An `Int` token carries a value other than 1 or 2.
    #[error("invalid literal value {value} at token {at}")]
    InvalidLiteral { at: usize, value: u8 },

    /// An operator sits where only a literal fits.
    #[error("operator at depth {depth} exceeds depth bound {max_depth}")]
    DepthExceeded { depth: usize, max_depth: usize },

    /// A padding slot is missing or holds something other than `DontCare`.
    #[error("expected padding at token {at}")]
    MalformedPadding { at: usize },

    /// The tree ended before the input did.
    #[error("{count} unused token(s) after complete expression")]
    TrailingTokens { count: usize },

    /// The input ended where a node must start.
    #[error("unexpected end of tokens at {at}")]
    UnexpectedEnd { at: usize },

    /// A `DontCare` token sits where a node must start.
    #[error("padding token where a node was expected at {at}")]
    UnexpectedFiller { at: usize },

    /// The requested depth bound is larger than the format supports.
    #[error("depth bound {max_depth} is larger than the supported maximum {limit}")]
    DepthBoundTooLarge { max_depth: usize, limit: usize },
}

/// Errors from reading flat tokens out of raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// Byte stream length is not a multiple of 2.
    #[error("invalid byte stream length: {0} (must be multiple of 2)")]
    InvalidLength(usize),

    /// Kind byte does not name a token kind.
    #[error("unknown token kind: {0:#04x}")]
    UnknownKind(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_codec_errors() {
        assert_eq!(
            CodecError::InvalidLiteral { at: 4, value: 5 }.to_string(),
            "invalid literal value 5 at token 4"
        );
        assert_eq!(
            CodecError::DepthExceeded {
                depth: 2,
                max_depth: 2
            }
            .to_string(),
            "operator at depth 2 exceeds depth bound 2"
        );
        assert_eq!(
            CodecError::MalformedPadding { at: 1 }.to_string(),
            "expected padding at token 1"
        );
        assert_eq!(
            CodecError::TrailingTokens { count: 3 }.to_string(),
            "3 unused token(s) after complete expression"
        );
        assert_eq!(
            CodecError::UnexpectedEnd { at: 0 }.to_string(),
            "unexpected end of tokens at 0"
        );
    }

    #[test]
    fn display_wire_errors() {
        assert_eq!(
            WireError::InvalidLength(7).to_string(),
            "invalid byte stream length: 7 (must be multiple of 2)"
        );
        assert_eq!(WireError::UnknownKind(0x09).to_string(), "unknown token kind: 0x09");
    }
}
