//! Errors for building expressions and decoding bytecode streams.

use thiserror::Error;

/// Errors raised while constructing expression nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// Integer literals are restricted to 1 and 2.
    #[error("invalid literal {0} (must be 1 or 2)")]
    InvalidLiteral(i64),
}

/// Errors that occur while decoding a bytecode byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Byte does not name a bytecode token.
    #[error("invalid bytecode token: {0:#04x}")]
    InvalidToken(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_literal() {
        assert_eq!(
            ExprError::InvalidLiteral(5).to_string(),
            "invalid literal 5 (must be 1 or 2)"
        );
        assert_eq!(
            ExprError::InvalidLiteral(-1).to_string(),
            "invalid literal -1 (must be 1 or 2)"
        );
    }

    #[test]
    fn display_invalid_token() {
        assert_eq!(
            DecodeError::InvalidToken(0x2a).to_string(),
            "invalid bytecode token: 0x2a"
        );
    }
}
