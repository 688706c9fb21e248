//! Bytecode tokens for the reverse-Polish stack machine.

use std::fmt;

use crate::error::DecodeError;

/// One instruction of a reverse-Polish program.
///
/// The `#[repr(u8)]` attribute gives each variant a stable byte value,
/// used by [`Program::encode`](crate::Program::encode).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Pop two values, push their sum.
    Plus = 0,
    /// Pop two values, push their product.
    Mult = 1,
    /// Pop the divisor, then the dividend, push the quotient.
    Div = 2,
    /// Push 1.
    One = 3,
    /// Push 2.
    Two = 4,
}

/// All tokens, in byte order.
pub const ALL_TOKENS: [Token; 5] = [Token::Plus, Token::Mult, Token::Div, Token::One, Token::Two];

impl Token {
    /// Diagnostic symbol for this token.
    pub fn symbol(self) -> &'static str {
        match self {
            Token::Plus => "+",
            Token::Mult => "*",
            Token::Div => "/",
            Token::One => "1",
            Token::Two => "2",
        }
    }

    /// Whether this token consumes two operands.
    pub fn is_operator(self) -> bool {
        matches!(self, Token::Plus | Token::Mult | Token::Div)
    }
}

impl TryFrom<u8> for Token {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Token::Plus),
            1 => Ok(Token::Mult),
            2 => Ok(Token::Div),
            3 => Ok(Token::One),
            4 => Ok(Token::Two),
            _ => Err(DecodeError::InvalidToken(value)),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_tokens() {
        for &token in &ALL_TOKENS {
            let byte = token as u8;
            assert_eq!(Token::try_from(byte), Ok(token), "byte {byte}");
        }
    }

    #[test]
    fn every_byte_value_resolves() {
        for byte in 0..=255u8 {
            match Token::try_from(byte) {
                Ok(token) => assert_eq!(token as u8, byte),
                Err(DecodeError::InvalidToken(b)) => {
                    assert_eq!(b, byte);
                    assert!(byte > 4);
                }
            }
        }
    }

    #[test]
    fn symbols() {
        let rendered: Vec<_> = ALL_TOKENS.iter().map(|t| t.symbol()).collect();
        assert_eq!(rendered, ["+", "*", "/", "1", "2"]);
    }

    #[test]
    fn operators() {
        assert!(Token::Plus.is_operator());
        assert!(Token::Mult.is_operator());
        assert!(Token::Div.is_operator());
        assert!(!Token::One.is_operator());
        assert!(!Token::Two.is_operator());
    }
}
