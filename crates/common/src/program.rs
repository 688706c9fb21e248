//! Program representation: a flat reverse-Polish token sequence.
//!
//! The byte form is one byte per token with no header.

use std::fmt;

use crate::error::DecodeError;
use crate::token::Token;

/// A bytecode program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The token stream.
    pub tokens: Vec<Token>,
}

impl Program {
    /// Create a new program from a vector of tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Encode the program to bytes, one per token.
    pub fn encode(&self) -> Vec<u8> {
        self.tokens.iter().map(|&t| t as u8).collect()
    }

    /// Decode a byte slice into a program.
    ///
    /// Every byte must name a token. Stack balance is not checked here.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        bytes
            .iter()
            .map(|&b| Token::try_from(b))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Number of tokens in the program.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the program has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for Program {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Tokens separated by single spaces, e.g. `1 2 + 2 *`.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
