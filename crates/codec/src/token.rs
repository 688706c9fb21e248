//! Flat tokens and their two-byte wire form.
//!
//! ```text
//! Byte 0: kind (u8)
//! Byte 1: value (u8, only meaningful for Int)
//! ```

use std::fmt;

use log::debug;

use crate::error::WireError;

/// What a flat token slot holds.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Literal leaf. The token's value says which.
    Int = 0,
    Plus = 1,
    Mult = 2,
    Div = 3,
    /// Filler keeping the encoding length independent of tree shape.
    DontCare = 4,
}

/// All token kinds, in byte order.
pub const ALL_KINDS: [TokenKind; 5] = [
    TokenKind::Int,
    TokenKind::Plus,
    TokenKind::Mult,
    TokenKind::Div,
    TokenKind::DontCare,
];

impl TokenKind {
    /// Kind for any byte: values past `DontCare` wrap around modulo 5.
    pub fn from_byte_lossy(byte: u8) -> Self {
        ALL_KINDS[usize::from(byte) % ALL_KINDS.len()]
    }
}

impl TryFrom<u8> for TokenKind {
    type Error = WireError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TokenKind::Int),
            1 => Ok(TokenKind::Plus),
            2 => Ok(TokenKind::Mult),
            3 => Ok(TokenKind::Div),
            4 => Ok(TokenKind::DontCare),
            _ => Err(WireError::UnknownKind(value)),
        }
    }
}

/// One slot of a flat encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlatToken {
    pub kind: TokenKind,
    /// Literal value for `Int`; zero and ignored otherwise.
    pub value: u8,
}

impl FlatToken {
    pub const DONT_CARE: FlatToken = FlatToken {
        kind: TokenKind::DontCare,
        value: 0,
    };

    /// An `Int` token. The value is not validated; decoding does that.
    pub fn int(value: u8) -> Self {
        Self {
            kind: TokenKind::Int,
            value,
        }
    }

    /// A token of the given kind with a zero value.
    pub fn operator(kind: TokenKind) -> Self {
        Self { kind, value: 0 }
    }

    pub fn to_bytes(self) -> [u8; 2] {
        [self.kind as u8, self.value]
    }

    pub fn from_bytes(bytes: [u8; 2]) -> Result<Self, WireError> {
        let kind = TokenKind::try_from(bytes[0])?;
        Ok(Self {
            kind,
            value: bytes[1],
        })
    }

    /// Like [`FlatToken::from_bytes`], but never fails.
    pub fn from_bytes_lossy(bytes: [u8; 2]) -> Self {
        Self {
            kind: TokenKind::from_byte_lossy(bytes[0]),
            value: bytes[1],
        }
    }
}

impl fmt::Display for FlatToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Int => write!(f, "{}", self.value),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Mult => f.write_str("*"),
            TokenKind::Div => f.write_str("/"),
            TokenKind::DontCare => f.write_str("_"),
        }
    }
}

/// Serialize tokens to their wire form. The result length is always
/// `tokens.len() * 2`.
pub fn to_bytes(tokens: &[FlatToken]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(tokens.len() * 2);
    for token in tokens {
        bytes.extend_from_slice(&token.to_bytes());
    }
    bytes
}

/// Parse tokens from their wire form.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<FlatToken>, WireError> {
    if bytes.len() % 2 != 0 {
        return Err(WireError::InvalidLength(bytes.len()));
    }

    bytes
        .chunks_exact(2)
        .map(|pair| FlatToken::from_bytes([pair[0], pair[1]]))
        .collect()
}

/// Parse arbitrary bytes as tokens, for resilient decoding of fuzz input.
///
/// Unknown kind bytes wrap around with [`TokenKind::from_byte_lossy`] and
/// a trailing odd byte is dropped.
pub fn from_bytes_lossy(bytes: &[u8]) -> Vec<FlatToken> {
    let pairs = bytes.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        debug!("dropping trailing byte of odd-length stream ({} bytes)", bytes.len());
    }
    pairs
        .map(|pair| FlatToken::from_bytes_lossy([pair[0], pair[1]]))
        .collect()
}

/// Space-separated rendering for diagnostics, e.g. `* 1 _ _ 2 _ _`.
pub fn render(tokens: &[FlatToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
