//! Flat token → expression decoder.
//!
//! Decoding mirrors [`encode`](crate::encode): one token per node,
//! operators recurse into `left` then `right`, literals are followed by
//! their padding. A [`Cursor`] threads through the recursion and only
//! ever moves forward.

use log::debug;
use twocalc_common::{Expr, Literal};

use crate::error::CodecError;
use crate::shape::{check_bound, padding};
use crate::token::{FlatToken, TokenKind};

/// How strictly [`decode`] treats malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Exact inverse of encoding. Any deviation is an error.
    #[default]
    Strict,
    /// Best effort for fuzz input: out-of-range literals become 1,
    /// padding is skipped unchecked, operators at the bound become 1,
    /// and trailing tokens are ignored.
    Resilient,
}

/// Read position over a token slice.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [FlatToken],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [FlatToken]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Index of the next unread token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread tokens.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    pub fn peek(&self) -> Option<FlatToken> {
        self.tokens.get(self.pos).copied()
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Option<FlatToken> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Skip up to `count` tokens, stopping at the end of input.
    pub fn skip(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.tokens.len());
    }
}

/// Decode a flat token sequence into an expression.
///
/// Decoding starts at depth 0. In [`Mode::Strict`] the sequence must be
/// exactly what [`encode`](crate::encode) produces for some tree.
///
/// # Errors
///
/// Strict mode reports every [`CodecError`] variant it meets. Resilient
/// mode still fails on [`CodecError::UnexpectedEnd`],
/// [`CodecError::UnexpectedFiller`] and
/// [`CodecError::DepthBoundTooLarge`]; callers feeding fuzz input should
/// treat those as "skip this input".
pub fn decode(tokens: &[FlatToken], max_depth: usize, mode: Mode) -> Result<Expr, CodecError> {
    check_bound(max_depth)?;

    let decoder = Decoder { max_depth, mode };
    let mut cursor = Cursor::new(tokens);
    let expr = decoder.node(&mut cursor, 0)?;

    let count = cursor.remaining();
    if count > 0 {
        match mode {
            Mode::Strict => return Err(CodecError::TrailingTokens { count }),
            Mode::Resilient => debug!("ignoring {count} trailing token(s)"),
        }
    }

    Ok(expr)
}

struct Decoder {
    max_depth: usize,
    mode: Mode,
}

impl Decoder {
    fn node(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<Expr, CodecError> {
        let at = cursor.position();
        let token = cursor
            .next_token()
            .ok_or(CodecError::UnexpectedEnd { at })?;

        match token.kind {
            TokenKind::Int => {
                let literal = self.literal(at, token.value)?;
                self.padding(cursor, depth)?;
                Ok(Expr::lit(literal))
            }
            TokenKind::Plus => self.operator(cursor, at, depth, Expr::plus),
            TokenKind::Mult => self.operator(cursor, at, depth, Expr::mult),
            TokenKind::Div => self.operator(cursor, at, depth, Expr::div),
            TokenKind::DontCare => Err(CodecError::UnexpectedFiller { at }),
        }
    }

    fn operator(
        &self,
        cursor: &mut Cursor<'_>,
        at: usize,
        depth: usize,
        build: fn(Expr, Expr) -> Expr,
    ) -> Result<Expr, CodecError> {
        if depth >= self.max_depth {
            return self.depth_violation(at, depth);
        }
        let left = self.node(cursor, depth + 1)?;
        let right = self.node(cursor, depth + 1)?;
        Ok(build(left, right))
    }

    fn literal(&self, at: usize, value: u8) -> Result<Literal, CodecError> {
        match (Literal::new(i64::from(value)), self.mode) {
            (Ok(literal), _) => Ok(literal),
            (Err(_), Mode::Strict) => Err(CodecError::InvalidLiteral { at, value }),
            (Err(_), Mode::Resilient) => {
                debug!("token {at}: coercing literal {value}");
                Ok(Literal::normalize(i64::from(value)))
            }
        }
    }

    fn padding(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<(), CodecError> {
        let expected = padding(self.max_depth.saturating_sub(depth));

        match self.mode {
            Mode::Strict => {
                for _ in 0..expected {
                    let at = cursor.position();
                    match cursor.next_token() {
                        Some(token) if token.kind == TokenKind::DontCare => {}
                        _ => return Err(CodecError::MalformedPadding { at }),
                    }
                }
            }
            Mode::Resilient => {
                if cursor.remaining() < expected {
                    debug!(
                        "padding at token {} truncated ({} of {expected})",
                        cursor.position(),
                        cursor.remaining()
                    );
                }
                cursor.skip(expected);
            }
        }
        Ok(())
    }

    fn depth_violation(&self, at: usize, depth: usize) -> Result<Expr, CodecError> {
        match self.mode {
            Mode::Strict => Err(CodecError::DepthExceeded {
                depth,
                max_depth: self.max_depth,
            }),
            Mode::Resilient => {
                debug!("token {at}: operator at depth bound, substituting 1");
                Ok(Expr::one())
            }
        }
    }
}
