//! Expression → flat token encoder.

use twocalc_common::Expr;

use crate::error::CodecError;
use crate::shape::{check_bound, padding};
use crate::token::{FlatToken, TokenKind};

/// Child order used when laying out operator nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Every operator encodes `left` then `right`.
    #[default]
    Canonical,
    /// The layout of the first-generation corpus: `*` nodes encode their
    /// right child twice and drop the left one. Decoding such a buffer
    /// yields `right * right`.
    Legacy,
}

/// Encode `expr` with the canonical layout.
///
/// `current_depth` is the depth `expr` sits at; pass 0 for a whole tree.
///
/// # Errors
///
/// [`CodecError::DepthExceeded`] if an operator sits at or below
/// `max_depth`, [`CodecError::DepthBoundTooLarge`] for an unsupported bound.
pub fn encode(
    expr: &Expr,
    max_depth: usize,
    current_depth: usize,
) -> Result<Vec<FlatToken>, CodecError> {
    encode_with_layout(expr, max_depth, current_depth, Layout::Canonical)
}

/// Encode `expr` with an explicit child layout.
pub fn encode_with_layout(
    expr: &Expr,
    max_depth: usize,
    current_depth: usize,
    layout: Layout,
) -> Result<Vec<FlatToken>, CodecError> {
    check_bound(max_depth)?;

    let mut encoder = Encoder {
        max_depth,
        layout,
        tokens: Vec::with_capacity(padding(max_depth.saturating_sub(current_depth)) + 1),
    };
    encoder.node(expr, current_depth)?;
    Ok(encoder.tokens)
}

struct Encoder {
    max_depth: usize,
    layout: Layout,
    tokens: Vec<FlatToken>,
}

impl Encoder {
    fn node(&mut self, expr: &Expr, depth: usize) -> Result<(), CodecError> {
        match expr {
            Expr::Int(lit) => {
                self.tokens.push(FlatToken::int(lit.value()));
                let filler = padding(self.max_depth.saturating_sub(depth));
                self.tokens
                    .extend(std::iter::repeat(FlatToken::DONT_CARE).take(filler));
                Ok(())
            }
            Expr::Plus { left, right } => self.operator(TokenKind::Plus, left, right, depth),
            Expr::Mult { left, right } => match self.layout {
                Layout::Canonical => self.operator(TokenKind::Mult, left, right, depth),
                Layout::Legacy => self.operator(TokenKind::Mult, right, right, depth),
            },
            Expr::Div { left, right } => self.operator(TokenKind::Div, left, right, depth),
        }
    }

    fn operator(
        &mut self,
        kind: TokenKind,
        first: &Expr,
        second: &Expr,
        depth: usize,
    ) -> Result<(), CodecError> {
        if depth >= self.max_depth {
            return Err(CodecError::DepthExceeded {
                depth,
                max_depth: self.max_depth,
            });
        }
        self.tokens.push(FlatToken::operator(kind));
        self.node(first, depth + 1)?;
        self.node(second, depth + 1)
    }
}
