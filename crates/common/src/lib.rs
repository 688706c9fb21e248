//! twocalc common types.
//!
//! This crate provides the foundational data structures for the twocalc
//! arithmetic calculus:
//!
//! - [`Literal`]: the two integer literals, 1 and 2
//! - [`Expr`]: the expression tree, with direct evaluation and compilation
//! - [`Token`]: reverse-Polish bytecode tokens
//! - [`Program`]: a sequence of tokens, with a byte encoding
//! - [`ExprError`], [`DecodeError`]: construction and decoding errors

pub mod error;
pub mod expr;
pub mod literal;
pub mod program;
pub mod token;

// Re-export commonly used types at the crate root.
pub use error::{DecodeError, ExprError};
pub use expr::Expr;
pub use literal::Literal;
pub use program::Program;
pub use token::Token;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that generates an expression no deeper than `depth`.
    fn arb_expr(depth: u32) -> impl Strategy<Value = Expr> {
        let leaf = prop_oneof![Just(Expr::one()), Just(Expr::two())];
        leaf.prop_recursive(depth, 64, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::plus(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::mult(l, r)),
                (inner.clone(), inner).prop_map(|(l, r)| Expr::div(l, r)),
            ]
        })
    }

    proptest! {
        /// A strictly built literal always holds 1 or 2; everything else is rejected.
        #[test]
        fn literal_validity(value in any::<i64>()) {
            match Literal::new(value) {
                Ok(lit) => {
                    prop_assert!(lit.value() == 1 || lit.value() == 2);
                }
                Err(e) => {
                    prop_assert!(value != 1 && value != 2);
                    prop_assert_eq!(e, ExprError::InvalidLiteral(value));
                }
            }
            let normalized = Literal::normalize(value);
            prop_assert!(normalized == Literal::One || i64::from(normalized.value()) == value);
        }

        /// The compiled program has one token per node and ends with the root's token.
        #[test]
        fn compile_shape(expr in arb_expr(4)) {
            let program = expr.compile();
            prop_assert_eq!(program.len(), expr.node_count());
            let last = *program.tokens.last().unwrap();
            let expected = match &expr {
                Expr::Int(lit) => lit.token(),
                Expr::Plus { .. } => Token::Plus,
                Expr::Mult { .. } => Token::Mult,
                Expr::Div { .. } => Token::Div,
            };
            prop_assert_eq!(last, expected);
        }

        /// Program byte encoding is lossless for compiled programs.
        #[test]
        fn program_bytes_roundtrip(expr in arb_expr(4)) {
            let program = expr.compile();
            prop_assert_eq!(Program::decode(&program.encode()), Ok(program));
        }
    }
}
