//! Expression trees: direct evaluation and compilation to bytecode.
//!
//! Every node exclusively owns its children, so trees are plain values:
//! built once, never mutated, dropped when the last owner goes away.
//!
//! `Div` names its operands backwards relative to the quotient it
//! computes: `left` is the divisor and `right` is the dividend. Both
//! [`Expr::eval`] and [`Expr::compile`] follow that convention.

use std::fmt;

use log::debug;

use crate::error::ExprError;
use crate::literal::Literal;
use crate::program::Program;
use crate::token::Token;

/// A node of the arithmetic calculus over {1, 2, +, *, /}.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Integer literal, 1 or 2.
    Int(Literal),
    /// `left + right`.
    Plus { left: Box<Expr>, right: Box<Expr> },
    /// `left * right`.
    Mult { left: Box<Expr>, right: Box<Expr> },
    /// `right / left`.
    Div { left: Box<Expr>, right: Box<Expr> },
}

impl Expr {
    /// Strict literal constructor. Fails for values other than 1 and 2.
    pub fn int(value: i64) -> Result<Self, ExprError> {
        Literal::new(value).map(Expr::Int)
    }

    /// Literal node from an already validated [`Literal`].
    pub fn lit(literal: Literal) -> Self {
        Expr::Int(literal)
    }

    /// The literal 1.
    pub fn one() -> Self {
        Expr::Int(Literal::One)
    }

    /// The literal 2.
    pub fn two() -> Self {
        Expr::Int(Literal::Two)
    }

    /// Sum node, `left + right`.
    pub fn plus(left: Expr, right: Expr) -> Self {
        Expr::Plus {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Product node, `left * right`.
    pub fn mult(left: Expr, right: Expr) -> Self {
        Expr::Mult {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Division node. `left` is the divisor, `right` the dividend.
    pub fn div(left: Expr, right: Expr) -> Self {
        Expr::Div {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluate the tree directly.
    ///
    /// `Div` returns `right / left`, but only when `left` is itself a
    /// literal. A compound divisor short-circuits to 0 without evaluating
    /// either side. Running the compiled bytecode does not share this
    /// behaviour, which makes the two evaluators a discrepancy oracle.
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Int(lit) => lit.as_f64(),
            Expr::Plus { left, right } => left.eval() + right.eval(),
            Expr::Mult { left, right } => left.eval() * right.eval(),
            Expr::Div { left, right } => {
                if !left.is_literal() {
                    debug!("divisor is not a literal, evaluating {self} as 0");
                    return 0.0;
                }
                right.eval() / left.eval()
            }
        }
    }

    /// Compile to reverse-Polish bytecode.
    ///
    /// `Plus` and `Mult` emit `left right op`. `Div` emits
    /// `right left /`, so the divisor is on top of the stack when the
    /// machine reaches the operator.
    pub fn compile(&self) -> Program {
        let mut tokens = Vec::with_capacity(self.node_count());
        self.compile_into(&mut tokens);
        Program::new(tokens)
    }

    fn compile_into(&self, out: &mut Vec<Token>) {
        match self {
            Expr::Int(lit) => out.push(lit.token()),
            Expr::Plus { left, right } => {
                left.compile_into(out);
                right.compile_into(out);
                out.push(Token::Plus);
            }
            Expr::Mult { left, right } => {
                left.compile_into(out);
                right.compile_into(out);
                out.push(Token::Mult);
            }
            Expr::Div { left, right } => {
                right.compile_into(out);
                left.compile_into(out);
                out.push(Token::Div);
            }
        }
    }

    /// Height of the tree. A lone literal has depth 0.
    pub fn depth(&self) -> usize {
        match self.children() {
            None => 0,
            Some((left, right)) => 1 + left.depth().max(right.depth()),
        }
    }

    /// Total number of nodes, which is also the compiled program length.
    pub fn node_count(&self) -> usize {
        match self.children() {
            None => 1,
            Some((left, right)) => 1 + left.node_count() + right.node_count(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Int(_))
    }

    /// `(left, right)` for operator nodes, `None` for literals.
    pub fn children(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Expr::Int(_) => None,
            Expr::Plus { left, right } | Expr::Mult { left, right } | Expr::Div { left, right } => {
                Some((left, right))
            }
        }
    }
}

/// Infix rendering for diagnostics. `Div` prints as `(right / left)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(lit) => write!(f, "{}", lit.value()),
            Expr::Plus { left, right } => write!(f, "({left} + {right})"),
            Expr::Mult { left, right } => write!(f, "({left} * {right})"),
            Expr::Div { left, right } => write!(f, "({right} / {left})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(v: i64) -> Expr {
        Expr::int(v).unwrap()
    }

    // --- Construction ---

    #[test]
    fn int_rejects_out_of_range() {
        assert_eq!(Expr::int(0), Err(ExprError::InvalidLiteral(0)));
        assert_eq!(Expr::int(3), Err(ExprError::InvalidLiteral(3)));
    }

    #[test]
    fn int_accepts_valid_values() {
        assert_eq!(Expr::int(1), Ok(Expr::one()));
        assert_eq!(Expr::int(2), Ok(Expr::two()));
    }

    // --- Eval ---

    #[test]
    fn eval_literals() {
        assert_eq!(Expr::one().eval(), 1.0);
        assert_eq!(Expr::two().eval(), 2.0);
    }

    #[test]
    fn eval_plus_and_mult() {
        // (1 * 2) + 1
        let e = Expr::plus(Expr::mult(lit(1), lit(2)), lit(1));
        assert_eq!(e.eval(), 3.0);
        // (2 + 2) * 2
        let e = Expr::mult(Expr::plus(lit(2), lit(2)), lit(2));
        assert_eq!(e.eval(), 8.0);
    }

    #[test]
    fn eval_div_divides_right_by_left() {
        assert_eq!(Expr::div(lit(2), lit(1)).eval(), 0.5);
        assert_eq!(Expr::div(lit(1), lit(2)).eval(), 2.0);
    }

    #[test]
    fn eval_div_with_compound_dividend() {
        // right side may be anything
        let e = Expr::div(lit(2), Expr::plus(lit(2), lit(2)));
        assert_eq!(e.eval(), 2.0);
    }

    #[test]
    fn eval_div_with_compound_divisor_is_zero() {
        let e = Expr::div(Expr::plus(lit(2), lit(1)), lit(1));
        assert_eq!(e.eval(), 0.0);
    }

    // --- Compile ---

    #[test]
    fn compile_literal() {
        assert_eq!(lit(2).compile().tokens, vec![Token::Two]);
    }

    #[test]
    fn compile_plus_mult_are_left_then_right() {
        let e = Expr::plus(Expr::mult(lit(1), lit(2)), lit(1));
        assert_eq!(
            e.compile().tokens,
            vec![Token::One, Token::Two, Token::Mult, Token::One, Token::Plus]
        );
    }

    #[test]
    fn compile_div_emits_dividend_first() {
        let e = Expr::div(Expr::plus(lit(2), lit(1)), lit(1));
        assert_eq!(
            e.compile().tokens,
            vec![Token::One, Token::Two, Token::One, Token::Plus, Token::Div]
        );
    }

    #[test]
    fn compiled_length_is_node_count() {
        let e = Expr::div(Expr::plus(lit(2), lit(1)), Expr::mult(lit(1), lit(1)));
        assert_eq!(e.compile().len(), e.node_count());
        assert_eq!(e.node_count(), 7);
    }

    // --- Shape ---

    #[test]
    fn depth_of_trees() {
        assert_eq!(lit(1).depth(), 0);
        assert_eq!(Expr::plus(lit(1), lit(2)).depth(), 1);
        assert_eq!(Expr::plus(Expr::mult(lit(1), lit(2)), lit(1)).depth(), 2);
        assert_eq!(Expr::plus(lit(1), Expr::div(lit(1), Expr::mult(lit(1), lit(2)))).depth(), 3);
    }

    #[test]
    fn children_of_operators() {
        let e = Expr::div(lit(1), lit(2));
        assert_eq!(e.children(), Some((&lit(1), &lit(2))));
        assert_eq!(lit(1).children(), None);
    }

    // --- Display ---

    #[test]
    fn display_infix() {
        let e = Expr::plus(Expr::mult(lit(1), lit(2)), lit(1));
        assert_eq!(e.to_string(), "((1 * 2) + 1)");
    }

    #[test]
    fn display_div_in_evaluation_order() {
        let e = Expr::div(lit(1), lit(2));
        assert_eq!(e.to_string(), "(2 / 1)");
    }
}
