//! VM state management: the value stack and what it holds.

use crate::error::MachineError;
use twocalc_common::{Expr, Literal, Program};

/// What the machine's stack holds and how tokens combine it.
///
/// Operators receive their operands already popped: `right` (or
/// `divisor`) is the first value popped, `left` (or `dividend`) the second.
pub trait Semantics {
    type Value;

    fn literal(&mut self, literal: Literal) -> Self::Value;
    fn plus(&mut self, left: Self::Value, right: Self::Value) -> Self::Value;
    fn mult(&mut self, left: Self::Value, right: Self::Value) -> Self::Value;
    fn div(&mut self, dividend: Self::Value, divisor: Self::Value) -> Self::Value;
}

/// Numeric execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl Semantics for Numeric {
    type Value = f64;

    fn literal(&mut self, literal: Literal) -> f64 {
        literal.as_f64()
    }

    fn plus(&mut self, left: f64, right: f64) -> f64 {
        left + right
    }

    fn mult(&mut self, left: f64, right: f64) -> f64 {
        left * right
    }

    fn div(&mut self, dividend: f64, divisor: f64) -> f64 {
        dividend / divisor
    }
}

/// Decompilation: the stack holds partially built expression trees.
///
/// A division node is rebuilt with the divisor as `left`, matching
/// [`Expr::div`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Tree;

impl Semantics for Tree {
    type Value = Expr;

    fn literal(&mut self, literal: Literal) -> Expr {
        Expr::lit(literal)
    }

    fn plus(&mut self, left: Expr, right: Expr) -> Expr {
        Expr::plus(left, right)
    }

    fn mult(&mut self, left: Expr, right: Expr) -> Expr {
        Expr::mult(left, right)
    }

    fn div(&mut self, dividend: Expr, divisor: Expr) -> Expr {
        Expr::div(divisor, dividend)
    }
}

/// The twocalc stack machine.
pub struct VM<'a, S: Semantics> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    /// Operand interpretation.
    pub(crate) semantics: S,
    /// Value stack.
    pub(crate) stack: Vec<S::Value>,
    /// Index of the token being executed.
    pub(crate) pc: usize,
}

impl<'a, S: Semantics> VM<'a, S> {
    /// Create a new VM for the given program.
    pub fn new(program: &'a Program, semantics: S) -> Self {
        Self {
            program,
            semantics,
            stack: Vec::new(),
            pc: 0,
        }
    }

    pub(crate) fn push(&mut self, value: S::Value) {
        self.stack.push(value);
    }

    /// Pop the two operands of a binary token as `(second_popped, first_popped)`.
    ///
    /// The stack is left untouched when it holds fewer than two values.
    pub(crate) fn pop_operands(&mut self) -> Result<(S::Value, S::Value), MachineError> {
        if self.stack.len() < 2 {
            return Err(MachineError::StackUnderflow { at: self.pc });
        }
        let first = self.stack.pop();
        let second = self.stack.pop();
        match (second, first) {
            (Some(second), Some(first)) => Ok((second, first)),
            _ => Err(MachineError::StackUnderflow { at: self.pc }),
        }
    }

    /// The single remaining value once every token has executed.
    pub(crate) fn finish(mut self) -> Result<S::Value, MachineError> {
        match self.stack.len() {
            0 => Err(MachineError::EmptyStack),
            1 => self.stack.pop().ok_or(MachineError::EmptyStack),
            count => Err(MachineError::UnbalancedStack { count }),
        }
    }
}
