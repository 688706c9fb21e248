//! Main execution loop and token dispatch.

use log::trace;

use crate::error::MachineError;
use crate::machine::{Semantics, VM};
use twocalc_common::{Literal, Token};

impl<S: Semantics> VM<'_, S> {
    /// Execute every token once, left to right, and return the single
    /// value left on the stack.
    pub fn execute(mut self) -> Result<S::Value, MachineError> {
        while let Some(&token) = self.program.tokens.get(self.pc) {
            trace!("token {} `{token}`, stack depth {}", self.pc, self.stack.len());

            match token {
                Token::One => {
                    let value = self.semantics.literal(Literal::One);
                    self.push(value);
                }
                Token::Two => {
                    let value = self.semantics.literal(Literal::Two);
                    self.push(value);
                }
                Token::Plus => {
                    let (left, right) = self.pop_operands()?;
                    let value = self.semantics.plus(left, right);
                    self.push(value);
                }
                Token::Mult => {
                    let (left, right) = self.pop_operands()?;
                    let value = self.semantics.mult(left, right);
                    self.push(value);
                }
                Token::Div => {
                    // The divisor is on top.
                    let (dividend, divisor) = self.pop_operands()?;
                    let value = self.semantics.div(dividend, divisor);
                    self.push(value);
                }
            }

            self.pc += 1;
        }

        self.finish()
    }
}
