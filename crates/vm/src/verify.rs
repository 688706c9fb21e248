//! Static stack balance analysis.
//!
//! Tracks stack depth at every token, checking for underflow and
//! ensuring exactly 1 value at the end, without evaluating anything.

use crate::error::MachineError;
use twocalc_common::Program;

/// Check that `program` is a well-formed reverse-Polish program.
///
/// Reports the same error [`run`](crate::run) would.
pub fn check_stack(program: &Program) -> Result<(), MachineError> {
    let mut depth: usize = 0;

    for (pc, token) in program.tokens.iter().enumerate() {
        if token.is_operator() {
            if depth < 2 {
                return Err(MachineError::StackUnderflow { at: pc });
            }
            depth -= 1;
        } else {
            depth += 1;
        }
    }

    match depth {
        0 => Err(MachineError::EmptyStack),
        1 => Ok(()),
        count => Err(MachineError::UnbalancedStack { count }),
    }
}
