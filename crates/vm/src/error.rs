//! Errors for malformed bytecode.
//!
//! Every variant means the token stream is not a well-formed
//! reverse-Polish program. The machine never pads a short stack or
//! drops surplus values to recover.

use thiserror::Error;

/// Errors that occur while running, decompiling or checking a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// An operator found fewer than two values on the stack.
    #[error("stack underflow at token {at}")]
    StackUnderflow { at: usize },

    /// The program produced no value at all.
    #[error("program ended with empty stack")]
    EmptyStack,

    /// The program left more than one value on the stack.
    #[error("program ended with {count} values on stack (expected 1)")]
    UnbalancedStack { count: usize },
}
