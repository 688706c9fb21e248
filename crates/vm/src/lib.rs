//! twocalc virtual machine: runs and decompiles bytecode programs.
//!
//! The VM has a single value stack. Literal tokens push, operator tokens
//! pop two values and push one. For every operator the first value
//! popped is the right-hand operand; for `/` that is the divisor.
//!
//! # Usage
//!
//! ```
//! use twocalc_common::{Program, Token};
//! use twocalc_vm::run;
//!
//! // 1 * (2 + 2)
//! let program = Program::new(vec![
//!     Token::One,
//!     Token::Two,
//!     Token::Two,
//!     Token::Plus,
//!     Token::Mult,
//! ]);
//!
//! assert_eq!(run(&program).unwrap(), 4.0);
//! ```

pub mod error;
pub mod execute;
pub mod machine;
pub mod verify;

pub use error::MachineError;
pub use machine::{Numeric, Semantics, Tree, VM};
pub use verify::check_stack;

use twocalc_common::{Expr, Program};

/// Execute a program and return its value.
///
/// # Errors
///
/// Returns [`MachineError`] if the program underflows the stack or does
/// not finish with exactly one value.
pub fn run(program: &Program) -> Result<f64, MachineError> {
    VM::new(program, Numeric).execute()
}

/// Rebuild the expression tree a program was compiled from.
///
/// `decompile(&expr.compile()) == Ok(expr)` for every expression.
///
/// # Errors
///
/// Same conditions as [`run`].
pub fn decompile(program: &Program) -> Result<Expr, MachineError> {
    VM::new(program, Tree).execute()
}
