//! twocalc codec: fixed-depth flat token encoding of expressions.
//!
//! An expression encoded with depth bound `D` is laid out as a complete
//! binary tree of depth `D` in pre-order. Literal leaves above the bound
//! are followed by `DontCare` filler for the slots a full subtree would
//! have used, so every tree encodes to exactly [`frame_len(D)`](frame_len)
//! tokens. That fixed size lets a fuzzer mutate a buffer of constant
//! length and still decode every slot.
//!
//! # Usage
//!
//! ```
//! use twocalc_codec::{decode, encode, frame_len, Mode};
//! use twocalc_common::Expr;
//!
//! let expr = Expr::mult(Expr::one(), Expr::two());
//! let tokens = encode(&expr, 2, 0).unwrap();
//! assert_eq!(tokens.len(), frame_len(2));
//! assert_eq!(decode(&tokens, 2, Mode::Strict).unwrap(), expr);
//! ```
//!
//! [`Mode::Resilient`] accepts arbitrary input and returns some
//! well-formed expression whenever the token stream has a node in every
//! position the tree needs one.

pub mod decode;
pub mod encode;
pub mod error;
pub mod shape;
pub mod token;

pub use decode::{decode, Cursor, Mode};
pub use encode::{encode, encode_with_layout, Layout};
pub use error::{CodecError, WireError};
pub use shape::{frame_len, padding, MAX_DEPTH};
pub use token::{from_bytes, from_bytes_lossy, render, to_bytes, FlatToken, TokenKind};
