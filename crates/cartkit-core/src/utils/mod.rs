//! # Utils
//!
//! Independent pure helpers. None of them touch a cart or each other.
//!
//! - [`arith`] - `sum`, `divide`, `get_max`
//! - [`text`] - `is_palindrome`, `capitalize`
//! - [`email`] - `validate_email`

pub mod arith;
pub mod email;
pub mod text;

pub use arith::{divide, get_max, get_max_of, sum, sum_numbers, Operand};
pub use email::validate_email;
pub use text::{capitalize, is_palindrome};
