/// Core evaluation logic and configuration.
///
/// Contains the `Evaluator` itself, the RPN reduction loop, result
/// normalization, and final rounding.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements the arithmetic of every binary operator, with the result type
/// chosen from the operand types.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

pub use self::core::{EvalResult, Evaluator};
