//! # rpncalc
//!
//! rpncalc evaluates arithmetic expressions written in infix notation. An
//! expression goes through three stages: the lexer splits it into lexemes,
//! the converter reorders them into reverse Polish notation, and the evaluator
//! reduces the RPN sequence to a single number.
//!
//! Supported operators are `+`, `-`, `*`, `/`, `**` (or `^`), `//` (or `$`),
//! `%`, unary `+` and `-`, and parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{
        advisory::{AdvisorySink, TracingSink},
        converter::Converter,
        evaluator::Evaluator,
        lexer::tokenize,
    },
};

/// Provides unified error types for every stage.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting, or evaluating an expression, and the numeric faults the
/// arithmetic itself can raise.
///
/// # Responsibilities
/// - Defines one error enum per stage, each with a position or operator for
///   context.
/// - Keeps calculator errors apart from lower-level numeric faults.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the three stages of evaluation.
///
/// This module ties together the lexer, the RPN converter, the evaluator,
/// numeric values, and advisories.
///
/// # Responsibilities
/// - Coordinates the lexer, converter and evaluator.
/// - Provides each stage as a separately usable entry point.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// General utilities for safe numeric conversion and rounding.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32` and `f64`.
/// - Round results to a number of decimal places.
pub mod util;

pub use crate::{error::ErrorKind, interpreter::value::Number};

/// Evaluates expressions end to end.
///
/// A `Calculator` owns only configuration, so evaluating never changes it and
/// one instance can be used from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    converter: Converter,
    evaluator: Evaluator,
}

impl Calculator {
    /// Creates a calculator that rounds fractional results to `precision`
    /// decimal places.
    #[must_use]
    pub fn new(precision: u32) -> Self {
        Self { converter: Converter::default(),
               evaluator: Evaluator::new(precision), }
    }

    /// Creates a calculator from explicitly configured stages.
    #[must_use]
    pub const fn from_parts(converter: Converter, evaluator: Evaluator) -> Self {
        Self { converter, evaluator }
    }

    /// Decimal places kept in a fractional result.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.evaluator.precision()
    }

    /// Solves an expression, logging advisories through `tracing`.
    ///
    /// # Errors
    /// Returns the first error raised by any stage.
    ///
    /// # Examples
    /// ```
    /// use rpncalc::{Calculator, Number};
    ///
    /// let calculator = Calculator::default();
    /// assert_eq!(calculator.solve("2 ** 3 ** 2").unwrap(), Number::Integer(512));
    /// assert_eq!(calculator.solve("3 + .5").unwrap(), Number::Real(3.5));
    /// assert!(calculator.solve("(2 + 3").is_err());
    /// ```
    pub fn solve(&self, expression: &str) -> Result<Number, CalcError> {
        self.solve_with(expression, &mut TracingSink)
    }

    /// Solves an expression, sending advisories to `sink`.
    ///
    /// Each advisory kind is raised at most once per call, no matter how many
    /// times the sink has been used before.
    ///
    /// # Examples
    /// ```
    /// use rpncalc::{Calculator, Number, interpreter::advisory::Advisory};
    ///
    /// let mut advisories: Vec<Advisory> = Vec::new();
    /// let result = Calculator::default().solve_with("2++2", &mut advisories);
    /// assert_eq!(result.unwrap(), Number::Integer(4));
    /// assert_eq!(advisories.len(), 1);
    /// ```
    pub fn solve_with(&self,
                      expression: &str,
                      sink: &mut impl AdvisorySink)
                      -> Result<Number, CalcError> {
        let lexemes = tokenize(expression)?;
        let rpn = self.converter.to_rpn(&lexemes, sink)?;
        self.evaluator.solve_rpn(&rpn, sink)
    }
}

/// Solves an expression with a fresh calculator.
///
/// Fractional results are rounded to `precision` decimal places. Advisories
/// are logged through `tracing`.
///
/// # Errors
/// Returns the first error raised by any stage.
///
/// # Examples
/// ```
/// use rpncalc::{Number, solve};
///
/// // Simple expression: the result will be calculated and no error should occur.
/// assert_eq!(solve("2 + (4 - 5)", 2).unwrap(), Number::Integer(1));
///
/// // Example with an intentional error (an unknown symbol).
/// assert!(solve("2 * & 1", 2).is_err());
/// ```
pub fn solve(expression: &str, precision: u32) -> Result<Number, CalcError> {
    Calculator::new(precision).solve(expression)
}
