/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression or
/// converting it to reverse Polish notation: unknown symbols, bad spacing,
/// invalid operator sequences, and unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types the evaluator raises itself while reducing an RPN
/// sequence: missing operands, non-integer operands for integer-only
/// operations, explicit division by zero, and malformed expressions.
pub mod runtime_error;
/// Lower-level numeric faults.
///
/// Faults raised by the arithmetic itself rather than by the calculator's
/// checks, such as a true division by zero.
pub mod numeric_fault;

pub use numeric_fault::NumericFault;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Flat classification of every failure `solve` can produce.
///
/// Useful for callers that only need to know what went wrong, not where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized character(s) in the expression.
    InvalidSymbols,
    /// Whitespace separating the parts of what should be one literal.
    InvalidSpacing,
    /// Two consecutive operators with no valid unary interpretation.
    InvalidOperatorSequence,
    /// Unmatched open or close parenthesis.
    UnbalancedParentheses,
    /// An operator found fewer operands than it needs.
    InsufficientOperands,
    /// Floor division or modulo applied to a non-integer operand.
    IntegerOperandRequired,
    /// Zero right operand for floor division or modulo.
    DivisionByZero,
    /// The expression left zero or several values on the stack.
    InvalidExpression,
    /// Unguarded true division by zero.
    ZeroDivisionFault,
    /// A power whose real result does not exist.
    ComplexResult,
}

/// Any error produced while solving an expression.
///
/// Calculator errors (`Parse` and `Runtime`) come from the calculator's own
/// checks. `Numeric` wraps a fault raised by the arithmetic itself and is kept
/// apart so callers can tell the two families apart.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The expression could not be tokenized or converted.
    Parse(ParseError),
    /// The RPN sequence could not be evaluated.
    Runtime(RuntimeError),
    /// The arithmetic faulted.
    Numeric(NumericFault),
}

impl CalcError {
    /// Returns the flat kind of this error.
    ///
    /// ## Example
    /// ```
    /// use rpncalc::{Calculator, error::ErrorKind};
    ///
    /// let err = Calculator::default().solve("10 // 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    ///
    /// let err = Calculator::default().solve("5 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ZeroDivisionFault);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
            Self::Numeric(e) => e.kind(),
        }
    }

    /// Whether this is a lower-level numeric fault rather than one of the
    /// calculator's own errors.
    #[must_use]
    pub const fn is_numeric_fault(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<NumericFault> for CalcError {
    fn from(e: NumericFault) -> Self {
        Self::Numeric(e)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
            Self::Numeric(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Numeric(e) => Some(e),
        }
    }
}
