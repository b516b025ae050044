use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the evaluator raises while reducing an RPN sequence.
pub enum RuntimeError {
    /// An operator found fewer values on the stack than it consumes.
    InsufficientOperands {
        /// The operator symbol.
        operator: char,
    },
    /// Floor division or modulo received a real operand.
    IntegerOperandRequired {
        /// The operation as written, `//` or `%`.
        operation: &'static str,
    },
    /// Floor division or modulo by zero.
    DivisionByZero {
        /// The operation as written, `//` or `%`.
        operation: &'static str,
    },
    /// Evaluation did not end with exactly one value.
    InvalidExpression {
        /// How many values were left on the stack.
        remaining: usize,
    },
}

impl RuntimeError {
    /// Returns the flat kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
            Self::IntegerOperandRequired { .. } => ErrorKind::IntegerOperandRequired,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::InvalidExpression { .. } => ErrorKind::InvalidExpression,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { operator } => {
                write!(f, "Invalid expression: not enough operands for '{operator}'.")
            },
            Self::IntegerOperandRequired { operation } => {
                write!(f, "Invalid action for float digits in {operation}.")
            },
            Self::DivisionByZero { operation } => write!(f, "Division by zero in {operation}."),
            Self::InvalidExpression { remaining } => write!(f,
                                                            "Invalid expression: {remaining} values left after evaluation, expected 1."),
        }
    }
}

impl std::error::Error for RuntimeError {}
