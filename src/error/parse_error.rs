use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or conversion.
///
/// Every variant carries the byte offset in the original expression where the
/// problem was found.
pub enum ParseError {
    /// Found a character that is not part of any token.
    InvalidSymbols {
        /// The unrecognized text.
        symbol:   String,
        /// Byte offset in the expression.
        position: usize,
    },
    /// Whitespace separates two numbers, or the parts of a decimal number.
    InvalidSpacing {
        /// Byte offset of the offending whitespace.
        position: usize,
    },
    /// An operator followed another operator with no unary reading.
    InvalidOperatorSequence {
        /// The second operator of the pair.
        operator: char,
        /// Byte offset of the second operator.
        position: usize,
    },
    /// A parenthesis has no partner.
    UnbalancedParentheses {
        /// Byte offset of the unmatched parenthesis.
        position: usize,
    },
}

impl ParseError {
    /// Returns the flat kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSymbols { .. } => ErrorKind::InvalidSymbols,
            Self::InvalidSpacing { .. } => ErrorKind::InvalidSpacing,
            Self::InvalidOperatorSequence { .. } => ErrorKind::InvalidOperatorSequence,
            Self::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
        }
    }

    /// Byte offset in the original expression.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidSymbols { position, .. }
            | Self::InvalidSpacing { position }
            | Self::InvalidOperatorSequence { position, .. }
            | Self::UnbalancedParentheses { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSymbols { symbol, position } => {
                write!(f, "Invalid symbols in expression at {position}: '{symbol}'.")
            },
            Self::InvalidSpacing { position } => write!(f,
                                                        "Invalid spacing at {position}: two numbers in a row, or a number split around its decimal point."),
            Self::InvalidOperatorSequence { operator, position } => write!(f,
                                                                           "Invalid sequence of operators at {position}: '{operator}' cannot follow another operator."),
            Self::UnbalancedParentheses { position } => {
                write!(f, "Unbalanced parentheses at {position}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
