use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Faults raised by the arithmetic itself.
///
/// These are not calculator errors: true division by zero is left to the
/// arithmetic to report, and so is a power with no real result.
pub enum NumericFault {
    /// Division of a number by zero, including `0` raised to a negative power.
    ZeroDivision {
        /// The operator symbol.
        operator: char,
    },
    /// A negative base raised to a fractional power.
    ComplexResult,
}

impl NumericFault {
    /// Returns the flat kind of this fault.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroDivision { .. } => ErrorKind::ZeroDivisionFault,
            Self::ComplexResult => ErrorKind::ComplexResult,
        }
    }
}

impl std::fmt::Display for NumericFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDivision { operator } => write!(f, "division by zero in '{operator}'"),
            Self::ComplexResult => {
                write!(f, "negative number cannot be raised to a fractional power")
            },
        }
    }
}

impl std::error::Error for NumericFault {}
