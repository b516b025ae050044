use crate::util::num::{f64_to_i64_checked, i64_to_f64};

/// Represents a numeric value in the calculator.
///
/// Integrality is tracked by type, not by value: `Integer(5)` and `Real(5.0)`
/// compare unequal, and integer-only operations accept only the former.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` round to the nearest representable float.
    ///
    /// ## Example
    /// ```
    /// use rpncalc::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_real(), 3.0);
    /// assert_eq!(Number::Real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(i) => i64_to_f64(i),
            Self::Real(r) => r,
        }
    }

    /// Whether the value carries the integer tag.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Whether the value is zero, regardless of its tag.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Whether the value is at or above `threshold`.
    ///
    /// Only the upper side is checked; large negative values never reach a
    /// positive threshold. `NaN` is never at or above anything.
    #[must_use]
    pub fn reaches(self, threshold: f64) -> bool {
        self.as_real() >= threshold
    }

    /// Coerces an integral real to an integer when the integer fits in `i64`.
    ///
    /// Integers are returned unchanged. Reals that are fractional, non-finite,
    /// or outside the `i64` range stay reals.
    ///
    /// ## Example
    /// ```
    /// use rpncalc::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Real(4.0).normalized(), Number::Integer(4));
    /// assert_eq!(Number::Real(2.5).normalized(), Number::Real(2.5));
    /// assert_eq!(Number::Real(1e300).normalized(), Number::Real(1e300));
    /// ```
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Integer(_) => self,
            Self::Real(r) => f64_to_i64_checked(r).map_or(self, Self::Integer),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
