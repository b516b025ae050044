/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Results at or above this value raise a large-result advisory.
///
/// Past `2^53 - 1` an `f64` can no longer represent every integer, so results
/// computed in floating point may silently lose precision.
#[allow(clippy::cast_precision_loss)]
pub const OVERFLOW_THRESHOLD: f64 = MAX_SAFE_I64_INT as f64;

/// `2^63`, the first `f64` value above `i64::MAX`.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `i64` to the nearest `f64`.
///
/// Values above `MAX_SAFE_I64_INT` in absolute value are rounded to the
/// nearest representable float, which matches how mixed integer/real
/// arithmetic promotes its operands.
///
/// ## Example
/// ```
/// use rpncalc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64` if the value is finite, within range, and not
/// fractional.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
///
/// ## Returns
/// - `Some(i64)`: The converted value if it is exact.
/// - `None`: If the value is non-finite, fractional, or outside the `i64`
///   range.
///
/// ## Example
/// ```
/// use rpncalc::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_checked(1.5), None);
/// assert_eq!(f64_to_i64_checked(1e20), None);
/// assert_eq!(f64_to_i64_checked(f64::INFINITY), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_checked(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    // i64::MIN is exactly -2^63; the upper bound is exclusive.
    if value < -I64_UPPER_BOUND || value >= I64_UPPER_BOUND {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as i64)
}

/// Converts an `i64` exponent to `u32` for use with `checked_pow`.
///
/// ## Example
/// ```
/// use rpncalc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45), Some(45));
/// assert_eq!(i64_to_u32_checked(-1), None);
/// assert_eq!(i64_to_u32_checked(i64::MAX), None);
/// ```
#[must_use]
pub fn i64_to_u32_checked(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Decimal places past which no `f64` has a non-zero digit.
///
/// The smallest subnormal, `2^-1074`, has exactly 1074 digits after the
/// decimal point, so rounding to more places returns the value unchanged.
const EXACT_DECIMAL_PLACES: u32 = 1074;

/// Rounds `value` to `places` decimal places, ties to even.
///
/// The exact binary value is rounded rather than a scaled copy, so `2.675`
/// (stored as `2.67499999...`) rounds down to `2.67`. Only values that are
/// exactly halfway, such as `0.125`, take the even neighbour.
///
/// Non-finite values are returned unchanged.
///
/// ## Example
/// ```
/// use rpncalc::util::num::round_to_places;
///
/// assert_eq!(round_to_places(1.0 / 3.0, 3), 0.333);
/// assert_eq!(round_to_places(2.0 / 3.0, 2), 0.67);
/// assert_eq!(round_to_places(0.125, 2), 0.12);
/// assert_eq!(round_to_places(2.675, 2), 2.67);
/// assert_eq!(round_to_places(1.115, 2), 1.11);
/// assert_eq!(round_to_places(-1.25, 0), -1.0);
/// ```
#[must_use]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    if !value.is_finite() || places >= EXACT_DECIMAL_PLACES {
        return value;
    }
    let Ok(places) = usize::try_from(places) else {
        return value;
    };

    format!("{value:.places$}").parse().unwrap_or(value)
}
