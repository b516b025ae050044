/// Numeric conversion helpers.
///
/// This module provides the conversions the evaluator needs between `i64` and
/// `f64`, together with the overflow threshold and decimal rounding used when
/// results are normalized and formatted.
///
/// Conversions that can lose information return an `Option`, which is `None`
/// when the value cannot be represented exactly in the target type.
pub mod num;
