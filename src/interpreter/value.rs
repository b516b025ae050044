/// Core numeric value type.
///
/// Defines `Number`, the tagged integer/real value that flows through the RPN
/// sequence and the evaluation stack, with its conversions and normalization
/// rules.
pub mod core;

pub use self::core::Number;
