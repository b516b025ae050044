use crate::{
    interpreter::{evaluator::core::Evaluator, value::Number},
    util::num::i64_to_f64,
};

impl Evaluator {
    /// Evaluates unary minus.
    ///
    /// Negating `i64::MIN` cannot be represented as an integer and yields a
    /// real instead.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{evaluator::Evaluator, value::Number};
    ///
    /// assert_eq!(Evaluator::eval_negate(Number::Integer(5)), Number::Integer(-5));
    /// assert_eq!(Evaluator::eval_negate(Number::Real(0.5)), Number::Real(-0.5));
    /// ```
    #[must_use]
    pub fn eval_negate(value: Number) -> Number {
        match value {
            Number::Integer(i) => {
                i.checked_neg().map_or_else(|| Number::Real(-i64_to_f64(i)), Number::Integer)
            },
            Number::Real(r) => Number::Real(-r),
        }
    }
}
