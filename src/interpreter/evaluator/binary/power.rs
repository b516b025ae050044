use crate::{
    error::NumericFault,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
    util::num::i64_to_u32_checked,
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses checked
    /// arithmetic. Negative or real exponents, and integer results that would
    /// overflow, are computed with `powf`.
    ///
    /// # Errors
    /// - `NumericFault::ZeroDivision` for zero raised to a negative power.
    /// - `NumericFault::ComplexResult` for a negative base raised to a
    ///   fractional power.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{evaluator::Evaluator, value::Number};
    ///
    /// let result = Evaluator::eval_pow(Number::Integer(2), Number::Integer(10)).unwrap();
    /// assert_eq!(result, Number::Integer(1024));
    ///
    /// let result = Evaluator::eval_pow(Number::Integer(2), Number::Integer(-2)).unwrap();
    /// assert_eq!(result, Number::Real(0.25));
    ///
    /// assert!(Evaluator::eval_pow(Number::Integer(-8), Number::Real(0.5)).is_err());
    /// ```
    pub fn eval_pow(base: Number, exponent: Number) -> EvalResult<Number> {
        if let (Number::Integer(b), Number::Integer(e)) = (base, exponent)
           && let Some(e) = i64_to_u32_checked(e)
           && let Some(value) = b.checked_pow(e)
        {
            return Ok(Number::Integer(value));
        }

        let (b, e) = (base.as_real(), exponent.as_real());
        if b == 0.0 && e < 0.0 {
            return Err(NumericFault::ZeroDivision { operator: '^' }.into());
        }
        if b < 0.0 && e.is_finite() && e.fract() != 0.0 {
            return Err(NumericFault::ComplexResult.into());
        }

        Ok(Number::Real(b.powf(e)))
    }
}
