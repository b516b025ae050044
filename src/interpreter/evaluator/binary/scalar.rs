use crate::{
    error::NumericFault,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
};

impl Evaluator {
    /// Evaluates `+`, `-` or `*`, given as a checked integer operation and
    /// its floating-point counterpart.
    ///
    /// Two integers use `exact` and fall back to `real` when it reports an
    /// overflow. Any real operand makes the result real.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{evaluator::Evaluator, value::Number};
    ///
    /// let x = Number::Real(1.5);
    /// let y = Number::Integer(2);
    /// assert_eq!(Evaluator::eval_scalar_op(x, y, i64::checked_mul, |a, b| a * b),
    ///            Number::Real(3.0));
    ///
    /// let big = Number::Integer(i64::MAX);
    /// let sum = Evaluator::eval_scalar_op(big, y, i64::checked_add, |a, b| a + b);
    /// assert!(matches!(sum, Number::Real(_)));
    /// ```
    #[must_use]
    pub fn eval_scalar_op(left: Number,
                          right: Number,
                          exact: fn(i64, i64) -> Option<i64>,
                          real: fn(f64, f64) -> f64)
                          -> Number {
        if let (Number::Integer(a), Number::Integer(b)) = (left, right)
           && let Some(value) = exact(a, b)
        {
            return Number::Integer(value);
        }

        Number::Real(real(left.as_real(), right.as_real()))
    }

    /// Evaluates true division. The result is always real.
    ///
    /// # Errors
    /// A zero divisor is not a calculator error: it is reported as the
    /// lower-level `NumericFault::ZeroDivision`.
    pub fn eval_div(left: Number, right: Number) -> EvalResult<Number> {
        if right.is_zero() {
            return Err(NumericFault::ZeroDivision { operator: '/' }.into());
        }
        Ok(Number::Real(left.as_real() / right.as_real()))
    }
}
