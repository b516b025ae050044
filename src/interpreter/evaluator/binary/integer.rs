use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
    util::num::i64_to_f64,
};

impl Evaluator {
    /// Evaluates floor division (`$`). The quotient rounds toward negative
    /// infinity.
    ///
    /// Both operands must carry the integer tag; a real such as `5.0` is
    /// rejected even though it is whole.
    ///
    /// # Errors
    /// - `RuntimeError::IntegerOperandRequired` if either operand is real.
    /// - `RuntimeError::DivisionByZero` if the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{evaluator::Evaluator, value::Number};
    ///
    /// let q = Evaluator::eval_floor_div(Number::Integer(-7), Number::Integer(2));
    /// assert_eq!(q.unwrap(), Number::Integer(-4));
    ///
    /// assert!(Evaluator::eval_floor_div(Number::Real(5.0), Number::Integer(2)).is_err());
    /// ```
    pub fn eval_floor_div(left: Number, right: Number) -> EvalResult<Number> {
        let (a, b) = integer_operands("//", left, right)?;
        Ok(floor_div(a, b))
    }

    /// Evaluates modulo (`%`). The remainder takes the sign of the divisor, so
    /// `a == (a $ b) * b + (a % b)` always holds.
    ///
    /// # Errors
    /// - `RuntimeError::IntegerOperandRequired` if either operand is real.
    /// - `RuntimeError::DivisionByZero` if the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{evaluator::Evaluator, value::Number};
    ///
    /// let r = Evaluator::eval_mod(Number::Integer(-7), Number::Integer(3));
    /// assert_eq!(r.unwrap(), Number::Integer(2));
    ///
    /// assert!(Evaluator::eval_mod(Number::Integer(7), Number::Integer(0)).is_err());
    /// ```
    pub fn eval_mod(left: Number, right: Number) -> EvalResult<Number> {
        let (a, b) = integer_operands("%", left, right)?;
        Ok(Number::Integer(floor_mod(a, b)))
    }
}

/// Checks the operand tags first, then the divisor.
fn integer_operands(operation: &'static str,
                    left: Number,
                    right: Number)
                    -> Result<(i64, i64), RuntimeError> {
    let (Number::Integer(a), Number::Integer(b)) = (left, right) else {
        return Err(RuntimeError::IntegerOperandRequired { operation });
    };
    if b == 0 {
        return Err(RuntimeError::DivisionByZero { operation });
    }
    Ok((a, b))
}

/// `b` must be non-zero.
fn floor_div(a: i64, b: i64) -> Number {
    // Only i64::MIN / -1 overflows.
    let Some(quotient) = a.checked_div(b) else {
        return Number::Real((i64_to_f64(a) / i64_to_f64(b)).floor());
    };
    if a % b != 0 && (a < 0) != (b < 0) {
        Number::Integer(quotient - 1)
    } else {
        Number::Integer(quotient)
    }
}

/// `b` must be non-zero.
fn floor_mod(a: i64, b: i64) -> i64 {
    let remainder = a.checked_rem(b).unwrap_or(0);
    if remainder != 0 && (remainder < 0) != (b < 0) {
        remainder + b
    } else {
        remainder
    }
}
