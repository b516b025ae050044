use crate::{
    error::{CalcError, RuntimeError},
    interpreter::{
        advisory::{Advisory, AdvisorySink},
        rpn::{Operator, RpnItem},
        value::Number,
    },
    util::num::{round_to_places, OVERFLOW_THRESHOLD},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `CalcError` describing the failure.
pub type EvalResult<T> = Result<T, CalcError>;

/// Decimal places kept in a fractional final result unless configured
/// otherwise.
pub const DEFAULT_PRECISION: u32 = 2;

/// Reduces RPN sequences to a single number.
///
/// ## Usage
///
/// `Evaluator` holds only configuration: the decimal precision of fractional
/// results and the threshold for large-result advisories. All state needed
/// while evaluating (the value stack and the advisory flag) lives inside a
/// single `solve_rpn` call, so one evaluator can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    /// Decimal places kept in a fractional final result.
    precision: u32,
    /// Results at or above this value raise `Advisory::LargeResult`.
    threshold: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

/// Per-call normalization of intermediate results.
struct Normalizer<'s, S> {
    threshold: f64,
    warned:    bool,
    sink:      &'s mut S,
}

impl<S: AdvisorySink> Normalizer<'_, S> {
    /// Raises the large-result advisory once per call, then coerces integral
    /// reals to integers where they fit.
    fn settle(&mut self, value: Number) -> Number {
        if !self.warned && value.reaches(self.threshold) {
            self.sink.advise(Advisory::LargeResult { value });
            self.warned = true;
        }
        value.normalized()
    }
}

impl Evaluator {
    /// Creates an evaluator that rounds fractional results to `precision`
    /// decimal places, using the default overflow threshold.
    #[must_use]
    pub const fn new(precision: u32) -> Self {
        Self { precision,
               threshold: OVERFLOW_THRESHOLD }
    }

    /// Replaces the large-result threshold.
    #[must_use]
    pub const fn with_threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    /// Decimal places kept in a fractional final result.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// The large-result threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Evaluates an RPN sequence with a value stack.
    ///
    /// Numbers are pushed as they are. `~` negates the top value and `@`
    /// checks that one exists. Binary operators pop the right operand first,
    /// then the left one. Every operator result, unary or binary, is
    /// normalized: the first result in this call at or above the threshold
    /// raises one `Advisory::LargeResult`, and integral reals that fit in
    /// `i64` become integers. `+5.0 % 2` is therefore `1`.
    ///
    /// # Errors
    /// - `RuntimeError::InsufficientOperands` if an operator finds too few
    ///   values.
    /// - `RuntimeError::IntegerOperandRequired` or
    ///   `RuntimeError::DivisionByZero` from `//` and `%`.
    /// - `RuntimeError::InvalidExpression` unless exactly one value remains.
    /// - `CalcError::Numeric` for a true division by zero or a complex power.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{
    ///     evaluator::Evaluator,
    ///     rpn::{Operator, RpnItem},
    ///     value::Number,
    /// };
    ///
    /// let rpn = [RpnItem::Number(Number::Integer(1)),
    ///            RpnItem::Number(Number::Integer(3)),
    ///            RpnItem::Operator(Operator::Div)];
    ///
    /// let mut advisories = Vec::new();
    /// let result = Evaluator::new(3).solve_rpn(&rpn, &mut advisories).unwrap();
    /// assert_eq!(result, Number::Real(0.333));
    /// assert!(advisories.is_empty());
    /// ```
    pub fn solve_rpn(&self, rpn: &[RpnItem], sink: &mut impl AdvisorySink) -> EvalResult<Number> {
        let mut normalizer = Normalizer { threshold: self.threshold,
                                          warned: false,
                                          sink };
        let mut stack: Vec<Number> = Vec::new();

        for item in rpn {
            match *item {
                RpnItem::Number(n) => stack.push(n),
                RpnItem::Operator(op @ (Operator::Neg | Operator::Pos)) => {
                    let operand = stack.pop().ok_or_else(|| insufficient(op))?;
                    let value = match op {
                        Operator::Neg => Self::eval_negate(operand),
                        _ => operand,
                    };
                    stack.push(normalizer.settle(value));
                },
                RpnItem::Operator(op) => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(insufficient(op).into());
                    };
                    let value = Self::eval_binary(op, left, right)?;
                    stack.push(normalizer.settle(value));
                },
            }
        }

        let &[value] = stack.as_slice() else {
            return Err(RuntimeError::InvalidExpression { remaining: stack.len() }.into());
        };

        let result = self.finish(value);
        tracing::debug!(%result, "evaluated");
        Ok(result)
    }

    /// Formats a final value: integral values become integers where they fit
    /// in `i64`, fractional values are rounded to the configured precision.
    ///
    /// ## Example
    /// ```
    /// use rpncalc::interpreter::{evaluator::Evaluator, value::Number};
    ///
    /// let evaluator = Evaluator::default();
    /// assert_eq!(evaluator.finish(Number::Real(8.0)), Number::Integer(8));
    /// assert_eq!(evaluator.finish(Number::Real(2.0 / 3.0)), Number::Real(0.67));
    /// ```
    #[must_use]
    pub fn finish(&self, value: Number) -> Number {
        match value.normalized() {
            Number::Real(r) if r.fract() != 0.0 => Number::Real(round_to_places(r, self.precision)),
            settled => settled,
        }
    }
}

const fn insufficient(op: Operator) -> RuntimeError {
    RuntimeError::InsufficientOperands { operator: op.symbol() }
}
