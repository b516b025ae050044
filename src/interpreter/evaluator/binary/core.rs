use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    rpn::Operator,
    value::Number,
};

impl Evaluator {
    /// Evaluates a binary operation between two numbers.
    ///
    /// Routes the operation to its handler: `eval_scalar_op` for `+ - *`,
    /// `eval_div` for `/`, `eval_pow` for `^`, `eval_floor_div` for `$` and
    /// `eval_mod` for `%`. The result is not normalized here.
    ///
    /// `solve_rpn` handles `~` and `@` itself and never passes them here.
    pub(crate) fn eval_binary(op: Operator, left: Number, right: Number) -> EvalResult<Number> {
        use Operator::{Add, Div, FloorDiv, Mod, Mul, Neg, Pos, Pow, Sub};

        match op {
            Add => Ok(Self::eval_scalar_op(left, right, i64::checked_add, |a, b| a + b)),
            Sub => Ok(Self::eval_scalar_op(left, right, i64::checked_sub, |a, b| a - b)),
            Mul => Ok(Self::eval_scalar_op(left, right, i64::checked_mul, |a, b| a * b)),
            Div => Self::eval_div(left, right),
            Pow => Self::eval_pow(left, right),
            FloorDiv => Self::eval_floor_div(left, right),
            Mod => Self::eval_mod(left, right),
            Neg | Pos => unreachable!("unary operator {op} dispatched as binary"),
        }
    }
}
