use rpncalc::{
    ErrorKind,
    error::{CalcError, NumericFault, RuntimeError},
    interpreter::{
        advisory::Advisory,
        evaluator::Evaluator,
        rpn::{Operator, RpnItem},
        value::Number,
    },
};

fn int(i: i64) -> RpnItem {
    RpnItem::Number(Number::Integer(i))
}

fn real(r: f64) -> RpnItem {
    RpnItem::Number(Number::Real(r))
}

fn op(o: Operator) -> RpnItem {
    RpnItem::Operator(o)
}

fn eval(rpn: &[RpnItem]) -> Result<Number, CalcError> {
    Evaluator::default().solve_rpn(rpn, &mut Vec::new())
}

#[test]
fn reduces_a_sequence() {
    assert_eq!(eval(&[int(3), int(4), op(Operator::Add), int(2), op(Operator::Mul)]).unwrap(),
               Number::Integer(14));
    assert_eq!(eval(&[int(10), int(4), op(Operator::Sub)]).unwrap(), Number::Integer(6));
}

#[test]
fn right_operand_is_popped_first() {
    assert_eq!(eval(&[int(10), int(4), op(Operator::Div)]).unwrap(), Number::Real(2.5));
    assert_eq!(eval(&[int(2), int(3), op(Operator::Pow)]).unwrap(), Number::Integer(8));
}

#[test]
fn unary_operators() {
    assert_eq!(eval(&[int(5), op(Operator::Neg)]).unwrap(), Number::Integer(-5));
    assert_eq!(eval(&[real(5.0), op(Operator::Neg)]).unwrap(), Number::Integer(-5));
    assert_eq!(eval(&[real(2.5), op(Operator::Pos)]).unwrap(), Number::Real(2.5));
    assert_eq!(eval(&[op(Operator::Neg)]).unwrap_err(),
               CalcError::Runtime(RuntimeError::InsufficientOperands { operator: '~' }));
    assert_eq!(eval(&[op(Operator::Pos)]).unwrap_err().kind(), ErrorKind::InsufficientOperands);
}

#[test]
fn unary_operators_normalize_alike() {
    let rpn = [real(5.0), op(Operator::Pos), int(2), op(Operator::Mod)];
    assert_eq!(eval(&rpn).unwrap(), Number::Integer(1));

    let rpn = [real(5.0), op(Operator::Neg), int(2), op(Operator::FloorDiv)];
    assert_eq!(eval(&rpn).unwrap(), Number::Integer(-3));

    let rpn = [real(5.0), int(2), op(Operator::Mod)];
    assert_eq!(eval(&rpn).unwrap_err().kind(), ErrorKind::IntegerOperandRequired);
}

#[test]
fn unary_plus_raises_the_large_result_advisory() {
    let mut advisories = Vec::new();
    let rpn = [real(1e16), op(Operator::Pos)];
    assert_eq!(Evaluator::default().solve_rpn(&rpn, &mut advisories).unwrap(),
               Number::Integer(10_000_000_000_000_000));
    assert_eq!(advisories.len(), 1);
}

#[test]
fn normalized_results_satisfy_integer_checks() {
    // 2.5 * 2 is normalized to the integer 5 before the modulo sees it.
    let rpn = [real(2.5), int(2), op(Operator::Mul), int(3), op(Operator::Mod)];
    assert_eq!(eval(&rpn).unwrap(), Number::Integer(2));
}

#[test]
fn binary_operators_need_two_operands() {
    assert_eq!(eval(&[int(1), op(Operator::Add)]).unwrap_err(),
               CalcError::Runtime(RuntimeError::InsufficientOperands { operator: '+' }));
    assert_eq!(eval(&[op(Operator::Mul)]).unwrap_err().kind(), ErrorKind::InsufficientOperands);
}

#[test]
fn exactly_one_value_must_remain() {
    assert_eq!(eval(&[]).unwrap_err(),
               CalcError::Runtime(RuntimeError::InvalidExpression { remaining: 0 }));
    assert_eq!(eval(&[int(1), int(2)]).unwrap_err(),
               CalcError::Runtime(RuntimeError::InvalidExpression { remaining: 2 }));
}

#[test]
fn integer_operations() {
    assert_eq!(eval(&[int(7), int(2), op(Operator::FloorDiv)]).unwrap(), Number::Integer(3));
    assert_eq!(eval(&[int(7), real(2.0), op(Operator::FloorDiv)]).unwrap_err(),
               CalcError::Runtime(RuntimeError::IntegerOperandRequired { operation: "//" }));
    assert_eq!(eval(&[int(7), int(0), op(Operator::Mod)]).unwrap_err(),
               CalcError::Runtime(RuntimeError::DivisionByZero { operation: "%" }));
    assert_eq!(eval(&[int(i64::MIN), int(-1), op(Operator::FloorDiv)]).unwrap(),
               Number::Real(9_223_372_036_854_775_808.0));
    assert_eq!(eval(&[int(i64::MIN), int(-1), op(Operator::Mod)]).unwrap(), Number::Integer(0));
}

#[test]
fn true_division_by_zero_is_a_numeric_fault() {
    assert_eq!(eval(&[int(5), int(0), op(Operator::Div)]).unwrap_err(),
               CalcError::Numeric(NumericFault::ZeroDivision { operator: '/' }));
    assert_eq!(eval(&[real(5.0), real(0.0), op(Operator::Div)]).unwrap_err().kind(),
               ErrorKind::ZeroDivisionFault);
}

#[test]
fn large_result_advisory_fires_once_per_call() {
    let evaluator = Evaluator::default();
    let rpn = [int(10), int(20), op(Operator::Pow), int(10), op(Operator::Mul)];

    let mut advisories = Vec::new();
    evaluator.solve_rpn(&rpn, &mut advisories).unwrap();
    assert!(matches!(advisories[..], [Advisory::LargeResult { value: Number::Real(_) }]));

    evaluator.solve_rpn(&rpn, &mut advisories).unwrap();
    assert_eq!(advisories.len(), 2);
}

#[test]
fn threshold_is_inclusive_and_configurable() {
    let evaluator = Evaluator::default().with_threshold(100.0);
    assert!((evaluator.threshold() - 100.0).abs() < f64::EPSILON);

    let mut advisories = Vec::new();
    evaluator.solve_rpn(&[int(99), int(1), op(Operator::Add)], &mut advisories).unwrap();
    assert_eq!(advisories, [Advisory::LargeResult { value: Number::Integer(100) }]);

    let mut advisories = Vec::new();
    evaluator.solve_rpn(&[int(98), int(1), op(Operator::Add)], &mut advisories).unwrap();
    assert!(advisories.is_empty());
}

#[test]
fn final_values_are_rounded() {
    let rpn = [int(2), int(3), op(Operator::Div)];
    assert_eq!(Evaluator::new(4).solve_rpn(&rpn, &mut Vec::new()).unwrap(),
               Number::Real(0.6667));
    assert_eq!(Evaluator::default().precision(), 2);
    assert_eq!(eval(&[real(1e300)]).unwrap(), Number::Real(1e300));
    assert_eq!(eval(&[real(4.0)]).unwrap(), Number::Integer(4));
}
