use rpncalc::{
    Calculator, ErrorKind, Number, interpreter::advisory::Advisory, solve,
};

fn calc(src: &str) -> Number {
    Calculator::default().solve(src)
                         .unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"))
}

fn assert_value(src: &str, expected: Number) {
    assert_eq!(calc(src), expected, "Expression {src:?}");
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match Calculator::default().solve(src) {
        Ok(v) => panic!("Expression {src:?} succeeded with {v} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "Expression {src:?} failed with: {e}"),
    }
}

fn advisories(src: &str) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    let _ = Calculator::default().solve_with(src, &mut advisories);
    advisories
}

#[test]
fn basic_arithmetic() {
    assert_value("2+3", Number::Integer(5));
    assert_value("1000000000+8123719824986", Number::Integer(8_124_719_824_986));
    assert_value("10-7", Number::Integer(3));
    assert_value("6*7", Number::Integer(42));
    assert_value("8/2", Number::Integer(4));
    assert_value("2 + 3 * 4 - 6 / 3", Number::Integer(12));
    assert_value("7 - 2 - 1", Number::Integer(4));
}

#[test]
fn parentheses() {
    assert_value("2+(4-5)", Number::Integer(1));
    assert_value("2**(100-80*1.5+10+13)", Number::Integer(8));
    assert_value("((2+3)*(4+1))", Number::Integer(25));
    assert_value("((1+2)*(3+4)/(5-3+1))", Number::Integer(7));
    assert_value("(1.5+2.5)*(2/1)", Number::Integer(8));
}

#[test]
fn unary_operators() {
    assert_value("2*-3", Number::Integer(-6));
    assert_value("(+3)+2", Number::Integer(5));
    assert_value("3--2", Number::Integer(5));
    assert_value("3+-2", Number::Integer(1));
    assert_value("-3+5", Number::Integer(2));
    assert_value("3*(+2)", Number::Integer(6));
    assert_value("(-3)", Number::Integer(-3));
}

#[test]
fn power_is_right_associative() {
    assert_value("2**3**2", Number::Integer(512));
    assert_value("2^3^2", Number::Integer(512));
    assert_value("(2**3)**2", Number::Integer(64));
}

#[test]
fn power_edge_cases() {
    assert_value("2**-2", Number::Real(0.25));
    assert_value("4**.5", Number::Integer(2));
    assert_value("0**0", Number::Integer(1));
    assert_failure("0**-1", ErrorKind::ZeroDivisionFault);
    assert_failure("(0-8)**.5", ErrorKind::ComplexResult);
}

#[test]
fn integer_division_and_modulo() {
    assert_value("7//2", Number::Integer(3));
    assert_value("7%4", Number::Integer(3));
    assert_value("0-7//2", Number::Integer(-3));
    assert_value("(0-7)//2", Number::Integer(-4));
    assert_value("(0-7)%3", Number::Integer(2));
    assert_value("7%(0-3)", Number::Integer(-2));
    assert_value("5%1**(1.5-0.5)", Number::Integer(0));
}

#[test]
fn integer_operations_reject_reals() {
    assert_failure("5.5//2", ErrorKind::IntegerOperandRequired);
    assert_failure("5.5%2", ErrorKind::IntegerOperandRequired);
    assert_failure("5.0//2", ErrorKind::IntegerOperandRequired);
    assert_failure("5%2.0", ErrorKind::IntegerOperandRequired);
}

#[test]
fn division_by_zero_asymmetry() {
    assert_failure("10//0", ErrorKind::DivisionByZero);
    assert_failure("10%0", ErrorKind::DivisionByZero);

    let err = Calculator::default().solve("5/0").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ZeroDivisionFault);
    assert!(err.is_numeric_fault());

    let err = Calculator::default().solve("10//0").unwrap_err();
    assert!(!err.is_numeric_fault());
}

#[test]
fn leading_zeros_and_decimals() {
    assert_value("003+04", Number::Integer(7));
    assert_value("3.5+2.5", Number::Integer(6));
    assert_value(".5+3", Number::Real(3.5));
    assert_value("3+.5", Number::Real(3.5));
}

#[test]
fn all_operations_together() {
    assert_value("2+3*4-5/2**2+1%3//1", Number::Real(13.75));
}

#[test]
fn malformed_input() {
    assert_failure("2*&1", ErrorKind::InvalidSymbols);
    assert_failure("800plus7minus100123123+((((123)", ErrorKind::InvalidSymbols);
    assert_failure("(2+3", ErrorKind::UnbalancedParentheses);
    assert_failure("2+3)", ErrorKind::UnbalancedParentheses);
    assert_failure("3 4", ErrorKind::InvalidSpacing);
    assert_failure("3 . 4", ErrorKind::InvalidSpacing);
    assert_failure("2+*3", ErrorKind::InvalidOperatorSequence);
    assert_failure("", ErrorKind::InvalidExpression);
    assert_failure("()", ErrorKind::InvalidExpression);
    assert_failure("2+", ErrorKind::InsufficientOperands);
    assert_failure("-", ErrorKind::InsufficientOperands);
}

#[test]
fn consecutive_operators_warn_once() {
    let found = advisories("2++2");
    assert_eq!(found.len(), 1);
    assert!(matches!(found[0], Advisory::ConsecutiveOperators { position: 2 }));
    assert_value("2++2", Number::Integer(4));

    assert_eq!(advisories("1+-2--3").len(), 1);
    assert_eq!(advisories("2*(-3)").len(), 0);
}

#[test]
fn invalid_sequence_still_warns() {
    let mut found = Vec::new();
    let result = Calculator::default().solve_with("2*/3", &mut found);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidOperatorSequence);
    assert_eq!(found.len(), 1);
}

#[test]
fn large_results_warn_once() {
    let found = advisories("10**10000");
    assert_eq!(found.len(), 1);
    assert!(matches!(found[0], Advisory::LargeResult { .. }));

    assert_eq!(advisories("10**3000-300*10+100000000000000213012030").len(), 1);
    assert_eq!(advisories("10**20*10*10").len(), 1);
    assert!(advisories("2**52").is_empty());
}

#[test]
fn large_negative_results_do_not_warn() {
    assert!(advisories("-9007199254740990*4").is_empty());
    assert_value("-9007199254740990*4", Number::Integer(-36_028_797_018_963_960));
}

#[test]
fn overflowing_integers_fall_back_to_reals() {
    assert!(Calculator::default().solve("10**10000").is_ok());
    assert_value("9223372036854775807+1", Number::Real(9_223_372_036_854_775_808.0));
    assert_value("2**62*2", Number::Real(9_223_372_036_854_775_808.0));
}

#[test]
fn solving_twice_is_idempotent() {
    let calculator = Calculator::default();
    let mut sink = Vec::new();

    let first = calculator.solve_with("2++2*10**20", &mut sink).unwrap();
    assert_eq!(sink.len(), 2);
    let second = calculator.solve_with("2++2*10**20", &mut sink).unwrap();
    assert_eq!(sink.len(), 4);

    assert_eq!(first, second);
    assert_eq!(sink[..2], sink[2..]);
}

#[test]
fn rounding_precision() {
    let calculator = Calculator::new(3);
    assert_eq!(calculator.solve("1/3").unwrap(), Number::Real(0.333));
    assert_eq!(calculator.precision(), 3);

    assert_eq!(solve("2/3", 2).unwrap(), Number::Real(0.67));
    assert_eq!(solve("2/3", 0).unwrap(), Number::Real(1.0));
    assert_value("1/8", Number::Real(0.12));
}

#[test]
fn rounding_uses_the_stored_binary_value() {
    // Each literal is stored just below its written halfway point.
    assert_value("1.115", Number::Real(1.11));
    assert_value("2.675", Number::Real(2.67));
    assert_value("594.135", Number::Real(594.13));
    assert_value("0.125", Number::Real(0.12));
    assert_value("0.375", Number::Real(0.38));
    assert_eq!(solve("1.0005", 3).unwrap(), Number::Real(1.0));
}

#[test]
fn calculator_is_shareable_across_threads() {
    let calculator = Calculator::default();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|i| {
                                        let calculator = &calculator;
                                        s.spawn(move || calculator.solve(&format!("{i}*2")))
                                    })
                                    .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let expected = Number::Integer(i64::try_from(i).unwrap() * 2);
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}
