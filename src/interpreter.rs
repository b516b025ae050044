/// The lexer module tokenizes expressions for the converter.
///
/// The lexer reads the raw expression and produces lexemes for numbers,
/// operators and parentheses, each with its location in the original text.
/// This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Normalizes `**` and `//` to single operator symbols.
/// - Tracks byte offsets back to the original expression.
/// - Reports unknown symbols and whitespace inside numeric literals.
pub mod lexer;
/// The converter module turns infix lexemes into reverse Polish notation.
///
/// # Responsibilities
/// - Applies operator precedence and associativity (shunting-yard).
/// - Distinguishes unary from binary `+` and `-`.
/// - Reports unbalanced parentheses and invalid operator sequences.
pub mod converter;
/// Operators, RPN items and the operator priority table.
pub mod rpn;
/// The evaluator module reduces an RPN sequence to a number.
///
/// # Responsibilities
/// - Applies every operator with type-sensitive arithmetic.
/// - Normalizes intermediate results and raises large-result advisories.
/// - Rounds fractional final results to the configured precision.
pub mod evaluator;
/// The value module defines the numeric type the evaluator works on.
pub mod value;
/// Non-fatal advisories and the sinks that receive them.
pub mod advisory;
