use crate::{
    error::ParseError,
    interpreter::{
        advisory::{Advisory, AdvisorySink},
        lexer::{Lexeme, Token},
        rpn::{format_rpn, Operator, PriorityTable, RpnItem},
        value::Number,
    },
};

/// Converts infix lexemes to reverse Polish notation.
///
/// Holds only the priority table, so one converter can serve any number of
/// conversions, concurrently or not.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    priorities: PriorityTable,
}

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Open { position: usize },
    Operator(Operator),
}

impl Converter {
    /// Creates a converter that resolves precedence with `priorities`.
    #[must_use]
    pub const fn new(priorities: PriorityTable) -> Self {
        Self { priorities }
    }

    /// The table this converter consults.
    #[must_use]
    pub const fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }

    /// Runs the shunting-yard algorithm over `lexemes`.
    ///
    /// A `-` or `+` that starts the expression, or follows `(` or another
    /// operator, becomes unary minus (`~`) or unary plus (`@`). `^` is right
    /// associative; every other binary operator is left associative.
    ///
    /// The first pair of adjacent operators raises one
    /// `Advisory::ConsecutiveOperators`. If the second operator of that pair is
    /// not `+` or `-` the conversion fails. Pairs involving a parenthesis are
    /// never reported.
    ///
    /// # Errors
    /// - `ParseError::InvalidOperatorSequence` for a pair such as `2+*3`.
    /// - `ParseError::UnbalancedParentheses` for an unmatched `(` or `)`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{
    ///     converter::Converter,
    ///     lexer::tokenize,
    ///     rpn::format_rpn,
    /// };
    ///
    /// let converter = Converter::default();
    /// let mut advisories = Vec::new();
    ///
    /// let rpn = converter.to_rpn(&tokenize("2^3^2").unwrap(), &mut advisories).unwrap();
    /// assert_eq!(format_rpn(&rpn), "2 3 2 ^ ^");
    ///
    /// let rpn = converter.to_rpn(&tokenize("3--2").unwrap(), &mut advisories).unwrap();
    /// assert_eq!(format_rpn(&rpn), "3 2 ~ -");
    /// assert_eq!(advisories.len(), 1);
    /// ```
    pub fn to_rpn(&self,
                  lexemes: &[Lexeme],
                  sink: &mut impl AdvisorySink)
                  -> Result<Vec<RpnItem>, ParseError> {
        let mut stack: Vec<Pending> = Vec::new();
        let mut output: Vec<RpnItem> = Vec::with_capacity(lexemes.len());
        let mut warned = false;
        let mut previous: Option<&Lexeme> = None;

        for lexeme in lexemes {
            let position = lexeme.position();

            if let Some(prev) = previous
               && !warned
               && self.is_operator(prev)
               && self.is_operator(lexeme)
            {
                sink.advise(Advisory::ConsecutiveOperators { position });
                warned = true;
                if !matches!(lexeme.token, Token::Plus | Token::Minus) {
                    return Err(ParseError::InvalidOperatorSequence { operator: symbol_of(lexeme),
                                                                     position });
                }
            }
            let unary_position = previous.is_none_or(|prev| self.is_key(prev));
            previous = Some(lexeme);

            match lexeme.token {
                Token::Number => output.push(parse_literal(lexeme)?.into()),
                Token::LParen => stack.push(Pending::Open { position }),
                Token::RParen => loop {
                    match stack.pop() {
                        Some(Pending::Open { .. }) => break,
                        Some(Pending::Operator(op)) => output.push(op.into()),
                        None => return Err(ParseError::UnbalancedParentheses { position }),
                    }
                },
                token => {
                    let operator = match token {
                        Token::Minus if unary_position => Operator::Neg,
                        Token::Plus if unary_position => Operator::Pos,
                        _ => Operator::binary_from_symbol(symbol_of(lexeme))
                                 .ok_or_else(|| invalid_symbol(lexeme))?,
                    };

                    while let Some(&Pending::Operator(top)) = stack.last()
                          && self.should_pop(operator, top)
                    {
                        stack.pop();
                        output.push(top.into());
                    }
                    stack.push(Pending::Operator(operator));
                },
            }
        }

        while let Some(entry) = stack.pop() {
            match entry {
                Pending::Open { position } => {
                    return Err(ParseError::UnbalancedParentheses { position });
                },
                Pending::Operator(op) => output.push(op.into()),
            }
        }

        tracing::debug!(rpn = %format_rpn(&output), "converted to rpn");
        Ok(output)
    }

    /// Whether the lexeme's symbol is a key of the priority table.
    fn is_key(&self, lexeme: &Lexeme) -> bool {
        lexeme.token.symbol().is_some_and(|s| self.priorities.contains(s))
    }

    /// A priority table key that is not a parenthesis.
    fn is_operator(&self, lexeme: &Lexeme) -> bool {
        self.is_key(lexeme) && !lexeme.token.is_paren()
    }

    fn level(&self, symbol: char) -> u8 {
        self.priorities.level(symbol).unwrap_or(0)
    }

    /// Decides whether `top` leaves the stack before `incoming` is pushed.
    ///
    /// An open parenthesis is never popped here; only `)` removes it.
    fn should_pop(&self, incoming: Operator, top: Operator) -> bool {
        let top_level = self.level(top.symbol());
        let incoming_level = self.level(incoming.symbol());

        if incoming == Operator::Pow {
            top_level > incoming_level
        } else {
            top_level >= incoming_level
        }
    }
}

fn symbol_of(lexeme: &Lexeme) -> char {
    lexeme.token.symbol().unwrap_or_default()
}

fn invalid_symbol(lexeme: &Lexeme) -> ParseError {
    ParseError::InvalidSymbols { symbol:   lexeme.text.clone(),
                                 position: lexeme.position(), }
}

/// Parses a numeric lexeme: real if it contains a decimal point, otherwise
/// integer.
///
/// Integer literals too large for `i64` become reals.
fn parse_literal(lexeme: &Lexeme) -> Result<Number, ParseError> {
    let text = lexeme.text.as_str();
    if !text.contains('.')
       && let Ok(i) = text.parse::<i64>()
    {
        return Ok(Number::Integer(i));
    }

    text.parse::<f64>().map(Number::Real).map_err(|_| invalid_symbol(lexeme))
}
