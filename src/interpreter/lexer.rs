use std::ops::Range;

use logos::Logos;

use crate::error::ParseError;

/// Represents the lexical class of a lexeme.
///
/// The lexer runs over the expression with all whitespace removed, so no
/// token for whitespace exists. Numeric literals are not parsed here; the
/// converter decides between integer and real from the lexeme text.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `42`.
    #[regex(r"[0-9]+\.[0-9]+")]
    #[regex(r"\.[0-9]+")]
    #[regex(r"[0-9]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `**` or `^`
    #[token("**")]
    #[token("^")]
    Power,
    /// `//` or `$`
    #[token("//")]
    #[token("$")]
    FloorDiv,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// The canonical single-character symbol of this token, or `None` for
    /// numbers.
    ///
    /// Two-character spellings collapse to one symbol: `**` becomes `^` and
    /// `//` becomes `$`.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Number => None,
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Power => Some('^'),
            Self::FloorDiv => Some('$'),
            Self::Percent => Some('%'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
        }
    }

    /// Whether this token is `(` or `)`.
    #[must_use]
    pub const fn is_paren(self) -> bool {
        matches!(self, Self::LParen | Self::RParen)
    }
}

/// A token together with its text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The lexical class.
    pub token: Token,
    /// The matched text, with any whitespace removed.
    pub text:  String,
    /// Byte range in the original expression.
    pub span:  Range<usize>,
}

impl Lexeme {
    /// Byte offset of the first character in the original expression.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }
}

/// The expression with whitespace removed, plus a map from every kept byte
/// back to its offset in the original string.
struct Compacted {
    text:    String,
    offsets: Vec<usize>,
}

impl Compacted {
    fn new(expression: &str) -> Self {
        let mut text = String::with_capacity(expression.len());
        let mut offsets = Vec::with_capacity(expression.len() + 1);

        for (i, c) in expression.char_indices() {
            if c.is_whitespace() {
                continue;
            }
            text.push(c);
            offsets.extend(i..i + c.len_utf8());
        }
        offsets.push(expression.len());

        Self { text, offsets }
    }

    /// Maps a byte range of the compacted text to the original expression.
    fn original_span(&self, span: &Range<usize>) -> Range<usize> {
        if span.is_empty() {
            let start = self.offsets[span.start];
            return start..start;
        }
        self.offsets[span.start]..self.offsets[span.end - 1] + 1
    }

    /// Whether the bytes of `span` were contiguous in the original expression.
    fn is_contiguous(&self, span: &Range<usize>) -> bool {
        let original = self.original_span(span);
        original.len() == span.len()
    }
}

/// Splits an expression into lexemes.
///
/// Whitespace is removed before lexing, so `3 .4` reads as `3.4`. `**` and `//`
/// are recognized only when their two characters are adjacent in the original
/// expression; `* *` yields two `*` lexemes.
///
/// # Errors
/// - `ParseError::InvalidSymbols` if some character is not part of any token.
/// - `ParseError::InvalidSpacing` if whitespace separates two numbers, or a
///   number on both sides of its decimal point (`3 4`, `3 . 4`).
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::{Token, tokenize};
///
/// let lexemes = tokenize("2 ** 3 // .5").unwrap();
/// let tokens: Vec<Token> = lexemes.iter().map(|l| l.token).collect();
/// assert_eq!(tokens,
///            [Token::Number, Token::Power, Token::Number, Token::FloorDiv, Token::Number]);
/// assert_eq!(lexemes[4].text, ".5");
/// assert_eq!(lexemes[4].span, 10..12);
///
/// assert!(tokenize("2*&1").is_err());
/// assert!(tokenize("3 4").is_err());
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Lexeme>, ParseError> {
    let compacted = Compacted::new(expression);
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer(&compacted.text);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = token else {
            return Err(ParseError::InvalidSymbols { symbol:   lexer.slice().to_string(),
                                                    position: compacted.offsets[span.start], });
        };

        let doubled = matches!(token, Token::Power | Token::FloorDiv) && span.len() == 2;
        if doubled && !compacted.is_contiguous(&span) {
            let single = if token == Token::Power { Token::Star } else { Token::Slash };
            for half in [span.start..span.start + 1, span.start + 1..span.end] {
                lexemes.push(Lexeme { token: single,
                                      text:  compacted.text[half.clone()].to_string(),
                                      span:  compacted.original_span(&half), });
            }
            continue;
        }

        lexemes.push(Lexeme { token,
                              text: lexer.slice().to_string(),
                              span: compacted.original_span(&span) });
    }

    check_spacing(expression)?;

    tracing::debug!(expression,
                    lexemes = ?lexemes.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
                    "tokenized");
    Ok(lexemes)
}

/// Rejects whitespace that was hiding inside a numeric literal.
///
/// Removing whitespace would otherwise glue `3 4` into `34`, so this scan runs
/// over the original expression and fails on a digit, whitespace, digit run,
/// or on a digit, whitespace, `.`, whitespace, digit run.
fn check_spacing(expression: &str) -> Result<(), ParseError> {
    let chars: Vec<(usize, char)> = expression.char_indices().collect();
    let skip_whitespace = |mut i: usize| {
        while i < chars.len() && chars[i].1.is_whitespace() {
            i += 1;
        }
        i
    };

    for (i, &(_, c)) in chars.iter().enumerate() {
        if !c.is_ascii_digit() {
            continue;
        }
        let gap = i + 1;
        let after_gap = skip_whitespace(gap);
        if after_gap == gap || after_gap >= chars.len() {
            continue;
        }

        let position = chars[gap].0;
        match chars[after_gap].1 {
            next if next.is_ascii_digit() => return Err(ParseError::InvalidSpacing { position }),
            '.' => {
                let second_gap = after_gap + 1;
                let after_dot = skip_whitespace(second_gap);
                if after_dot > second_gap
                   && after_dot < chars.len()
                   && chars[after_dot].1.is_ascii_digit()
                {
                    return Err(ParseError::InvalidSpacing { position });
                }
            },
            _ => {},
        }
    }

    Ok(())
}
