use std::collections::HashMap;

use crate::interpreter::value::Number;

/// An operator in an RPN sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, true division.
    Div,
    /// `^`, exponentiation. Written `**` or `^`.
    Pow,
    /// `$`, floor division. Written `//` or `$`.
    FloorDiv,
    /// `%`
    Mod,
    /// `~`, unary minus.
    Neg,
    /// `@`, unary plus.
    Pos,
}

impl Operator {
    /// The internal symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
            Self::FloorDiv => '$',
            Self::Mod => '%',
            Self::Neg => '~',
            Self::Pos => '@',
        }
    }

    /// Looks up a binary operator by its internal symbol.
    ///
    /// Unary operators have no spelling in raw input, so `~` and `@` are not
    /// accepted here.
    #[must_use]
    pub const fn binary_from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            '$' => Some(Self::FloorDiv),
            '%' => Some(Self::Mod),
            _ => None,
        }
    }

    /// Whether the operator takes a single operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Neg | Self::Pos)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One entry of an RPN sequence: a literal or an operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RpnItem {
    /// A literal value.
    Number(Number),
    /// An operator applied to the values before it.
    Operator(Operator),
}

impl From<Number> for RpnItem {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<Operator> for RpnItem {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl std::fmt::Display for RpnItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Formats an RPN sequence as space separated symbols, e.g. `3 2 ~ -`.
#[must_use]
pub fn format_rpn(rpn: &[RpnItem]) -> String {
    rpn.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Maps operator symbols to precedence levels.
///
/// The keys are `(` and every operator symbol; `)` is absent, so
/// a `-` after `)` stays binary. The table is never modified after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    levels: HashMap<char, u8>,
}

impl Default for PriorityTable {
    /// The standard table: `(` 0, `+ -` 1, `* / $ %` 2, `^` 3, `~ @` 4.
    fn default() -> Self {
        Self::new([('(', 0),
                   ('+', 1),
                   ('-', 1),
                   ('*', 2),
                   ('/', 2),
                   ('$', 2),
                   ('%', 2),
                   ('^', 3),
                   ('~', 4),
                   ('@', 4)])
    }
}

impl PriorityTable {
    /// Builds a table from `(symbol, level)` pairs.
    ///
    /// ## Example
    /// ```
    /// use rpncalc::interpreter::rpn::PriorityTable;
    ///
    /// let table = PriorityTable::default();
    /// assert_eq!(table.level('^'), Some(3));
    /// assert!(table.contains('('));
    /// assert!(!table.contains(')'));
    /// ```
    pub fn new(levels: impl IntoIterator<Item = (char, u8)>) -> Self {
        Self { levels: levels.into_iter().collect() }
    }

    /// Whether `symbol` is a key of the table.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.levels.contains_key(&symbol)
    }

    /// The precedence level of `symbol`, if it is a key.
    #[must_use]
    pub fn level(&self, symbol: char) -> Option<u8> {
        self.levels.get(&symbol).copied()
    }
}
