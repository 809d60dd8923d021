/// Binding rank of an operator. A lower rank binds tighter.
pub type Rank = u8;

#[derive(Debug, PartialEq)]
#[derive(Clone, Copy)]
pub struct Operator {
    pub symbol: char,
    pub rank: Rank,
}

impl Operator {
    const fn new(symbol: char, rank: Rank) -> Operator {
        Operator { symbol, rank }
    }
}

// C++ precedence groups; every entry is left-associative
const STANDARD: [Operator; 8] = [
    Operator::new('*', 5),
    Operator::new('/', 5),
    Operator::new('%', 5),
    Operator::new('+', 6),
    Operator::new('-', 6),
    Operator::new('&', 10),
    Operator::new('^', 11),
    Operator::new('|', 12),
];

/// Read-only mapping from operator characters to their rank.
///
/// Build it once and hand it to every [`Converter`](crate::Converter) by reference;
/// it is `Copy` and holds no interior state, so sharing it across threads needs no
/// synchronization.
#[derive(Debug, Clone, Copy)]
pub struct PrecedenceTable {
    operators: &'static [Operator],
}

impl PrecedenceTable {
    pub const fn new(operators: &'static [Operator]) -> PrecedenceTable {
        PrecedenceTable { operators }
    }

    /// Multiplicative, additive and the three bitwise groups.
    pub const fn standard() -> PrecedenceTable {
        PrecedenceTable::new(&STANDARD)
    }

    pub fn operator(&self, symbol: char) -> Option<Operator> {
        self.operators.iter().find(|op| op.symbol == symbol).copied()
    }

    /// `None` for anything outside the table, parentheses included.
    pub fn rank_of(&self, symbol: char) -> Option<Rank> {
        self.operator(symbol).map(|op| op.rank)
    }

    pub fn is_operator(&self, symbol: char) -> bool {
        self.operator(symbol).is_some()
    }

    pub fn operators(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter()
    }

    /// True when no symbol is listed twice, i.e. the ranks partition the operator set.
    pub fn is_partition(&self) -> bool {
        self.operators.iter().enumerate().all(|(ix, op)| {
            self.operators[ix + 1..].iter().all(|other| other.symbol != op.symbol)
        })
    }
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        PrecedenceTable::standard()
    }
}
