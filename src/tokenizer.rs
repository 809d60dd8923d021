use super::{Error, operator::{PrecedenceTable, Rank}};

/// Removes every occurrence of `ch`, keeping the rest in order.
pub fn remove_char(input: &str, ch: char) -> String {
    input.chars().filter(|c| *c != ch).collect()
}

pub fn strip_spaces(input: &str) -> String {
    remove_char(input, ' ')
}

/// What to do with a character the precedence table does not know.
#[derive(Debug, PartialEq, Eq)]
#[derive(Clone, Copy)]
pub enum UnknownPolicy {
    /// Anything that is not an operator is an operand, `(` and `!` included.
    Operand,
    /// ASCII punctuation outside the table is an error; letters, digits, `_`
    /// and non-ASCII characters are still operands.
    Reject,
}

impl Default for UnknownPolicy {
    fn default() -> Self {
        UnknownPolicy::Operand
    }
}

#[derive(Debug, PartialEq)]
#[derive(Clone, Copy)]
pub enum Token {
    Operand { at: u32, symbol: char },
    Operator { at: u32, symbol: char, rank: Rank },
}

impl Token {
    pub fn symbol(&self) -> char {
        match *self {
            Token::Operand { symbol, .. } | Token::Operator { symbol, .. } => symbol,
        }
    }
}

pub struct Tokens<'a> {
    chars: std::str::Chars<'a>,
    byte_ix: u32,
    table: &'a PrecedenceTable,
    policy: UnknownPolicy,
}

impl<'a> Tokens<'a> {

    pub fn new(val: &'a str, table: &'a PrecedenceTable, policy: UnknownPolicy) -> Tokens<'a> {
        Tokens {
            chars: val.chars(),
            byte_ix: 0,
            table,
            policy,
        }
    }

    fn next_char(&mut self) -> Option<(u32, char)> {
        let ch = self.chars.next()?;
        let prev_ix = self.byte_ix;
        self.byte_ix += ch.len_utf8() as u32;
        Some((prev_ix, ch))
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let (at, symbol) = self.next_char()?;
        if let Some(rank) = self.table.rank_of(symbol) {
            return Some(Ok(Token::Operator { at, symbol, rank }));
        }
        if self.policy == UnknownPolicy::Reject && symbol.is_ascii_punctuation() && symbol != '_' {
            return Some(Err(Error::ReservedCharacter { symbol, at }));
        }
        Some(Ok(Token::Operand { at, symbol }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}
