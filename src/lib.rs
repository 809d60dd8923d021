//! Infix to postfix (reverse Polish) conversion for single-character operands.
//!
//! ```
//! assert_eq!(postfix::to_postfix("a + b * c - d / e").unwrap(), "abc*+de/-");
//! ```

#[cfg(test)]
#[macro_use]
extern crate matches;

mod tokenizer;
mod converter;
mod operator;

pub use converter::{Converter, Options};
pub use operator::{Operator, PrecedenceTable, Rank};
pub use tokenizer::{remove_char, strip_spaces, Token, Tokens, UnknownPolicy};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("found reserved character {symbol:?} at {at}")]
    ReservedCharacter { symbol: char, at: u32 },

    #[error("output exceeds its capacity of {capacity} characters")]
    CapacityExceeded { capacity: usize },
}

/// Strips spaces and converts with the standard table, treating every
/// non-operator character as an operand.
pub fn to_postfix(expression: &str) -> Result<String, Error> {
    convert(expression, Options::default())
}

/// Like [`to_postfix`] but rejects punctuation the table does not know, such as parentheses.
pub fn to_postfix_strict(expression: &str) -> Result<String, Error> {
    convert(expression, Options { unknown: UnknownPolicy::Reject })
}

fn convert(expression: &str, options: Options) -> Result<String, Error> {
    let table = PrecedenceTable::standard();
    let cleaned = strip_spaces(expression);
    Converter::with_options(&table, options).convert(&cleaned)
}
