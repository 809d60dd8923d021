use log::{debug, trace};

use crate::operator::{PrecedenceTable, Rank};
use crate::tokenizer::{Token, Tokens, UnknownPolicy};
use super::Error;

#[derive(Debug, Default)]
#[derive(Clone, Copy)]
pub struct Options {
    pub unknown: UnknownPolicy,
}

#[derive(Debug, PartialEq)]
#[derive(Clone, Copy)]
struct StackEntry {
    rank: Rank,
    symbol: char,
}

/// Postfix output with a fixed character budget.
///
/// Every input character produces at most one output character, so a budget of
/// `input length + 1` is never reached. `push` still checks it.
#[derive(Debug)]
struct OutputBuffer {
    text: String,
    len: usize,
    capacity: usize,
}

impl OutputBuffer {
    fn for_input(input: &str) -> OutputBuffer {
        OutputBuffer {
            text: String::with_capacity(input.len()),
            len: 0,
            capacity: input.chars().count() + 1,
        }
    }

    fn push(&mut self, symbol: char) -> Result<(), Error> {
        // one slot stays reserved, as for a terminator
        if self.len + 1 >= self.capacity {
            return Err(Error::CapacityExceeded { capacity: self.capacity });
        }
        self.text.push(symbol);
        self.len += 1;
        Ok(())
    }

    fn into_string(self) -> String {
        self.text
    }
}

/// Single-pass infix to postfix conversion over a [`PrecedenceTable`].
///
/// The input must already be free of spaces; see [`strip_spaces`](crate::strip_spaces).
/// Operands are copied as they come. An operator first pops every stacked operator
/// whose rank is numerically less than or equal to its own, then is pushed itself.
/// Whatever is left on the stack is flushed at the end, last pushed first.
///
/// The shape of the expression is never checked: `"a+"` or `"++"` convert fine.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'t> {
    table: &'t PrecedenceTable,
    options: Options,
}

impl<'t> Converter<'t> {
    pub fn new(table: &'t PrecedenceTable) -> Converter<'t> {
        Converter::with_options(table, Options::default())
    }

    pub fn with_options(table: &'t PrecedenceTable, options: Options) -> Converter<'t> {
        Converter { table, options }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn convert(&self, input: &str) -> Result<String, Error> {
        let mut output = OutputBuffer::for_input(input);
        let mut stack: Vec<StackEntry> = Vec::new();

        for token in Tokens::new(input, self.table, self.options.unknown) {
            match token? {
                Token::Operator { at: _, symbol, rank } => {
                    trace!("{} -> {}", symbol, rank);
                    while let Some(top) = stack.last().copied() {
                        if top.rank > rank {
                            break;
                        }
                        trace!("{} >= {} -> {} -> {}", rank, top.rank, top.symbol, output.len);
                        output.push(top.symbol)?;
                        stack.pop();
                    }
                    stack.push(StackEntry { rank, symbol });
                }
                Token::Operand { at: _, symbol } => {
                    trace!("{} -> not an operator", symbol);
                    output.push(symbol)?;
                }
            }
            trace!("buffer: `{}` ({})", output.text, output.len);
        }

        while let Some(entry) = stack.pop() {
            output.push(entry.symbol)?;
        }

        let postfix = output.into_string();
        debug!("{} -> {}", input, postfix);
        Ok(postfix)
    }
}

#[cfg(test)]
mod convert_should {
    use super::*;
    use matches::assert_matches;

    const TABLE: PrecedenceTable = PrecedenceTable::standard();

    fn convert(input: &str) -> String {
        Converter::new(&TABLE).convert(input).unwrap()
    }

    fn operands(text: &str) -> String {
        text.chars().filter(|c| !TABLE.is_operator(*c)).collect()
    }

    #[test]
    fn handle_end_to_end_scenarios() {
        let cases = [
            ("a+b*c-d/e", "abc*+de/-"),
            ("a-b-c", "ab-c-"),
            ("a*b+c*d", "ab*cd*+"),
            ("a", "a"),
            ("", ""),
        ];
        for (input, expected) in cases.iter() {
            assert_eq!(convert(input), *expected, "input: {}", input);
        }
    }

    #[test]
    fn emit_tighter_operator_first() {
        assert_eq!(convert("a+b*c"), "abc*+");
        assert_eq!(convert("a*b+c"), "ab*c+");
        assert_eq!(convert("a|b^c&d"), "abcd&^|");
        assert_eq!(convert("a&b|c"), "ab&c|");
    }

    #[test]
    fn resolve_equal_ranks_left_to_right() {
        assert_eq!(convert("a-b-c"), "ab-c-");
        assert_eq!(convert("a/b*c%d"), "ab/c*d%");
        assert_eq!(convert("a+b-c+d"), "ab+c-d+");
        assert_eq!(convert("a^b^c"), "ab^c^");
    }

    #[test]
    fn preserve_length() {
        for input in ["a+b*c-d/e", "a|b&c^d", "++", "a+", "(a+b)", "x%y%z"].iter() {
            assert_eq!(convert(input).chars().count(), input.chars().count(), "input: {}", input);
        }
    }

    #[test]
    fn preserve_operand_order() {
        for input in ["a+b*c-d/e", "q*w|e&r^t-y", "1+23*4"].iter() {
            assert_eq!(operands(&convert(input)), operands(input), "input: {}", input);
        }
    }

    #[test]
    fn accept_malformed_expressions() {
        assert_eq!(convert("++"), "++");
        assert_eq!(convert("a+"), "a+");
        assert_eq!(convert("*a"), "a*");
        assert_eq!(convert("+*"), "*+");
    }

    #[test]
    fn pass_unknown_characters_through() {
        assert_eq!(convert("(a+b)*c"), "(ab)c*+");
        assert_eq!(convert("12+3"), "123+");
    }

    #[test]
    fn reject_unknown_characters_on_request() {
        let options = Options { unknown: UnknownPolicy::Reject };
        let converter = Converter::with_options(&TABLE, options);
        assert_matches!(
            converter.convert("a+(b)"),
            Err(Error::ReservedCharacter { symbol: '(', at: 2 })
        );
        assert_eq!(converter.convert("a_1+b").unwrap(), "a_1b+");
    }

    #[test]
    fn default_to_operand_policy() {
        assert_eq!(Converter::new(&TABLE).options().unknown, UnknownPolicy::Operand);
    }

    #[test]
    fn handle_multibyte_operands() {
        assert_eq!(convert("é*ü+ß"), "éü*ß+");
    }

    #[test]
    fn guard_output_capacity() {
        let mut output = OutputBuffer::for_input("ab");
        output.push('a').unwrap();
        output.push('b').unwrap();
        assert_matches!(output.push('c'), Err(Error::CapacityExceeded { capacity: 3 }));
        assert_eq!(output.into_string(), "ab");
    }
}
