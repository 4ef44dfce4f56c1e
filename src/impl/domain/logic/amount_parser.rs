use std::str::FromStr as _;

use rust_decimal::Decimal;

/// Result of matching a single line against the trailing-amount grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    Item {
        /// Text before the amount, without the whitespace separating them.
        description: &'a str,
        amount: Decimal,
    },
    /// No amount at the end of the line. Carries the line as given.
    InvalidFormat(&'a str),
}

/// Finds a monetary literal anchored at the end of a line.
///
/// The literal is a run of digits and '.' grouping separators, a ',' decimal
/// mark and exactly two digits (`12,50`, `1.234,56`). Only trailing whitespace
/// may follow it. The run is extended as far left as possible, so for
/// `Mesa 3.10,00` the amount is `310.00` and the description `Mesa`.
///
/// The same grammar is used for batch ingestion and for manual edits.
/// Literals with more than [`AmountParser::MAX_INTEGER_DIGITS`] significant
/// integer digits are rejected.
pub struct AmountParser;

impl AmountParser {
    /// Amounts stay below 10^13: sums cannot overflow `Decimal` and every
    /// amount survives an `f64` round trip at two decimals.
    pub const MAX_INTEGER_DIGITS: usize = 13;

    /// Largest amount a line, a payment or a stored document may carry:
    /// `9.999.999.999.999,99`.
    pub fn max_amount() -> Decimal {
        Decimal::new(999_999_999_999_999, 2)
    }

    pub fn parse_line(line: &str) -> ParsedLine<'_> {
        let line = line.trim();
        match Self::split_trailing_amount(line) {
            Some((description, amount)) => ParsedLine::Item {
                description,
                amount,
            },
            None => ParsedLine::InvalidFormat(line),
        }
    }

    /// Converts a literal such as `1.234,56` to a decimal. Returns `None` if
    /// the text is not exactly one literal.
    pub fn literal_value(literal: &str) -> Option<Decimal> {
        match Self::split_trailing_amount(literal.trim()) {
            Some(("", amount)) => Some(amount),
            _ => None,
        }
    }

    fn split_trailing_amount(line: &str) -> Option<(&str, Decimal)> {
        let bytes = line.trim_end().as_bytes();
        let len = bytes.len();
        if len < 4 {
            return None;
        }

        // ",DD" at the very end.
        let comma = len - 3;
        if bytes[comma] != b',' || !bytes[comma + 1..].iter().all(u8::is_ascii_digit) {
            return None;
        }

        // Longest run of digits and grouping separators before the comma.
        let start = bytes[..comma]
            .iter()
            .rposition(|b| !(b.is_ascii_digit() || *b == b'.'))
            .map_or(0, |i| i + 1);
        let integer_part: String = bytes[start..comma]
            .iter()
            .filter(|b| b.is_ascii_digit())
            .map(|b| *b as char)
            .collect();
        if integer_part.is_empty() {
            // Empty run, or separators only (e.g. "..,50").
            return None;
        }
        if integer_part.trim_start_matches('0').len() > Self::MAX_INTEGER_DIGITS {
            return None;
        }

        let normalized = format!("{}.{}", integer_part, &line[comma + 1..len]);
        let amount = Decimal::from_str(&normalized).ok()?;

        // Every byte in start..len is ASCII, so `start` is a char boundary.
        Some((line[..start].trim_end(), amount))
    }
}
