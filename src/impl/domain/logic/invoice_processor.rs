use tracing::debug;

use crate::entities::{LineItem, ParsedItem};

use super::amount_parser::{AmountParser, ParsedLine};

/// Lines of one text block, split into expenses and rejected lines.
#[derive(Debug, Default)]
pub(crate) struct ProcessedBatch {
    pub(crate) items: Vec<LineItem>,
    pub(crate) parsed: Vec<ParsedItem>,
    pub(crate) invalid_lines: Vec<String>,
}

pub(crate) struct InvoiceProcessor<'a> {
    text: &'a str,
}

impl<'a> InvoiceProcessor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Best effort: blank lines are skipped, lines without an amount are
    /// collected in `invalid_lines`, nothing aborts the batch.
    pub(crate) fn process(self) -> ProcessedBatch {
        let batch = self
            .text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .fold(ProcessedBatch::default(), |mut batch, line| {
                match AmountParser::parse_line(line) {
                    ParsedLine::Item {
                        description,
                        amount,
                    } => {
                        batch.items.push(LineItem {
                            raw_text: line.to_string(),
                            amount,
                        });
                        batch.parsed.push(ParsedItem {
                            raw_line: line.to_string(),
                            description: description.to_string(),
                            amount,
                        });
                    }
                    ParsedLine::InvalidFormat(raw) => batch.invalid_lines.push(raw.to_string()),
                }
                batch
            });
        debug!(
            parsed = batch.items.len(),
            invalid = batch.invalid_lines.len(),
            "processed invoice text"
        );
        batch
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::InvoiceProcessor;

    #[test]
    fn splits_valid_and_invalid_lines() {
        let batch = InvoiceProcessor::new("Pizza 10,00\n\n   \nsem valor\n  Uber 5,50  \n").process();

        assert_eq!(batch.items.len(), 2);
        assert_eq!(batch.items[0].raw_text(), "Pizza 10,00");
        assert_eq!(batch.items[1].raw_text(), "Uber 5,50");
        assert_eq!(batch.items[1].amount(), Decimal::new(550, 2));
        assert_eq!(batch.parsed[1].description, "Uber");
        assert_eq!(batch.invalid_lines, vec!["sem valor".to_string()]);
    }

    #[test]
    fn windows_line_endings() {
        let batch = InvoiceProcessor::new("A 1,00\r\nB 2,00\r\n").process();
        assert_eq!(batch.items.len(), 2);
        assert!(batch.invalid_lines.is_empty());
    }

    #[test]
    fn empty_text_yields_empty_batch() {
        let batch = InvoiceProcessor::new("").process();
        assert!(batch.items.is_empty());
        assert!(batch.invalid_lines.is_empty());
    }
}
