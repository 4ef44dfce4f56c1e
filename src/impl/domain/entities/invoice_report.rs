use rust_decimal::Decimal;

/// A line that produced an expense during batch processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItem {
    pub raw_line: String,
    pub description: String,
    pub amount: Decimal,
}

/// Outcome of processing one invoice text block for one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceReport {
    pub person: String,
    /// True if the person did not exist before this call.
    pub created: bool,
    pub items: Vec<ParsedItem>,
    /// Lines with no trailing amount. These are not stored.
    pub invalid_lines: Vec<String>,
    pub person_total: Decimal,
    pub grand_total: Decimal,
}
