use rust_decimal::Decimal;

/// One parsed expense: the line exactly as it was typed (trimmed) and the
/// amount found at its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub(crate) raw_text: String,
    pub(crate) amount: Decimal,
}

// --

impl LineItem {
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
