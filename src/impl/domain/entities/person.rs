use rust_decimal::Decimal;

use super::line_item::LineItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub(crate) name: String,
    pub(crate) items: Vec<LineItem>,
    pub(crate) paid: Decimal,
}

// --

impl Person {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            paid: Decimal::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn paid(&self) -> Decimal {
        self.paid
    }

    /// Always summed from the current items, never cached.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Negative when the person paid more than they owe.
    pub fn balance(&self) -> Decimal {
        self.total() - self.paid
    }
}
