use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRow {
    pub name: String,
    pub total: Decimal,
    pub paid: Decimal,
    pub balance: Decimal,
}
