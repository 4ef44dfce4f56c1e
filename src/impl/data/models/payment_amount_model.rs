use std::str::FromStr;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{domain::logic::amount_parser::AmountParser, errors::InvalidPaymentAmount};

/// Amount typed into the payment editor. Accepts an optional currency
/// prefix, and either a comma decimal mark with '.' grouping (`1.234,56`)
/// or a plain point decimal (`1234.56`).
#[derive(Debug)]
pub(crate) struct PaymentAmountModel(pub Decimal);
impl FromStr for PaymentAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let numeric_part = raw.strip_prefix("R$").unwrap_or(raw).trim();
        let normalized = if numeric_part.contains(',') {
            numeric_part.replace('.', "").replace(',', ".")
        } else {
            numeric_part.to_string()
        };
        if normalized.is_empty()
            || !normalized
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.')
        {
            return Err(InvalidPaymentAmount::new(s));
        }
        let amount =
            Decimal::from_str(&normalized).map_err(|e| InvalidPaymentAmount::with_debug(s, &e))?;
        if amount.scale() > 2 || amount > AmountParser::max_amount() {
            return Err(InvalidPaymentAmount::new(s));
        }
        Ok(PaymentAmountModel(amount))
    }
}

impl Into<Decimal> for PaymentAmountModel {
    fn into(self) -> Decimal {
        self.0
    }
}
