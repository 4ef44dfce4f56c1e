use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

/// Format an amount with the currency symbol, '.' thousands separators and
/// a ',' decimal mark, always with two decimal places (`R$ 1.234,56`).
pub(crate) fn format_amount(amount: Decimal, currency_symbol: &str) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    let digits = abs.to_string();
    let (integer_digits, fractional_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let integer_part = abs
        .trunc()
        .to_u64()
        .map(|n| n.to_formatted_string(&Locale::pt))
        .unwrap_or_else(|| integer_digits.to_string());
    format!(
        "{} {}{},{}",
        currency_symbol, sign, integer_part, fractional_part
    )
}

/// Plain two-decimal representation for machine-readable outputs.
pub(crate) fn plain_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}
