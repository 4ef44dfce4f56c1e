use fractic_server_error::{CriticalError, ServerError};

use crate::entities::PaymentRow;

use super::utils::plain_amount;

pub(crate) struct PaymentsCsvPrinter;

impl PaymentsCsvPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// One row per person: invoice total, amount paid and what is still
    /// owed.
    pub(crate) fn print_payments(&self, rows: &[PaymentRow]) -> Result<String, ServerError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["pessoa", "fatura", "pago", "falta"])
            .map_err(|e| CriticalError::with_debug("failed to write CSV header", &e))?;
        for row in rows {
            writer
                .write_record([
                    row.name.clone(),
                    plain_amount(row.total),
                    plain_amount(row.paid),
                    plain_amount(row.balance),
                ])
                .map_err(|e| CriticalError::with_debug("failed to write CSV row", &e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CriticalError::with_debug("failed to flush CSV", e.error()))?;
        String::from_utf8(bytes)
            .map_err(|e| CriticalError::with_debug("CSV output is not UTF-8", &e))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::PaymentsCsvPrinter;
    use crate::entities::PaymentRow;

    #[test]
    fn prints_header_and_rows() {
        let rows = vec![
            PaymentRow {
                name: "Ana".to_string(),
                total: Decimal::new(1250, 2),
                paid: Decimal::new(5, 0),
                balance: Decimal::new(750, 2),
            },
            PaymentRow {
                name: "Silva, Bia".to_string(),
                total: Decimal::ZERO,
                paid: Decimal::new(100, 2),
                balance: Decimal::new(-100, 2),
            },
        ];
        let csv = PaymentsCsvPrinter::new().print_payments(&rows).unwrap();
        assert_eq!(
            csv,
            "pessoa,fatura,pago,falta\nAna,12.50,5.00,7.50\n\"Silva, Bia\",0.00,1.00,-1.00\n"
        );
    }

    #[test]
    fn empty_table_has_header_only() {
        let csv = PaymentsCsvPrinter::new().print_payments(&[]).unwrap();
        assert_eq!(csv, "pessoa,fatura,pago,falta\n");
    }
}
