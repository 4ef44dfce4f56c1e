use chrono::NaiveDateTime;

use crate::{config::ReportConfig, entities::Session};

use super::utils::format_amount;

pub(crate) struct ReportPrinter {
    config: ReportConfig,
}

impl ReportPrinter {
    pub(crate) fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Plain-text export: header, one block per person (raw lines and the
    /// person's total) in roster order, then the grand total. Write only,
    /// never parsed back.
    pub(crate) fn print_report(&self, session: &Session, generated_at: NaiveDateTime) -> String {
        let mut report_output = String::new();
        let heavy_rule = "=".repeat(self.config.rule_width);
        let light_rule = "-".repeat(self.config.rule_width);

        report_output.push_str("RELATÓRIO DE DESPESAS\n");
        report_output.push_str(&format!("{}\n", heavy_rule));
        report_output.push_str(&format!(
            "Data: {}\n\n",
            generated_at.format(&self.config.timestamp_format)
        ));

        for person in session.people_in_order() {
            report_output.push_str(&format!("Despesas de {}:\n", person.name()));
            report_output.push_str(&format!("{}\n", light_rule));
            for item in person.items() {
                self.print_raw_line(&mut report_output, item.raw_text());
            }
            report_output.push_str(&format!("{}\n", light_rule));
            report_output.push_str(&format!(
                "TOTAL: {}\n\n",
                self.format_amount(person.total())
            ));
        }

        report_output.push_str(&format!("{}\n", heavy_rule));
        report_output.push_str(&format!(
            "TOTAL GERAL: {}\n",
            self.format_amount(session.grand_total())
        ));

        report_output
    }

    /// Short per-person summary for the results pane.
    pub(crate) fn print_summary(&self, session: &Session) -> String {
        if session.ledger().is_empty() {
            return "Sem resultados.".to_string();
        }
        let rule = "-".repeat(self.config.summary_rule_width);

        let mut summary_output = String::new();
        summary_output.push_str("Resumo por pessoa:\n");
        summary_output.push_str(&format!("{}\n", rule));
        for person in session.people_in_order() {
            summary_output.push_str(&format!(
                "{}: {}\n",
                person.name(),
                self.format_amount(person.total())
            ));
        }
        summary_output.push_str(&format!("{}\n", rule));
        summary_output.push_str(&format!(
            "TOTAL GERAL: {}",
            self.format_amount(session.grand_total())
        ));
        summary_output
    }

    fn print_raw_line(&self, report_output: &mut String, raw_line: &str) {
        let options = textwrap::Options::new(self.config.wrap_width)
            .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
            .subsequent_indent("    ");
        for line in textwrap::wrap(raw_line, options) {
            report_output.push_str(&format!("{}\n", line));
        }
    }

    fn format_amount(&self, amount: rust_decimal::Decimal) -> String {
        format_amount(amount, &self.config.currency_symbol)
    }
}
