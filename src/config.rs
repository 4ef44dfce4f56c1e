/// Rendering options for the text and CSV outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Prefix for every formatted amount, e.g. `R$ 1.234,56`.
    pub currency_symbol: String,
    /// Width of the `=` and `-` rules in the exported report.
    pub rule_width: usize,
    /// Width of the rules in the on-screen summary.
    pub summary_rule_width: usize,
    /// Raw lines longer than this are wrapped in the exported report.
    pub wrap_width: usize,
    /// chrono format string for the report header.
    pub timestamp_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            rule_width: 50,
            summary_rule_width: 40,
            wrap_width: 74,
            timestamp_format: "%d/%m/%Y %H:%M:%S".to_string(),
        }
    }
}
