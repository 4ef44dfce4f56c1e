use std::str::FromStr as _;

use chrono::{Local, NaiveDateTime};
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    config::ReportConfig,
    data::models::payment_amount_model::PaymentAmountModel,
    domain::usecases::persistence_usecase::{PersistenceUsecase as _, PersistenceUsecaseImpl},
    entities::Session,
    errors::WriteError,
    presentation::{payments_csv_printer::PaymentsCsvPrinter, report_printer::ReportPrinter},
};

pub type Report = String;

/// Entry point for a presentation layer: opens and saves ledger files and
/// renders a [`Session`]. Ledger operations themselves are methods on
/// `Session`.
pub struct InvoiceLedgerUtil {
    persistence_usecase: PersistenceUsecaseImpl,
    report_printer: ReportPrinter,
    payments_printer: PaymentsCsvPrinter,
}

impl InvoiceLedgerUtil {
    pub fn new() -> Self {
        Self::with_config(ReportConfig::default())
    }

    pub fn with_config(config: ReportConfig) -> Self {
        Self {
            persistence_usecase: PersistenceUsecaseImpl::new(),
            report_printer: ReportPrinter::new(config),
            payments_printer: PaymentsCsvPrinter::new(),
        }
    }

    // Persistence.
    // ---

    pub fn from_string(&self, document: &str) -> Result<Session, ServerError> {
        self.persistence_usecase.load_string(document)
    }

    /// Serializes the session, marking it as saved now.
    pub fn to_string(&self, session: &mut Session) -> Result<String, ServerError> {
        self.persistence_usecase
            .save_string(session, Local::now().naive_local())
    }

    pub async fn open_file<P>(&self, path: P) -> Result<Session, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.persistence_usecase.open_file(path).await
    }

    pub async fn save_file<P>(&self, session: &mut Session, path: P) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.persistence_usecase.save_file(path, session).await
    }

    // Payments.
    // ---

    /// Parses the text typed into the payment editor and sets it as the
    /// person's paid amount.
    pub fn set_paid_from_input(
        &self,
        session: &mut Session,
        name: &str,
        input: &str,
    ) -> Result<(), ServerError> {
        let amount = PaymentAmountModel::from_str(input)?;
        session.set_paid(name, amount.into())
    }

    pub fn payments_csv(&self, session: &Session) -> Result<String, ServerError> {
        self.payments_printer.print_payments(&session.payments())
    }

    // Reports.
    // ---

    pub fn print_summary(&self, session: &Session) -> Report {
        self.report_printer.print_summary(session)
    }

    pub fn print_report(&self, session: &Session, generated_at: NaiveDateTime) -> Report {
        self.report_printer.print_report(session, generated_at)
    }

    pub async fn export_report<P>(&self, session: &Session, path: P) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let report = self.print_report(session, Local::now().naive_local());
        tokio::fs::write(path.as_ref(), report)
            .await
            .map_err(|e| WriteError::with_debug(&e))?;
        info!(path = %path.as_ref().display(), "exported report");
        Ok(())
    }
}

impl Default for InvoiceLedgerUtil {
    fn default() -> Self {
        Self::new()
    }
}
