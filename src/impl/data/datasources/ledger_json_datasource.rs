use async_trait::async_trait;
use fractic_server_error::{CriticalError, ServerError};
use tracing::info;

use crate::{
    data::models::ledger_document_model::LedgerDocumentModel,
    errors::{CorruptDocument, ReadError, WriteError},
};

#[async_trait]
pub(crate) trait LedgerJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<LedgerDocumentModel, ServerError>;

    fn to_string(&self, document: &LedgerDocumentModel) -> Result<String, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<LedgerDocumentModel, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    async fn to_file<P>(&self, path: P, document: &LedgerDocumentModel) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LedgerJsonDatasourceImpl;

impl LedgerJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LedgerJsonDatasource for LedgerJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<LedgerDocumentModel, ServerError> {
        serde_json::from_str(s).map_err(|e| CorruptDocument::with_debug("malformed JSON", &e))
    }

    fn to_string(&self, document: &LedgerDocumentModel) -> Result<String, ServerError> {
        serde_json::to_string_pretty(document)
            .map_err(|e| CriticalError::with_debug("failed to serialize ledger document", &e))
    }

    async fn from_file<P>(&self, path: P) -> Result<LedgerDocumentModel, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let content = tokio::fs::read_to_string(path.as_ref())
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        info!(path = %path.as_ref().display(), bytes = content.len(), "read ledger file");
        self.from_string(&content)
    }

    async fn to_file<P>(&self, path: P, document: &LedgerDocumentModel) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let content = self.to_string(document)?;
        tokio::fs::write(path.as_ref(), &content)
            .await
            .map_err(|e| WriteError::with_debug(&e))?;
        info!(path = %path.as_ref().display(), bytes = content.len(), "wrote ledger file");
        Ok(())
    }
}
