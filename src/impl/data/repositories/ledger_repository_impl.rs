use async_trait::async_trait;
use chrono::NaiveDateTime;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::ledger_json_datasource::{LedgerJsonDatasource, LedgerJsonDatasourceImpl},
        models::ledger_document_model::LedgerDocumentModel,
    },
    domain::repositories::ledger_repository::LedgerRepository,
    entities::Session,
};

pub(crate) struct LedgerRepositoryImpl<DS = LedgerJsonDatasourceImpl>
where
    DS: LedgerJsonDatasource,
{
    datasource: DS,
}

#[async_trait]
impl<DS> LedgerRepository for LedgerRepositoryImpl<DS>
where
    DS: LedgerJsonDatasource,
{
    fn from_string(&self, document: &str) -> Result<Session, ServerError> {
        self.datasource.from_string(document)?.into_session()
    }

    fn to_string(
        &self,
        session: &Session,
        saved_at: NaiveDateTime,
    ) -> Result<String, ServerError> {
        self.datasource
            .to_string(&LedgerDocumentModel::from_session(session, saved_at))
    }

    async fn from_file<P>(&self, path: P) -> Result<Session, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.datasource.from_file(path).await?.into_session()
    }

    async fn to_file<P>(
        &self,
        path: P,
        session: &Session,
        saved_at: NaiveDateTime,
    ) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let document = LedgerDocumentModel::from_session(session, saved_at);
        self.datasource.to_file(path, &document).await
    }
}

impl LedgerRepositoryImpl {
    pub(crate) fn new() -> Self {
        LedgerRepositoryImpl {
            datasource: LedgerJsonDatasourceImpl::new(),
        }
    }
}
