use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::repositories::ledger_repository_impl::LedgerRepositoryImpl,
    domain::repositories::ledger_repository::LedgerRepository, entities::Session,
};

#[async_trait]
pub trait PersistenceUsecase: Send + Sync {
    fn load_string(&self, document: &str) -> Result<Session, ServerError>;

    /// Serializes the session and stamps it as saved at `saved_at`.
    fn save_string(
        &self,
        session: &mut Session,
        saved_at: NaiveDateTime,
    ) -> Result<String, ServerError>;

    async fn open_file<P>(&self, path: P) -> Result<Session, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    async fn save_file<P>(&self, path: P, session: &mut Session) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct PersistenceUsecaseImpl<
    R1 = LedgerRepositoryImpl, // Default.
> where
    R1: LedgerRepository,
{
    ledger_repository: R1,
}

#[async_trait]
impl<R1> PersistenceUsecase for PersistenceUsecaseImpl<R1>
where
    R1: LedgerRepository,
{
    fn load_string(&self, document: &str) -> Result<Session, ServerError> {
        let session = self.ledger_repository.from_string(document)?;
        info!(people = session.ledger().len(), "loaded ledger document");
        Ok(session)
    }

    fn save_string(
        &self,
        session: &mut Session,
        saved_at: NaiveDateTime,
    ) -> Result<String, ServerError> {
        let document = self.ledger_repository.to_string(session, saved_at)?;
        session.mark_saved(saved_at);
        Ok(document)
    }

    async fn open_file<P>(&self, path: P) -> Result<Session, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let session = self.ledger_repository.from_file(path).await?;
        info!(people = session.ledger().len(), "opened ledger file");
        Ok(session)
    }

    async fn save_file<P>(&self, path: P, session: &mut Session) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let saved_at = Local::now().naive_local();
        self.ledger_repository
            .to_file(path, session, saved_at)
            .await?;
        session.mark_saved(saved_at);
        Ok(())
    }
}

impl PersistenceUsecaseImpl {
    pub(crate) fn new() -> Self {
        PersistenceUsecaseImpl {
            ledger_repository: LedgerRepositoryImpl::new(),
        }
    }
}
