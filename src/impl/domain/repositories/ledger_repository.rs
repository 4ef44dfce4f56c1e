use async_trait::async_trait;
use chrono::NaiveDateTime;
use fractic_server_error::ServerError;

use crate::entities::Session;

#[async_trait]
pub trait LedgerRepository: Send + Sync {
    fn from_string(&self, document: &str) -> Result<Session, ServerError>;

    fn to_string(&self, session: &Session, saved_at: NaiveDateTime)
        -> Result<String, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Session, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    async fn to_file<P>(
        &self,
        path: P,
        session: &Session,
        saved_at: NaiveDateTime,
    ) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
