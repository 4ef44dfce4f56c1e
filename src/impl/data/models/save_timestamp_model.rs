use std::str::FromStr;

use chrono::NaiveDateTime;
use fractic_server_error::ServerError;

use crate::errors::CorruptDocument;

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `data_salvamento` field of the ledger document.
#[derive(Debug)]
pub(crate) struct SaveTimestampModel(NaiveDateTime);
impl FromStr for SaveTimestampModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = NaiveDateTime::parse_from_str(s, FORMAT)
            .map_err(|e| CorruptDocument::with_debug("invalid save timestamp", &e))?;
        Ok(SaveTimestampModel(t))
    }
}

impl From<NaiveDateTime> for SaveTimestampModel {
    fn from(t: NaiveDateTime) -> Self {
        SaveTimestampModel(t)
    }
}

impl Into<NaiveDateTime> for SaveTimestampModel {
    fn into(self) -> NaiveDateTime {
        self.0
    }
}

impl std::fmt::Display for SaveTimestampModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}
