use chrono::NaiveDateTime;

use super::{ledger::Ledger, roster::RosterOrder};

/// In-memory state of one open ledger file. All mutations go through
/// `&mut self`, so there is never more than one in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub(crate) ledger: Ledger,
    pub(crate) roster: RosterOrder,
    pub(crate) last_saved: Option<NaiveDateTime>,
}
