/// Display order of person names (the history view). Every entry is a key of
/// the ledger, and no name appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterOrder {
    pub(crate) names: Vec<String>,
}
