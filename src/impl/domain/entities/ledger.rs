use indexmap::IndexMap;

use super::person::Person;

/// All people keyed by name. Iteration follows insertion order, which is
/// independent of the user-facing [`RosterOrder`](super::roster::RosterOrder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    pub(crate) people: IndexMap<String, Person>,
}
