use crate::entities::RosterOrder;

impl RosterOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Names containing `needle`, ignoring case, in roster order. An empty
    /// needle returns the full roster.
    pub fn filter(&self, needle: &str) -> Vec<&str> {
        let needle = needle.trim().to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Appends unless already present.
    pub(crate) fn push(&mut self, name: &str) {
        if self.position(name).is_none() {
            self.names.push(name.to_string());
        }
    }

    /// Moves `name` to `index` (clamped to the last position). Everything
    /// else keeps its relative order. Returns the final index, or `None` if
    /// the name is not in the roster.
    pub(crate) fn move_to(&mut self, name: &str, index: usize) -> Option<usize> {
        let from = self.position(name)?;
        let moved = self.names.remove(from);
        let to = index.min(self.names.len());
        self.names.insert(to, moved);
        Some(to)
    }

    /// Replaces `old` in place.
    pub(crate) fn rename(&mut self, old: &str, new: &str) -> bool {
        match self.position(old) {
            Some(i) => {
                self.names[i] = new.to_string();
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        before != self.names.len()
    }
}
