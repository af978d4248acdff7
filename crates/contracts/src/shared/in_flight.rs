use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Record identifiers with a mutation currently in flight.
///
/// Lets the list disable a single row instead of the whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InFlight {
    ids: BTreeSet<String>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if `id` is already in flight.
    pub fn begin(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn finish(&mut self, id: &str) {
        self.ids.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}
