//! Label table built during tokenization.
//!
//! A label's address is the index of the instruction token that follows its
//! declaration. Redeclaring a label replaces the earlier address.

use std::collections::HashMap;

/// Label names mapped to token addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: HashMap<String, usize>,
}

impl LabelTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `address`, returning the address it replaced.
    pub fn define(&mut self, name: &str, address: usize) -> Option<usize> {
        self.entries.insert(name.to_owned(), address)
    }

    /// Looks up the address bound to `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.entries.get(name).copied()
    }

    /// Returns the number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no label was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `(name, address)` pairs ordered by address, then name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut pairs: Vec<_> = self
            .entries
            .iter()
            .map(|(name, address)| (name.as_str(), *address))
            .collect();
        pairs.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        pairs
    }
}
