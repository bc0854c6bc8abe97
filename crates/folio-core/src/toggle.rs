//! Expanded-item bookkeeping.
//!
//! A [`ToggleSet`] records which items of one section are expanded. Updates
//! are persistent: every operation returns a new set and leaves the
//! original untouched, so view-state snapshots can share them freely.
//!
//! Besides per-item membership a set can hold the group entry, meaning the
//! whole section is open. Opening the group clears individual selections;
//! toggling an individual item clears only the group entry and leaves the
//! other items alone.

use std::collections::BTreeSet;

use serde::Serialize;

/// One membership entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleKey<K> {
    /// The whole section is open.
    Group,
    Item(K),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleSet<K: Ord> {
    entries: BTreeSet<ToggleKey<K>>,
}

impl<K: Ord> Default for ToggleSet<K> {
    fn default() -> Self {
        Self {
            entries: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Clone> ToggleSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Clears the group entry.
    #[must_use]
    pub fn toggle(&self, id: K) -> Self {
        let mut entries = self.entries.clone();
        entries.remove(&ToggleKey::Group);
        let key = ToggleKey::Item(id);
        if !entries.remove(&key) {
            entries.insert(key);
        }
        Self { entries }
    }

    /// Flip the group entry. Opening the group clears all items.
    #[must_use]
    pub fn toggle_group(&self) -> Self {
        if self.is_group_open() {
            Self::default()
        } else {
            let mut entries = BTreeSet::new();
            entries.insert(ToggleKey::Group);
            Self { entries }
        }
    }

    /// Whether `id` itself is a member.
    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains(&ToggleKey::Item(id.clone()))
    }

    pub fn is_group_open(&self) -> bool {
        self.entries.contains(&ToggleKey::Group)
    }

    /// Whether `id` should render expanded: either it or the group is open.
    pub fn is_expanded(&self, id: &K) -> bool {
        self.is_group_open() || self.contains(id)
    }

    /// Number of entries, group entry included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Individually expanded items in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().filter_map(|entry| match entry {
            ToggleKey::Item(k) => Some(k),
            ToggleKey::Group => None,
        })
    }
}

impl<K: Ord + Clone> FromIterator<K> for ToggleSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(ToggleKey::Item).collect(),
        }
    }
}
