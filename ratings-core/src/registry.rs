//! Directory of named ranking stores.
//!
//! The registry hands out shared [`RankingStore`] handles. Creating a list
//! is an atomic insert-if-absent, so concurrent creates of the same name
//! always resolve to one store. Lists are never removed.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use crate::{RankingStore, SeedFood, seed_store};

/// Name of the list used when a caller does not name one.
pub const DEFAULT_LIST: &str = "default";

/// Named ranking stores.
///
/// # Examples
/// ```
/// use ratings_core::ListRegistry;
///
/// let registry = ListRegistry::new();
/// registry.create_list("tokyo").add_food("ramen", "japanese", 19);
/// registry.create_list("tokyo");
///
/// let tokyo = registry.get_list("tokyo").expect("list exists");
/// assert_eq!(tokyo.highest_rated("japanese").as_text(), "ramen");
/// assert!(registry.get_list("paris").is_none());
/// ```
#[derive(Debug, Default)]
pub struct ListRegistry {
    lists: RwLock<HashMap<String, Arc<RankingStore>>>,
}

impl ListRegistry {
    /// Construct an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a registry whose `list` is pre-filled with `foods`.
    #[must_use]
    pub fn with_seed(list: &str, foods: &[SeedFood]) -> Self {
        let registry = Self::new();
        seed_store(&registry.create_list(list), foods);
        registry
    }

    /// Return the store named `name`, creating an empty one if absent.
    ///
    /// Existing stores are returned unchanged.
    pub fn create_list(&self, name: &str) -> Arc<RankingStore> {
        if let Some(store) = self.get_list(name) {
            return store;
        }
        match self.lists.write().entry(name.to_owned()) {
            Entry::Occupied(existing) => Arc::clone(existing.get()),
            Entry::Vacant(slot) => {
                info!("created list {name}");
                Arc::clone(slot.insert(Arc::new(RankingStore::new())))
            }
        }
    }

    /// Return the store named `name`, if any.
    #[must_use]
    pub fn get_list(&self, name: &str) -> Option<Arc<RankingStore>> {
        self.lists.read().get(name).cloned()
    }

    /// Return the store under [`DEFAULT_LIST`], creating it on first use.
    pub fn default_list(&self) -> Arc<RankingStore> {
        self.create_list(DEFAULT_LIST)
    }

    /// Return all list names, sorted.
    #[must_use]
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.lists.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Return the number of lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.read().len()
    }

    /// Report whether no list exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.read().is_empty()
    }
}
