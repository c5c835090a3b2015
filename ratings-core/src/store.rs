//! Per-list ranking state.
//!
//! A [`RankingStore`] keeps two views over one set of foods: a name index
//! owning each [`FoodItem`], and one ordered bucket of [`RankKey`]s per
//! cuisine. Every mutation keeps the views in step:
//!
//! - each food in the name index has exactly one key, in the bucket for its
//!   own cuisine, carrying its current rating;
//! - every key in a bucket resolves to a food in the name index;
//! - a rating change removes the old key before inserting the new one, so a
//!   bucket never holds a key ordered by a stale rating.
//!
//! Both views sit behind a single mutex. Queries therefore never observe a
//! bucket between the removal and reinsertion of a rating change.

use std::collections::{BTreeSet, HashMap};

use log::debug;
use parking_lot::Mutex;

use crate::FoodItem;
use crate::ranking::{HighestRated, RankKey};

#[derive(Debug, Default)]
struct RankingState {
    by_name: HashMap<String, FoodItem>,
    by_cuisine: HashMap<String, BTreeSet<RankKey>>,
}

impl RankingState {
    fn insert(&mut self, food: FoodItem) {
        self.by_cuisine
            .entry(food.cuisine.clone())
            .or_default()
            .insert(RankKey::new(food.rating, food.name.as_str()));
        self.by_name.insert(food.name.clone(), food);
    }

    fn change_rating(&mut self, name: &str, rating: i32) -> bool {
        let Some(food) = self.by_name.get_mut(name) else {
            return false;
        };
        let Some(bucket) = self.by_cuisine.get_mut(&food.cuisine) else {
            return false;
        };
        bucket.remove(&RankKey::new(food.rating, name));
        food.rating = rating;
        bucket.insert(RankKey::new(rating, name));
        true
    }

    fn highest_rated(&self, cuisine: &str) -> Option<String> {
        self.by_cuisine
            .get(cuisine)
            .and_then(BTreeSet::first)
            .map(|key| key.name.clone())
    }
}

/// Ranked foods for one list.
///
/// All operations take `&self`, so a store can be shared between threads
/// behind an `Arc`.
///
/// # Examples
/// ```
/// use ratings_core::{HighestRated, RankingStore};
///
/// let store = RankingStore::new();
/// store.add_food("miso", "japanese", 12);
/// store.add_food("ramen", "japanese", 14);
/// assert_eq!(store.highest_rated("japanese"), HighestRated::Found("ramen".into()));
///
/// store.change_rating("ramen", 5);
/// assert_eq!(store.highest_rated("japanese").as_text(), "miso");
/// assert_eq!(store.highest_rated("greek"), HighestRated::NotFound);
/// ```
#[derive(Debug, Default)]
pub struct RankingStore {
    state: Mutex<RankingState>,
}

impl RankingStore {
    /// Construct an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a food, or update its rating when the name already exists.
    ///
    /// An existing food keeps its first cuisine; the `cuisine` argument
    /// is only used when the food is new. Ratings are not range-checked.
    pub fn add_food(&self, name: &str, cuisine: &str, rating: i32) {
        let mut state = self.state.lock();
        if state.change_rating(name, rating) {
            debug!("re-added food {name}: rating set to {rating}, cuisine unchanged");
            return;
        }
        state.insert(FoodItem::new(name, cuisine, rating));
        debug!("added food {name} to cuisine {cuisine} with rating {rating}");
    }

    /// Change the rating of an existing food.
    ///
    /// Unknown names are ignored and leave the store untouched.
    pub fn change_rating(&self, name: &str, rating: i32) {
        if self.state.lock().change_rating(name, rating) {
            debug!("changed rating of {name} to {rating}");
        } else {
            debug!("ignored rating change for unknown food {name}");
        }
    }

    /// Return the highest rated food in `cuisine`.
    ///
    /// Ties on rating go to the lexicographically smallest name.
    #[must_use]
    pub fn highest_rated(&self, cuisine: &str) -> HighestRated {
        self.state.lock().highest_rated(cuisine).into()
    }

    /// Look up a food by name.
    #[must_use]
    pub fn food(&self, name: &str) -> Option<FoodItem> {
        self.state.lock().by_name.get(name).cloned()
    }

    /// Report whether a food with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.state.lock().by_name.contains_key(name)
    }

    /// Return the foods of `cuisine` in ranking order.
    ///
    /// The result is empty for an unknown cuisine.
    #[must_use]
    pub fn ranking(&self, cuisine: &str) -> Vec<FoodItem> {
        let state = self.state.lock();
        state
            .by_cuisine
            .get(cuisine)
            .into_iter()
            .flatten()
            .filter_map(|key| state.by_name.get(&key.name))
            .cloned()
            .collect()
    }

    /// Return every food, sorted by name.
    #[must_use]
    pub fn foods(&self) -> Vec<FoodItem> {
        let mut foods: Vec<_> = self.state.lock().by_name.values().cloned().collect();
        foods.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        foods
    }

    /// Return the cuisines holding at least one food, sorted.
    #[must_use]
    pub fn cuisines(&self) -> Vec<String> {
        let mut cuisines: Vec<_> = self
            .state
            .lock()
            .by_cuisine
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(cuisine, _)| cuisine.clone())
            .collect();
        cuisines.sort_unstable();
        cuisines
    }

    /// Return the number of foods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().by_name.len()
    }

    /// Report whether the store holds no foods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().by_name.is_empty()
    }

    /// Return the ranking keys of `cuisine` as `(rating, name)` pairs,
    /// straight from the bucket.
    #[cfg(any(test, feature = "test-support"))]
    pub(crate) fn bucket_keys(&self, cuisine: &str) -> Vec<(i32, String)> {
        self.state
            .lock()
            .by_cuisine
            .get(cuisine)
            .into_iter()
            .flatten()
            .map(|key| (key.rating, key.name.clone()))
            .collect()
    }

    /// Return the number of keys across all buckets.
    #[cfg(any(test, feature = "test-support"))]
    pub(crate) fn bucket_entries(&self) -> usize {
        self.state
            .lock()
            .by_cuisine
            .values()
            .map(BTreeSet::len)
            .sum()
    }

    /// Return every bucket name, including empty buckets.
    #[cfg(any(test, feature = "test-support"))]
    pub(crate) fn bucket_names(&self) -> Vec<String> {
        self.state.lock().by_cuisine.keys().cloned().collect()
    }
}
