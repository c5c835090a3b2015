//! Optional start-up data for stores.
//!
//! Seeding sits outside the [`RankingStore`] contract: it only replays
//! [`RankingStore::add_food`] calls, so seeded stores obey exactly the same
//! rules as stores filled by callers.

use log::info;

use crate::RankingStore;

/// One entry of a seed dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedFood {
    /// Food name.
    pub name: &'static str,
    /// Cuisine bucket.
    pub cuisine: &'static str,
    /// Initial rating.
    pub rating: i32,
}

impl SeedFood {
    /// Construct a seed entry.
    #[must_use]
    pub const fn new(name: &'static str, cuisine: &'static str, rating: i32) -> Self {
        Self {
            name,
            cuisine,
            rating,
        }
    }
}

/// Demonstration dataset used when a registry is built with seeding enabled.
pub const DEMO_FOODS: [SeedFood; 6] = [
    SeedFood::new("kimchi", "korean", 9),
    SeedFood::new("miso", "japanese", 12),
    SeedFood::new("sushi", "japanese", 8),
    SeedFood::new("moussaka", "greek", 15),
    SeedFood::new("ramen", "japanese", 14),
    SeedFood::new("bulgogi", "korean", 7),
];

/// Add every entry of `foods` to `store`, in order.
///
/// Later entries with a repeated name update the rating of the earlier one.
///
/// # Examples
/// ```
/// use ratings_core::{DEMO_FOODS, RankingStore, seed_store};
///
/// let store = RankingStore::new();
/// seed_store(&store, &DEMO_FOODS);
/// assert_eq!(store.len(), 6);
/// assert_eq!(store.highest_rated("greek").as_text(), "moussaka");
/// ```
pub fn seed_store(store: &RankingStore, foods: &[SeedFood]) {
    for food in foods {
        store.add_food(food.name, food.cuisine, food.rating);
    }
    info!("seeded store with {} foods", foods.len());
}
