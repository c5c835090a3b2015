//! Rated dishes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single rated dish.
///
/// The name identifies the item within a [`RankingStore`](crate::RankingStore)
/// and the cuisine selects its ranking bucket. Only the rating changes after
/// creation.
///
/// # Examples
/// ```
/// use ratings_core::FoodItem;
///
/// let food = FoodItem::new("ramen", "japanese", 14);
/// assert_eq!(food.name, "ramen");
/// assert_eq!(food.cuisine, "japanese");
/// assert_eq!(food.rating, 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FoodItem {
    /// Unique name within a store.
    pub name: String,
    /// Cuisine bucket the item ranks in.
    pub cuisine: String,
    /// Score; higher is better.
    pub rating: i32,
}

impl FoodItem {
    /// Construct a `FoodItem`.
    pub fn new(name: impl Into<String>, cuisine: impl Into<String>, rating: i32) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            rating,
        }
    }
}
