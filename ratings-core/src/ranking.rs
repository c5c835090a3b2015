//! Ordering rules for cuisine buckets.
//!
//! A bucket is a `BTreeSet<RankKey>`. `RankKey` orders by rating descending
//! and breaks ties by name ascending, so the first key in a bucket is always
//! the highest rated food. Names are unique within a store, which makes the
//! `(rating, name)` pair a total order with no two distinct foods comparing
//! equal.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text returned for a cuisine with no foods.
pub const NO_FOODS_MESSAGE: &str = "No foods found for this cuisine.";

/// Position of a food inside its cuisine bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankKey {
    pub(crate) rating: i32,
    pub(crate) name: String,
}

impl RankKey {
    pub(crate) fn new(rating: i32, name: impl Into<String>) -> Self {
        Self {
            rating,
            name: name.into(),
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rating
            .cmp(&self.rating)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Answer to a highest-rated query.
///
/// `Display` renders the food name, or [`NO_FOODS_MESSAGE`] when the cuisine
/// has no foods, so callers that only show text can print the value
/// directly.
///
/// # Examples
/// ```
/// use ratings_core::{HighestRated, NO_FOODS_MESSAGE};
///
/// let found = HighestRated::Found("ramen".into());
/// assert_eq!(found.to_string(), "ramen");
/// assert_eq!(HighestRated::NotFound.as_text(), NO_FOODS_MESSAGE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "status", content = "food", rename_all = "snake_case")
)]
pub enum HighestRated {
    /// Name of the top food in the cuisine.
    Found(String),
    /// The cuisine is unknown or has no foods.
    NotFound,
}

impl HighestRated {
    /// Return the display text for this result.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Found(name) => name,
            Self::NotFound => NO_FOODS_MESSAGE,
        }
    }

    /// Return the food name when one was found.
    #[must_use]
    pub fn food(&self) -> Option<&str> {
        match self {
            Self::Found(name) => Some(name),
            Self::NotFound => None,
        }
    }

    /// Report whether a food was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<String>> for HighestRated {
    fn from(name: Option<String>) -> Self {
        name.map_or(Self::NotFound, Self::Found)
    }
}

impl fmt::Display for HighestRated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[rstest]
    #[case(RankKey::new(14, "ramen"), RankKey::new(12, "miso"))]
    #[case(RankKey::new(9, "bulgogi"), RankKey::new(9, "kimchi"))]
    #[case(RankKey::new(0, "zucchini"), RankKey::new(-3, "apple"))]
    fn earlier_key_sorts_first(#[case] first: RankKey, #[case] second: RankKey) {
        assert_eq!(first.cmp(&second), Ordering::Less);
        assert_eq!(second.cmp(&first), Ordering::Greater);
    }

    #[test]
    fn equal_only_for_same_rating_and_name() {
        assert_eq!(
            RankKey::new(5, "sushi").cmp(&RankKey::new(5, "sushi")),
            Ordering::Equal
        );
        assert_ne!(RankKey::new(5, "sushi"), RankKey::new(6, "sushi"));
    }

    #[test]
    fn bucket_iterates_in_ranking_order() {
        let bucket: BTreeSet<_> = [
            RankKey::new(8, "sushi"),
            RankKey::new(14, "ramen"),
            RankKey::new(12, "miso"),
            RankKey::new(12, "gyoza"),
        ]
        .into_iter()
        .collect();
        let names: Vec<_> = bucket.iter().map(|key| key.name.as_str()).collect();
        assert_eq!(names, ["ramen", "gyoza", "miso", "sushi"]);
    }

    #[test]
    fn not_found_uses_fixed_message() {
        assert_eq!(
            HighestRated::NotFound.to_string(),
            "No foods found for this cuisine."
        );
        assert!(HighestRated::NotFound.food().is_none());
        assert!(!HighestRated::NotFound.is_found());
    }

    #[test]
    fn converts_from_option() {
        assert_eq!(
            HighestRated::from(Some("miso".to_owned())),
            HighestRated::Found("miso".into())
        );
        assert_eq!(HighestRated::from(None), HighestRated::NotFound);
    }
}
