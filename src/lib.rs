//! Facade crate for the food ratings engine.
//!
//! This crate re-exports the core ranking types and, behind the `serde`
//! feature, the request payloads used by outer surfaces.

#![forbid(unsafe_code)]

pub use ratings_core::{
    DEFAULT_LIST, DEMO_FOODS, FoodItem, HighestRated, ListRegistry, NO_FOODS_MESSAGE,
    RankingStore, SeedFood, seed_store,
};

#[cfg(feature = "serde")]
pub use ratings_core::{FoodRequest, RATING_RANGE, RatingChangeRequest, RequestValidationError};
