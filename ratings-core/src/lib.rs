//! Core ranking types for the food ratings engine.
//!
//! A [`RankingStore`] answers "which food is rated highest in cuisine X"
//! without scanning: each cuisine keeps its foods in a `BTreeSet` ordered by
//! rating descending and name ascending, and a name index lets a rating
//! change move one food without rebuilding the bucket. A [`ListRegistry`]
//! maps list names to independent stores.
//!
//! # Examples
//! ```
//! use ratings_core::{DEFAULT_LIST, DEMO_FOODS, HighestRated, ListRegistry};
//!
//! let registry = ListRegistry::with_seed(DEFAULT_LIST, &DEMO_FOODS);
//! let store = registry.default_list();
//! assert_eq!(store.highest_rated("japanese"), HighestRated::Found("ramen".into()));
//!
//! store.change_rating("ramen", 5);
//! assert_eq!(store.highest_rated("japanese").as_text(), "miso");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod food;
mod ranking;
mod registry;
#[cfg(feature = "serde")]
mod request;
mod seed;
mod store;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use food::FoodItem;
pub use ranking::{HighestRated, NO_FOODS_MESSAGE};
pub use registry::{DEFAULT_LIST, ListRegistry};
#[cfg(feature = "serde")]
pub use request::{FoodRequest, RATING_RANGE, RatingChangeRequest, RequestValidationError};
pub use seed::{DEMO_FOODS, SeedFood, seed_store};
pub use store::RankingStore;
