//! Session replay: decoded operations applied to a list registry.
//!
//! A session is a JSON array of [`Operation`]s. Each operation yields one
//! [`Outcome`]; failures such as unknown lists or out-of-range ratings are
//! reported as outcomes and never stop the replay.

use std::sync::Arc;

use log::{debug, info};
use ratings_core::{
    FoodItem, FoodRequest, HighestRated, ListRegistry, RankingStore, RatingChangeRequest,
};
use serde::{Deserialize, Serialize};

/// One call against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Create a list unless it already exists.
    CreateList { list: String },
    /// Return every list name.
    ListLists,
    /// Add a food, or update its rating when it exists.
    AddFood {
        #[serde(default)]
        list: Option<String>,
        food: String,
        cuisine: String,
        rating: i32,
    },
    /// Change the rating of a food.
    ChangeRating {
        #[serde(default)]
        list: Option<String>,
        food: String,
        rating: i32,
    },
    /// Ask for the highest rated food of a cuisine.
    HighestRated {
        #[serde(default)]
        list: Option<String>,
        cuisine: String,
    },
    /// Return every food of a list.
    ListFoods {
        #[serde(default)]
        list: Option<String>,
    },
}

/// Result of one [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The mutation was applied, or ignored for an unknown food.
    Ok,
    /// The list exists after the call.
    Created { list: String },
    /// All list names, sorted.
    Lists { names: Vec<String> },
    /// All foods of a list, sorted by name.
    Foods { list: String, foods: Vec<FoodItem> },
    /// The top food of a cuisine.
    HighestRated {
        list: String,
        cuisine: String,
        food: String,
    },
    /// The cuisine has no foods.
    NoFoods {
        list: String,
        cuisine: String,
        message: String,
    },
    /// The named list does not exist.
    ListNotFound { list: String },
    /// The operation was rejected before reaching a store.
    InvalidRequest { reason: String },
}

/// Applies operations to a registry, routing unnamed lists to a default.
#[derive(Debug)]
pub struct SessionRunner<'a> {
    registry: &'a ListRegistry,
    default_list: &'a str,
}

impl<'a> SessionRunner<'a> {
    /// Wrap `registry`, creating `default_list` so it always resolves.
    pub fn new(registry: &'a ListRegistry, default_list: &'a str) -> Self {
        registry.create_list(default_list);
        Self {
            registry,
            default_list,
        }
    }

    /// Apply every operation in order.
    pub fn replay(&self, operations: &[Operation]) -> Vec<Outcome> {
        let outcomes: Vec<_> = operations.iter().map(|op| self.apply(op)).collect();
        info!("replayed {} operations", outcomes.len());
        outcomes
    }

    /// Apply a single operation.
    pub fn apply(&self, operation: &Operation) -> Outcome {
        debug!("applying {operation:?}");
        match operation {
            Operation::CreateList { list } => {
                self.registry.create_list(list);
                Outcome::Created { list: list.clone() }
            }
            Operation::ListLists => Outcome::Lists {
                names: self.registry.list_names(),
            },
            Operation::AddFood {
                list,
                food,
                cuisine,
                rating,
            } => {
                let request = FoodRequest {
                    food: food.clone(),
                    cuisine: cuisine.clone(),
                    rating: *rating,
                };
                if let Err(err) = request.validate() {
                    return Outcome::InvalidRequest {
                        reason: err.to_string(),
                    };
                }
                self.with_store(list.as_deref(), |_, store| {
                    store.add_food(&request.food, &request.cuisine, request.rating);
                    Outcome::Ok
                })
            }
            Operation::ChangeRating { list, food, rating } => {
                let request = RatingChangeRequest { rating: *rating };
                if let Err(err) = request.validate() {
                    return Outcome::InvalidRequest {
                        reason: err.to_string(),
                    };
                }
                self.with_store(list.as_deref(), |_, store| {
                    store.change_rating(food, request.rating);
                    Outcome::Ok
                })
            }
            Operation::HighestRated { list, cuisine } => {
                self.with_store(list.as_deref(), |name, store| {
                    match store.highest_rated(cuisine) {
                        HighestRated::Found(food) => Outcome::HighestRated {
                            list: name.to_owned(),
                            cuisine: cuisine.clone(),
                            food,
                        },
                        not_found @ HighestRated::NotFound => Outcome::NoFoods {
                            list: name.to_owned(),
                            cuisine: cuisine.clone(),
                            message: not_found.to_string(),
                        },
                    }
                })
            }
            Operation::ListFoods { list } => self.with_store(list.as_deref(), |name, store| {
                Outcome::Foods {
                    list: name.to_owned(),
                    foods: store.foods(),
                }
            }),
        }
    }

    fn with_store<F>(&self, list: Option<&str>, action: F) -> Outcome
    where
        F: FnOnce(&str, &RankingStore) -> Outcome,
    {
        let name = list.unwrap_or(self.default_list);
        match self.resolve(name) {
            Some(store) => action(name, &store),
            None => Outcome::ListNotFound {
                list: name.to_owned(),
            },
        }
    }

    fn resolve(&self, name: &str) -> Option<Arc<RankingStore>> {
        if name == self.default_list {
            Some(self.registry.create_list(name))
        } else {
            self.registry.get_list(name)
        }
    }
}
