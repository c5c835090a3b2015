//! Request payloads accepted by outer surfaces.
//!
//! The ranking store accepts any rating. Callers that take input from users
//! decode these payloads and call [`FoodRequest::validate`] or
//! [`RatingChangeRequest::validate`] first.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ratings accepted from requests.
pub const RATING_RANGE: RangeInclusive<i32> = 0..=20;

/// Errors returned by request validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestValidationError {
    /// The food name was empty or whitespace.
    #[error("food name must not be empty")]
    EmptyFoodName,
    /// The cuisine was empty or whitespace.
    #[error("cuisine must not be empty")]
    EmptyCuisine,
    /// The rating fell outside [`RATING_RANGE`].
    #[error("rating {rating} must be between {min} and {max}")]
    RatingOutOfRange {
        /// Rating supplied by the caller.
        rating: i32,
        /// Lowest accepted rating.
        min: i32,
        /// Highest accepted rating.
        max: i32,
    },
}

/// Body of an add-food request.
///
/// # Examples
/// ```
/// use ratings_core::FoodRequest;
///
/// let request: FoodRequest =
///     serde_json::from_str(r#"{"food":"ramen","cuisine":"japanese","rating":14}"#).unwrap();
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRequest {
    /// Food name.
    pub food: String,
    /// Cuisine the food belongs to.
    pub cuisine: String,
    /// Initial rating.
    pub rating: i32,
}

impl FoodRequest {
    /// Check the request before it reaches a store.
    ///
    /// # Errors
    /// Returns [`RequestValidationError`] for blank names or cuisines and for
    /// ratings outside [`RATING_RANGE`].
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if self.food.trim().is_empty() {
            return Err(RequestValidationError::EmptyFoodName);
        }
        if self.cuisine.trim().is_empty() {
            return Err(RequestValidationError::EmptyCuisine);
        }
        validate_rating(self.rating)
    }
}

/// Body of a rating-change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChangeRequest {
    /// New rating.
    pub rating: i32,
}

impl RatingChangeRequest {
    /// Check the new rating.
    ///
    /// # Errors
    /// Returns [`RequestValidationError::RatingOutOfRange`] for ratings outside
    /// [`RATING_RANGE`].
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        validate_rating(self.rating)
    }
}

fn validate_rating(rating: i32) -> Result<(), RequestValidationError> {
    if RATING_RANGE.contains(&rating) {
        Ok(())
    } else {
        Err(RequestValidationError::RatingOutOfRange {
            rating,
            min: *RATING_RANGE.start(),
            max: *RATING_RANGE.end(),
        })
    }
}
