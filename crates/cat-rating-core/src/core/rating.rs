// crates/cat-rating-core/src/core/rating.rs
// ============================================================================
// Module: Star Rating
// Description: Validated star rating value in the range (0, 5].
// Purpose: Make out-of-range ratings unrepresentable past the service boundary.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`StarRating`] wraps the raw numeric star value supplied by a rater.
//! Construction is fallible: zero, negative, above-maximum, and non-finite
//! values are rejected. Fractional values such as `0.5` and the boundary
//! value `5` are accepted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Inclusive upper bound for a valid star rating.
pub const MAX_STARS: f64 = 5.0;

// ============================================================================
// SECTION: Star Rating
// ============================================================================

/// Star rating validation errors.
#[derive(Debug, Error)]
pub enum StarRatingError {
    /// Star value is outside the permitted range.
    #[error("star rating out of range: {0} (valid range is (0, 5])")]
    OutOfRange(f64),
}

/// Validated star rating in the range `(0, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(f64);

impl StarRating {
    /// Validates a raw star value into a rating.
    ///
    /// # Errors
    ///
    /// Returns [`StarRatingError::OutOfRange`] when the value is not in
    /// `(0, 5]`. Non-finite values never satisfy the range check.
    pub fn new(stars: f64) -> Result<Self, StarRatingError> {
        if stars > 0.0 && stars <= MAX_STARS {
            Ok(Self(stars))
        } else {
            Err(StarRatingError::OutOfRange(stars))
        }
    }

    /// Returns the raw star value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
