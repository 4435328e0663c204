// crates/cat-rating-core/src/core/cat.rs
// ============================================================================
// Module: Cat Entity
// Description: Rated cat entity with its recorded opinions and derived averages.
// Purpose: Accumulate opinions and report the arithmetic mean in three forms.
// Dependencies: crate::core::{identifiers, rating}, serde
// ============================================================================

//! ## Overview
//! A [`Cat`] is the rated subject. Opinions are appended only through the
//! rating operations in [`crate::runtime`], so every recorded rating has
//! passed range validation. Averages are derived from the recorded opinions
//! on every read.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::CatId;
use crate::core::rating::StarRating;

// ============================================================================
// SECTION: Opinion
// ============================================================================

/// One recorded rating event against a cat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opinion {
    /// Star value recorded for this opinion.
    pub rating: StarRating,
    /// Free-text comment; empty when the rater supplied none.
    pub comment: String,
}

impl Opinion {
    /// Creates an opinion without a comment.
    ///
    /// The comment is recorded as the empty string, which is distinct from
    /// "no comment field" in serialized forms.
    #[must_use]
    pub const fn new(rating: StarRating) -> Self {
        Self {
            rating,
            comment: String::new(),
        }
    }

    /// Creates an opinion carrying a comment.
    #[must_use]
    pub fn with_comment(rating: StarRating, comment: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
        }
    }
}

// ============================================================================
// SECTION: Cat Entity
// ============================================================================

/// A rated cat accumulating opinions and a derived average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    /// Cat identifier.
    pub cat_id: CatId,
    /// Display name.
    pub name: String,
    /// Image reference (relative path or URL).
    pub image: String,
    /// Opinions recorded against this cat, in insertion order.
    opinions: Vec<Opinion>,
}

impl Cat {
    /// Creates a cat with no recorded opinions.
    #[must_use]
    pub fn new(cat_id: CatId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            cat_id,
            name: name.into(),
            image: image.into(),
            opinions: Vec::new(),
        }
    }

    /// Appends an opinion. Reserved for the rating operations so that every
    /// recorded rating has passed validation.
    pub(crate) fn record_opinion(&mut self, opinion: Opinion) {
        self.opinions.push(opinion);
    }

    /// Returns the recorded opinions in insertion order.
    #[must_use]
    pub fn opinions(&self) -> &[Opinion] {
        &self.opinions
    }

    /// Returns the arithmetic mean of all recorded star values.
    ///
    /// A cat with no recorded opinions reports `0.0`.
    #[must_use]
    pub fn average_rating(&self) -> f64 {
        if self.opinions.is_empty() {
            return 0.0;
        }
        let total: f64 = self.opinions.iter().map(|opinion| opinion.rating.value()).sum();
        total / self.opinions.len() as f64
    }

    /// Returns the average formatted with exactly two decimal places.
    #[must_use]
    pub fn average_rating_string(&self) -> String {
        format!("{:.2}", self.average_rating())
    }

    /// Returns the average rounded to the nearest half point.
    ///
    /// Ties round half-away-from-zero, so an average of `4.25` reports `4.5`.
    #[must_use]
    pub fn half_rounded_average_rating(&self) -> f64 {
        (self.average_rating() * 2.0).round() / 2.0
    }
}
