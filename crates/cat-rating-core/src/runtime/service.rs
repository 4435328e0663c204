// crates/cat-rating-core/src/runtime/service.rs
// ============================================================================
// Module: Rating Service
// Description: Star validation, opinion recording, and aggregate queries.
// Purpose: Single canonical execution path for rating operations.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The rating service validates star values, records opinions against cats,
//! and answers aggregate queries through the injected repository. All API
//! surfaces must call into these methods so that every recorded opinion has
//! passed validation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Cat;
use crate::core::CatId;
use crate::core::Opinion;
use crate::core::StarRating;
use crate::core::StarRatingError;
use crate::interfaces::CatRepository;
use crate::interfaces::RepositoryError;

// ============================================================================
// SECTION: Service Configuration
// ============================================================================

/// Default maximum accepted comment length in bytes.
const DEFAULT_MAX_COMMENT_LENGTH: usize = 512;
/// Default maximum number of opinions recorded against a single cat.
const DEFAULT_MAX_OPINIONS_PER_CAT: usize = 10_000;

/// Configuration for the rating service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingServiceConfig {
    /// Maximum accepted comment length in bytes.
    pub max_comment_length: usize,
    /// Maximum number of opinions recorded against a single cat.
    pub max_opinions_per_cat: usize,
}

impl Default for RatingServiceConfig {
    fn default() -> Self {
        Self {
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
            max_opinions_per_cat: DEFAULT_MAX_OPINIONS_PER_CAT,
        }
    }
}

// ============================================================================
// SECTION: Rating Errors
// ============================================================================

/// Rating service errors.
#[derive(Debug, Error)]
pub enum RatingError {
    /// Star value failed range validation.
    #[error(transparent)]
    InvalidStars(#[from] StarRatingError),
    /// Comment exceeds the configured maximum length.
    #[error("comment too long: {length} bytes (max {max})")]
    CommentTooLong {
        /// Rejected comment length in bytes.
        length: usize,
        /// Configured maximum comment length.
        max: usize,
    },
    /// Cat has reached the configured opinion limit.
    #[error("opinion limit reached for cat: {0}")]
    OpinionLimitReached(CatId),
    /// Cat not found in the repository.
    #[error("cat not found: {0}")]
    CatNotFound(CatId),
    /// Repository error.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

// ============================================================================
// SECTION: Rating Service
// ============================================================================

/// Rating service implementing validation, recording, and aggregate queries.
pub struct RatingService<R> {
    /// Repository used for lookup and persistence.
    repository: R,
    /// Service configuration.
    config: RatingServiceConfig,
}

impl<R> RatingService<R>
where
    R: CatRepository,
{
    /// Creates a rating service with default configuration.
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, RatingServiceConfig::default())
    }

    /// Creates a rating service with explicit configuration.
    #[must_use]
    pub const fn with_config(repository: R, config: RatingServiceConfig) -> Self {
        Self {
            repository,
            config,
        }
    }

    /// Rates a cat without a comment and returns the updated cat.
    ///
    /// The opinion is recorded with an empty comment. The updated cat is not
    /// persisted; call [`Self::save_cat`] to persist it.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidStars`] when `stars` is outside `(0, 5]`
    /// and [`RatingError::OpinionLimitReached`] when the cat is saturated.
    /// No opinion is recorded on failure.
    pub fn rate_cat(&self, stars: f64, cat: Cat) -> Result<Cat, RatingError> {
        self.apply_rating(stars, "", cat)
    }

    /// Rates the cat identified by `cat_id`, recording the given comment,
    /// then persists and returns the updated cat.
    ///
    /// An empty comment is recorded as the empty string, distinct from the
    /// comment-less path only in how the rating was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::CatNotFound`] when the repository cannot
    /// resolve `cat_id`, [`RatingError::InvalidStars`] when `stars` is
    /// outside `(0, 5]`, and [`RatingError::CommentTooLong`] when the comment
    /// exceeds the configured limit. No opinion is recorded on failure.
    pub fn rate_cat_with_comment(
        &self,
        stars: f64,
        comment: &str,
        cat_id: CatId,
    ) -> Result<Cat, RatingError> {
        let cat = self
            .repository
            .find_by_id(&cat_id)?
            .ok_or(RatingError::CatNotFound(cat_id))?;
        let rated = self.apply_rating(stars, comment, cat)?;
        Ok(self.repository.save(&rated)?)
    }

    /// Returns the opinions recorded against `cat` in insertion order.
    #[must_use]
    pub fn get_opinions<'cat>(&self, cat: &'cat Cat) -> &'cat [Opinion] {
        cat.opinions()
    }

    /// Persists a cat through the repository and returns the persisted entity.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::Repository`] when persistence fails.
    pub fn save_cat(&self, cat: &Cat) -> Result<Cat, RatingError> {
        Ok(self.repository.save(cat)?)
    }

    /// Returns all cats known to the repository, unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::Repository`] when the listing fails.
    pub fn get_all_cats(&self) -> Result<Vec<Cat>, RatingError> {
        Ok(self.repository.find_all()?)
    }

    /// Returns the number of cats known to the repository.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::Repository`] when the listing fails.
    pub fn get_cat_count(&self) -> Result<usize, RatingError> {
        Ok(self.repository.find_all()?.len())
    }

    /// Validates the inputs and appends the opinion to the cat.
    ///
    /// Validation happens before any mutation so a failed rating leaves the
    /// cat unchanged.
    fn apply_rating(&self, stars: f64, comment: &str, mut cat: Cat) -> Result<Cat, RatingError> {
        let rating = StarRating::new(stars)?;
        if comment.len() > self.config.max_comment_length {
            return Err(RatingError::CommentTooLong {
                length: comment.len(),
                max: self.config.max_comment_length,
            });
        }
        if cat.opinions().len() >= self.config.max_opinions_per_cat {
            return Err(RatingError::OpinionLimitReached(cat.cat_id));
        }
        cat.record_opinion(Opinion::with_comment(rating, comment));
        Ok(cat)
    }
}
