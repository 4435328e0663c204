// crates/cat-rating-core/src/interfaces/mod.rs
// ============================================================================
// Module: Cat Rating Interfaces
// Description: Backend-agnostic repository interface for rated cats.
// Purpose: Define the persistence contract used by the rating service.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The repository interface defines how the rating service integrates with
//! persistence without embedding backend-specific details. Implementations
//! must be deterministic and fail closed on backend errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Cat;
use crate::core::CatId;

// ============================================================================
// SECTION: Cat Repository
// ============================================================================

/// Cat repository errors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Repository I/O error.
    #[error("cat repository io error: {0}")]
    Io(String),
    /// Repository data is invalid or a limit was exceeded.
    #[error("cat repository invalid data: {0}")]
    Invalid(String),
    /// Repository reported an error.
    #[error("cat repository error: {0}")]
    Repository(String),
}

/// Cat repository for lookup and persistence.
pub trait CatRepository {
    /// Finds a cat by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the lookup fails. A missing cat is
    /// `Ok(None)`, not an error.
    fn find_by_id(&self, cat_id: &CatId) -> Result<Option<Cat>, RepositoryError>;

    /// Returns all cats known to the repository.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the listing fails.
    fn find_all(&self) -> Result<Vec<Cat>, RepositoryError>;

    /// Persists a cat, inserting or updating by identifier, and returns the
    /// persisted entity.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when persistence fails.
    fn save(&self, cat: &Cat) -> Result<Cat, RepositoryError>;
}
