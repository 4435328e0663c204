// crates/cat-rating-core/src/runtime/store.rs
// ============================================================================
// Module: Cat Rating In-Memory Repository
// Description: Simple in-memory cat repository for tests and examples.
// Purpose: Provide a deterministic repository implementation without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides a simple in-memory implementation of
//! [`CatRepository`] for tests and local demos. It is not intended for
//! production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::Cat;
use crate::core::CatId;
use crate::interfaces::CatRepository;
use crate::interfaces::RepositoryError;

// ============================================================================
// SECTION: In-Memory Repository
// ============================================================================

/// In-memory cat repository for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatRepository {
    /// Cat map keyed by raw identifier, protected by a mutex.
    cats: Arc<Mutex<BTreeMap<u64, Cat>>>,
    /// Optional maximum number of cats allowed.
    max_cats: Option<usize>,
}

impl InMemoryCatRepository {
    /// Creates a new unbounded in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(None)
    }

    /// Creates a new in-memory repository with an explicit capacity limit.
    ///
    /// The limit applies to new inserts only; updating an already stored cat
    /// is always allowed.
    #[must_use]
    pub fn with_limits(max_cats: Option<usize>) -> Self {
        Self {
            cats: Arc::new(Mutex::new(BTreeMap::new())),
            max_cats,
        }
    }
}

impl CatRepository for InMemoryCatRepository {
    fn find_by_id(&self, cat_id: &CatId) -> Result<Option<Cat>, RepositoryError> {
        let guard = self
            .cats
            .lock()
            .map_err(|_| RepositoryError::Repository("cat repository mutex poisoned".to_string()))?;
        Ok(guard.get(&cat_id.as_u64()).cloned())
    }

    fn find_all(&self) -> Result<Vec<Cat>, RepositoryError> {
        let guard = self
            .cats
            .lock()
            .map_err(|_| RepositoryError::Repository("cat repository mutex poisoned".to_string()))?;
        Ok(guard.values().cloned().collect())
    }

    fn save(&self, cat: &Cat) -> Result<Cat, RepositoryError> {
        let mut guard = self
            .cats
            .lock()
            .map_err(|_| RepositoryError::Repository("cat repository mutex poisoned".to_string()))?;
        if let Some(max_cats) = self.max_cats
            && !guard.contains_key(&cat.cat_id.as_u64())
            && guard.len() >= max_cats
        {
            return Err(RepositoryError::Invalid(
                "cat repository max entries exceeded".to_string(),
            ));
        }
        guard.insert(cat.cat_id.as_u64(), cat.clone());
        drop(guard);
        Ok(cat.clone())
    }
}

// ============================================================================
// SECTION: Shared Repository Wrapper
// ============================================================================

/// Shared cat repository backed by an `Arc` trait object.
#[derive(Clone)]
pub struct SharedCatRepository {
    /// Inner repository implementation.
    inner: Arc<dyn CatRepository + Send + Sync>,
}

impl SharedCatRepository {
    /// Wraps a cat repository in a shared, clonable wrapper.
    #[must_use]
    pub fn from_repository(repository: impl CatRepository + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(repository),
        }
    }

    /// Wraps an existing shared repository.
    #[must_use]
    pub const fn new(repository: Arc<dyn CatRepository + Send + Sync>) -> Self {
        Self {
            inner: repository,
        }
    }
}

impl CatRepository for SharedCatRepository {
    fn find_by_id(&self, cat_id: &CatId) -> Result<Option<Cat>, RepositoryError> {
        self.inner.find_by_id(cat_id)
    }

    fn find_all(&self) -> Result<Vec<Cat>, RepositoryError> {
        self.inner.find_all()
    }

    fn save(&self, cat: &Cat) -> Result<Cat, RepositoryError> {
        self.inner.save(cat)
    }
}
