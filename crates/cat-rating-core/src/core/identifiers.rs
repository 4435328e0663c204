// crates/cat-rating-core/src/core/identifiers.rs
// ============================================================================
// Module: Cat Rating Identifiers
// Description: Canonical opaque identifiers for rated cats.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical numeric identifier used throughout the
//! cat rating service. Identifiers are opaque and serialize as plain numbers.
//! Assignment is the owning repository's concern; zero is a valid identifier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Cat identifier assigned by the owning repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatId(u64);

impl CatId {
    /// Creates a cat identifier from a raw numeric value.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for CatId {
    fn from(value: u64) -> Self {
        Self::from_raw(value)
    }
}
