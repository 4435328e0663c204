// crates/cat-rating-config/src/config.rs
// ============================================================================
// Module: Cat Rating Configuration
// Description: Configuration loading and validation for the cat rating service.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: cat-rating-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed; defaults apply only to
//! omitted sections, never to malformed ones.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use cat_rating_core::InMemoryCatRepository;
use cat_rating_core::RatingServiceConfig;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "cat-rating.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "CAT_RATING_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default maximum accepted comment length in bytes.
pub(crate) const DEFAULT_MAX_COMMENT_LENGTH: usize = 512;
/// Default maximum number of opinions recorded against a single cat.
pub(crate) const DEFAULT_MAX_OPINIONS_PER_CAT: usize = 10_000;
/// Maximum allowed comment length limit.
pub(crate) const MAX_COMMENT_LENGTH_LIMIT: usize = 16_384;
/// Maximum allowed opinions-per-cat limit.
pub(crate) const MAX_OPINIONS_PER_CAT_LIMIT: usize = 1_000_000;
/// Maximum allowed repository capacity limit.
pub(crate) const MAX_CATS_LIMIT: usize = 10_000_000;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Cat rating service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatRatingConfig {
    /// Rating service limits.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Repository configuration.
    #[serde(default)]
    pub repository: RepositoryConfig,
}

/// Rating service limits.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Maximum accepted comment length in bytes.
    #[serde(default = "default_max_comment_length")]
    pub max_comment_length: usize,
    /// Maximum number of opinions recorded against a single cat.
    #[serde(default = "default_max_opinions_per_cat")]
    pub max_opinions_per_cat: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
            max_opinions_per_cat: DEFAULT_MAX_OPINIONS_PER_CAT,
        }
    }
}

/// Repository configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryConfig {
    /// Storage backend selection.
    #[serde(default)]
    pub backend: RepositoryBackend,
    /// Optional maximum number of cats admitted by the repository.
    #[serde(default)]
    pub max_cats: Option<usize>,
}

/// Repository backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryBackend {
    /// Deterministic in-memory repository.
    #[default]
    Memory,
}

// ============================================================================
// SECTION: Configuration Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Loading and Validation
// ============================================================================

impl CatRatingConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then the `CAT_RATING_CONFIG`
    /// environment variable, then `cat-rating.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.service.validate()?;
        self.repository.validate()?;
        Ok(())
    }

    /// Returns the core service configuration derived from this config.
    #[must_use]
    pub const fn service_config(&self) -> RatingServiceConfig {
        RatingServiceConfig {
            max_comment_length: self.service.max_comment_length,
            max_opinions_per_cat: self.service.max_opinions_per_cat,
        }
    }

    /// Builds the configured repository.
    #[must_use]
    pub fn build_repository(&self) -> InMemoryCatRepository {
        match self.repository.backend {
            RepositoryBackend::Memory => InMemoryCatRepository::with_limits(self.repository.max_cats),
        }
    }
}

impl ServiceConfig {
    /// Validates the service limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a limit is zero or exceeds its
    /// hard upper bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_comment_length == 0 {
            return Err(ConfigError::Invalid("max_comment_length must be greater than zero".to_string()));
        }
        if self.max_comment_length > MAX_COMMENT_LENGTH_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_comment_length exceeds limit: {} (max {})",
                self.max_comment_length, MAX_COMMENT_LENGTH_LIMIT
            )));
        }
        if self.max_opinions_per_cat == 0 {
            return Err(ConfigError::Invalid("max_opinions_per_cat must be greater than zero".to_string()));
        }
        if self.max_opinions_per_cat > MAX_OPINIONS_PER_CAT_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_opinions_per_cat exceeds limit: {} (max {})",
                self.max_opinions_per_cat, MAX_OPINIONS_PER_CAT_LIMIT
            )));
        }
        Ok(())
    }
}

impl RepositoryConfig {
    /// Validates the repository configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the capacity limit is zero or
    /// exceeds its hard upper bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max_cats) = self.max_cats {
            if max_cats == 0 {
                return Err(ConfigError::Invalid("max_cats must be greater than zero".to_string()));
            }
            if max_cats > MAX_CATS_LIMIT {
                return Err(ConfigError::Invalid(format!(
                    "max_cats exceeds limit: {max_cats} (max {MAX_CATS_LIMIT})"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the default maximum comment length for serde defaults.
const fn default_max_comment_length() -> usize {
    DEFAULT_MAX_COMMENT_LENGTH
}

/// Returns the default opinions-per-cat limit for serde defaults.
const fn default_max_opinions_per_cat() -> usize {
    DEFAULT_MAX_OPINIONS_PER_CAT
}

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
