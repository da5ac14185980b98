//! Dependency signals
//!
//! The database and cache are not real connections. Their availability
//! is simulated by flags that are re-read on every check.

use std::env;

/// Environment variable that forces the database to report down
pub const DB_DOWN_VAR: &str = "DB_DOWN";

/// Environment variable that forces the cache to report down
pub const CACHE_DOWN_VAR: &str = "CACHE_DOWN";

/// Source of dependency availability signals
///
/// Implementations must be cheap to call; the readiness handler queries
/// them on every request and never caches the answer.
pub trait DependencyProbe: Send + Sync {
    /// Is the database currently unavailable?
    fn is_database_down(&self) -> bool;

    /// Is the cache currently unavailable?
    fn is_cache_down(&self) -> bool;
}

/// Dependency flags read from environment variables
///
/// A dependency is down only when its variable is exactly `"true"`.
/// Any other value, including unset, means ok.
#[derive(Debug, Clone)]
pub struct EnvDependencies {
    database_var: String,
    cache_var: String,
}

impl EnvDependencies {
    /// Read `DB_DOWN` and `CACHE_DOWN`
    pub fn new() -> Self {
        Self::with_vars(DB_DOWN_VAR, CACHE_DOWN_VAR)
    }

    /// Read custom variable names instead of the defaults
    pub fn with_vars(database_var: impl Into<String>, cache_var: impl Into<String>) -> Self {
        Self {
            database_var: database_var.into(),
            cache_var: cache_var.into(),
        }
    }

    fn flag_set(name: &str) -> bool {
        matches!(env::var(name), Ok(value) if value == "true")
    }
}

impl Default for EnvDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyProbe for EnvDependencies {
    fn is_database_down(&self) -> bool {
        Self::flag_set(&self.database_var)
    }

    fn is_cache_down(&self) -> bool {
        Self::flag_set(&self.cache_var)
    }
}

/// Fixed dependency flags
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDependencies {
    pub database_down: bool,
    pub cache_down: bool,
}

impl StaticDependencies {
    /// Both dependencies available
    pub fn healthy() -> Self {
        Self::default()
    }

    pub fn new(database_down: bool, cache_down: bool) -> Self {
        Self {
            database_down,
            cache_down,
        }
    }
}

impl DependencyProbe for StaticDependencies {
    fn is_database_down(&self) -> bool {
        self.database_down
    }

    fn is_cache_down(&self) -> bool {
        self.cache_down
    }
}
