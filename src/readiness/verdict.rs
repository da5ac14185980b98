//! Readiness verdict
//!
//! Derived fresh from a [`DependencyProbe`] on every check. The overall
//! verdict is not ready iff at least one dependency is down.

use super::probe::DependencyProbe;
use serde::Serialize;

/// Availability of a single dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyState {
    Ok,
    Down,
}

impl DependencyState {
    fn from_down(down: bool) -> Self {
        if down {
            DependencyState::Down
        } else {
            DependencyState::Ok
        }
    }

    pub fn is_down(self) -> bool {
        self == DependencyState::Down
    }
}

/// Per-dependency snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DependencyStatus {
    pub database: DependencyState,
    pub cache: DependencyState,
}

/// Overall readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Readiness {
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "not ready")]
    NotReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessVerdict {
    pub overall: Readiness,
    pub dependencies: DependencyStatus,
}

impl ReadinessVerdict {
    /// Query the probe once and combine the answers
    pub fn evaluate(probe: &dyn DependencyProbe) -> Self {
        let dependencies = DependencyStatus {
            database: DependencyState::from_down(probe.is_database_down()),
            cache: DependencyState::from_down(probe.is_cache_down()),
        };

        let overall = if dependencies.database.is_down() || dependencies.cache.is_down() {
            Readiness::NotReady
        } else {
            Readiness::Ready
        };

        Self {
            overall,
            dependencies,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.overall == Readiness::Ready
    }
}
