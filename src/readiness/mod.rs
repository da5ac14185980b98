//! Readiness aggregation
//!
//! Combines the state of the process's (simulated) dependencies into a
//! single ready / not-ready verdict:
//! - `probe` - where dependency signals come from
//! - `verdict` - how they are combined

pub mod probe;
pub mod verdict;

pub use probe::{DependencyProbe, EnvDependencies, StaticDependencies};
pub use verdict::{DependencyState, DependencyStatus, Readiness, ReadinessVerdict};

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_tests;

#[cfg(test)]
#[path = "verdict_test.rs"]
mod verdict_tests;
