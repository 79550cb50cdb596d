//! Severity classification for validation problems.
//!
//! Two spaces exist: the fine-grained [`Severity`] attached to each
//! problem as it is discovered, and the coarser [`ReportableSeverity`]
//! used only when grouping problems for the final report. The cacheability
//! warning is deliberately its own fine-grained level so the validation
//! context can suppress it for types already declared cacheable, but it
//! folds into the ordinary warning bucket once reported.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a validation problem at discovery time.
///
/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A problem worth telling the author about, but not blocking.
    Warning,
    /// A warning specifically about opting the work type into result
    /// caching. Suppressed entirely for types already declared cacheable.
    CacheabilityWarning,
    /// A problem that should block acceptance of the work unit.
    Error,
}

impl Severity {
    /// All severity levels, in ascending order.
    pub const ALL: [Severity; 3] = [
        Severity::Warning,
        Severity::CacheabilityWarning,
        Severity::Error,
    ];

    /// Project this severity into the coarser reporting space.
    ///
    /// Both warning flavors fold into [`ReportableSeverity::Warning`].
    pub fn to_reportable(self) -> ReportableSeverity {
        match self {
            Severity::Warning | Severity::CacheabilityWarning => ReportableSeverity::Warning,
            Severity::Error => ReportableSeverity::Error,
        }
    }

    /// True if this severity reports as a warning rather than an error.
    pub fn is_warning(self) -> bool {
        self.to_reportable() == ReportableSeverity::Warning
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Warning => "warning",
            Severity::CacheabilityWarning => "cacheability_warning",
            Severity::Error => "error",
        };
        fmt.write_str(name)
    }
}

/// Error returned when parsing an unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}'")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "warning" => Ok(Severity::Warning),
            "cacheability_warning" => Ok(Severity::CacheabilityWarning),
            "error" => Ok(Severity::Error),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

/// Severity space used when grouping problems for presentation.
///
/// Ordered so that iterating a sorted map of buckets yields warnings
/// before errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportableSeverity {
    /// Non-blocking problems.
    Warning,
    /// Problems the consuming driver may treat as build-fatal.
    Error,
}

impl fmt::Display for ReportableSeverity {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportableSeverity::Warning => "warning",
            ReportableSeverity::Error => "error",
        };
        fmt.write_str(name)
    }
}
