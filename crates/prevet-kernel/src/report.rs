//! Report derivation over the context's accumulated state.
//!
//! Both views are pure functions of the current state: nothing is cached
//! across mutations, so pulling a report is always cheap and always
//! current.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use prevet_types::{ReportableSeverity, WorkTypeId};

use crate::context::{ContextState, RenderFn};

/// Group rendered messages by reportable severity, preserving the log's
/// acceptance order within each bucket.
pub(crate) fn problems(
    state: &ContextState,
    render: &RenderFn,
) -> BTreeMap<ReportableSeverity, Vec<String>> {
    let mut buckets: BTreeMap<ReportableSeverity, Vec<String>> = BTreeMap::new();
    for problem in &state.log {
        buckets
            .entry(problem.severity().to_reportable())
            .or_default()
            .push(render(problem));
    }
    buckets
}

/// Distinct tracked types, sorted by name.
pub(crate) fn validated_types(state: &ContextState) -> Vec<WorkTypeId> {
    let mut types: Vec<WorkTypeId> = state.types.iter().cloned().collect();
    types.sort();
    types
}

/// Snapshot of both derived views, for the driver that decides what to do
/// with the outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Rendered messages grouped by reportable severity; warning bucket
    /// iterates before the error bucket.
    pub problems: BTreeMap<ReportableSeverity, Vec<String>>,
    /// Every validated type, sorted by name.
    pub validated_types: Vec<WorkTypeId>,
}

impl ValidationReport {
    /// True if no problems were collected (validated types may still be
    /// present).
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// True if any collected problem reports at error severity.
    pub fn has_errors(&self) -> bool {
        self.problems.contains_key(&ReportableSeverity::Error)
    }

    /// Messages in one severity bucket, empty if the bucket is absent.
    pub fn messages(&self, severity: ReportableSeverity) -> &[String] {
        self.problems.get(&severity).map_or(&[], Vec::as_slice)
    }
}
