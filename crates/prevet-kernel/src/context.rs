//! The per-build-invocation validation context.
//!
//! The context exclusively owns the two shared collections of a
//! validation pass: the append-only problem log and the set of every
//! type a sink was requested for. Sinks hold a non-owning handle to the
//! same state, so problems recorded from concurrently running inspection
//! routines all land in the one log.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use prevet_types::{Problem, ReportableSeverity, WorkTypeId, render};

use crate::report::{self, ValidationReport};
use crate::sink::TypeProblemSink;

/// Renders one problem into the message that lands in the report.
pub(crate) type RenderFn = dyn Fn(&Problem) -> String + Send + Sync;

/// State shared between the context and every sink it created.
#[derive(Default)]
pub(crate) struct ContextState {
    /// Accepted problems, in acceptance order. Never shrinks, never
    /// reorders.
    pub(crate) log: Vec<Problem>,
    /// Every type a sink was requested for, recorded even when the type
    /// turned out clean.
    pub(crate) types: HashSet<WorkTypeId>,
}

/// Collects validation problems for one build invocation.
///
/// Create one context per validation pass, hand out one sink per
/// inspected type via [`WorkValidationContext::for_type`], then pull
/// [`WorkValidationContext::problems`] and
/// [`WorkValidationContext::validated_types`] (or the combined
/// [`WorkValidationContext::report`]) when the pass is done.
///
/// The context keeps accumulating after a report pull; later pulls
/// reflect the superset. There is no reset.
pub struct WorkValidationContext {
    state: Arc<Mutex<ContextState>>,
    render: Arc<RenderFn>,
}

impl WorkValidationContext {
    /// Create a context using the default minimal-message renderer.
    pub fn new() -> Self {
        Self::with_renderer(render::minimal_message)
    }

    /// Create a context with a custom problem renderer.
    ///
    /// The renderer is treated as pure: it runs once per logged problem
    /// on every report pull.
    pub fn with_renderer(render: impl Fn(&Problem) -> String + Send + Sync + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(ContextState::default())),
            render: Arc::new(render),
        }
    }

    /// Register `work_type` as validated and return a sink for recording
    /// problems found on it.
    ///
    /// The type lands in [`WorkValidationContext::validated_types`]
    /// immediately, whether or not the sink ever records anything. Every
    /// call returns a fresh sink; repeated calls for the same type do not
    /// duplicate the type, but problems recorded through any of its sinks
    /// all reach the shared log.
    ///
    /// `cacheable` fixes the sink's suppression behavior at creation
    /// time: a sink for a cacheable type silently drops
    /// cacheability-warning problems.
    pub fn for_type(&self, work_type: impl Into<WorkTypeId>, cacheable: bool) -> TypeProblemSink {
        let work_type = work_type.into();
        tracing::debug!("validating type '{}' (cacheable: {})", work_type, cacheable);
        self.lock().types.insert(work_type);
        TypeProblemSink::new(Arc::clone(&self.state), cacheable)
    }

    /// Rendered messages of every accepted problem, grouped by
    /// reportable severity.
    ///
    /// Within a bucket, messages keep the order their problems were
    /// accepted in; identical texts from distinct problems stay distinct
    /// entries. Iterating the map visits warnings before errors.
    pub fn problems(&self) -> BTreeMap<ReportableSeverity, Vec<String>> {
        report::problems(&self.lock(), &*self.render)
    }

    /// Every type ever passed to [`WorkValidationContext::for_type`],
    /// duplicate-free and sorted by name.
    ///
    /// The name order makes the list independent of discovery order, so
    /// two runs over the same types always render identically.
    pub fn validated_types(&self) -> Vec<WorkTypeId> {
        report::validated_types(&self.lock())
    }

    /// Both views bundled into one snapshot for the consuming driver.
    pub fn report(&self) -> ValidationReport {
        let state = self.lock();
        ValidationReport {
            problems: report::problems(&state, &*self.render),
            validated_types: report::validated_types(&state),
        }
    }

    /// Recording must survive a panicking inspection thread, so a
    /// poisoned lock is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, ContextState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for WorkValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prevet_types::Severity;

    #[test]
    fn clean_type_is_still_tracked() {
        let context = WorkValidationContext::new();
        let _sink = context.for_type("org.example.Clean", true);

        assert!(context.problems().is_empty());
        assert_eq!(context.validated_types(), [WorkTypeId::new("org.example.Clean")]);
    }

    #[test]
    fn custom_renderer_is_used() {
        let context = WorkValidationContext::with_renderer(|problem| {
            format!("[{}] {}", problem.severity(), problem.message())
        });
        context
            .for_type("org.example.Zip", false)
            .record(Problem::new(Severity::Error, "broken"));

        let problems = context.problems();
        assert_eq!(
            problems[&ReportableSeverity::Error],
            ["[error] broken".to_string()]
        );
    }

    #[test]
    fn reports_reflect_later_mutations() {
        let context = WorkValidationContext::new();
        context
            .for_type("org.example.A", false)
            .record(Problem::new(Severity::Warning, "first"));
        assert_eq!(context.problems()[&ReportableSeverity::Warning].len(), 1);

        context
            .for_type("org.example.B", false)
            .record(Problem::new(Severity::Warning, "second"));
        assert_eq!(context.problems()[&ReportableSeverity::Warning].len(), 2);
        assert_eq!(context.validated_types().len(), 2);
    }
}
