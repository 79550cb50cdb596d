//! Per-type problem sinks.

use std::sync::{Arc, Mutex, PoisonError};

use prevet_types::{Problem, Severity};

use crate::context::ContextState;

/// Receives problems discovered on one work type and forwards the
/// survivors into the context's shared log.
///
/// A sink is a lightweight handle: the captured `cacheable` flag plus a
/// reference back to the context state. Each sink is handed to exactly
/// one inspection pass over one type; its suppression decision is fixed
/// at creation and unaffected by other sinks for the same type.
pub struct TypeProblemSink {
    state: Arc<Mutex<ContextState>>,
    cacheable: bool,
}

impl TypeProblemSink {
    pub(crate) fn new(state: Arc<Mutex<ContextState>>, cacheable: bool) -> Self {
        Self { state, cacheable }
    }

    /// Whether the sink's type was declared cacheable when the sink was
    /// created.
    pub fn cacheable(&self) -> bool {
        self.cacheable
    }

    /// Record one problem against the sink's type.
    ///
    /// Cacheability warnings are a hint for types not yet declared
    /// cacheable; once the author has opted in, the hint is noise, so a
    /// cacheable sink drops them silently. Every other severity is always
    /// forwarded.
    ///
    /// Recording never fails: a failure here would let one bad type abort
    /// validation of the whole build.
    pub fn record(&self, problem: Problem) {
        if problem.severity() == Severity::CacheabilityWarning && self.cacheable {
            tracing::debug!("dropping cacheability warning for cacheable type");
            return;
        }
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .log
            .push(problem);
    }
}
