//! prevet-kernel: the work-validation core of prevet.
//!
//! One [`WorkValidationContext`] lives for one build invocation. Inspection
//! code asks it for a [`TypeProblemSink`] per work type, records problems
//! through the sink, and the driver pulls the aggregated views at the end:
//!
//! ```
//! use prevet_kernel::WorkValidationContext;
//! use prevet_types::{Problem, Severity};
//!
//! let context = WorkValidationContext::new();
//!
//! let sink = context.for_type("org.example.Zip", false);
//! sink.record(Problem::new(Severity::Error, "has no value set").with_type("org.example.Zip"));
//!
//! // A cacheable type never sees cacheability warnings in the report.
//! let sink = context.for_type("org.example.Tar", true);
//! sink.record(Problem::new(Severity::CacheabilityWarning, "is not annotated"));
//!
//! let report = context.report();
//! assert!(report.has_errors());
//! assert_eq!(report.validated_types.len(), 2);
//! ```
//!
//! The context is an in-memory accumulator: nothing here blocks, performs
//! I/O, or fails. Problems and tracked types only ever accumulate; every
//! report pull derives fresh views from the current state.

pub mod context;
pub mod report;
pub mod sink;

pub use context::WorkValidationContext;
pub use report::ValidationReport;
pub use sink::TypeProblemSink;
