//! prevet-types: the shared problem model for prevet.
//!
//! This crate provides:
//!
//! - **Severity**: the ordered severity classification for validation
//!   problems, plus the coarser [`ReportableSeverity`] space used when
//!   grouping problems for presentation
//! - **Problem**: an immutable value describing one discovered issue
//! - **WorkTypeId**: a stable, name-ordered identifier for a validated
//!   work type
//! - **Rendering**: the minimal human-readable message renderer
//! - **Docs**: the user-guide link helper used to attach documentation
//!   pointers to problems
//!
//! Problems are produced by inspection code and consumed by the
//! validation context in `prevet-kernel`. The kernel never looks past a
//! problem's severity; everything else here exists for rendering.

pub mod docs;
pub mod problem;
pub mod render;
pub mod severity;
pub mod work_type;

pub use docs::UserGuideLinks;
pub use problem::Problem;
pub use severity::{ParseSeverityError, ReportableSeverity, Severity};
pub use work_type::WorkTypeId;
