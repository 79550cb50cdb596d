//! The immutable problem value produced by work-unit inspection.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// One discovered issue on a unit of work.
///
/// A problem is constructed once by inspection code and never mutated
/// afterwards. The validation context reads only [`Problem::severity`];
/// everything else feeds the message renderer.
///
/// Construction uses `with_*` chainers on top of the two required fields:
///
/// ```
/// use prevet_types::{Problem, Severity};
///
/// let problem = Problem::new(Severity::Error, "has no value set")
///     .with_type("org.example.Zip")
///     .with_property("archiveName")
///     .with_reason("this property must have a value")
///     .with_solution("assign a value to 'archiveName'");
/// assert_eq!(problem.severity(), Severity::Error);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    severity: Severity,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    solutions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    doc_url: Option<String>,
}

impl Problem {
    /// Create a problem with the two required pieces: a severity and a
    /// short message describing what is wrong.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            type_name: None,
            property: None,
            reason: None,
            solutions: Vec::new(),
            doc_url: None,
        }
    }

    /// Attach the fully qualified name of the type the problem was found on.
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Attach the name of the offending property.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Attach a sentence explaining why this is a problem.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Add one possible solution. May be called multiple times.
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solutions.push(solution.into());
        self
    }

    /// Attach a link into the user guide, usually resolved through
    /// [`crate::docs::UserGuideLinks`].
    pub fn with_doc_url(mut self, url: impl Into<String>) -> Self {
        self.doc_url = Some(url.into());
        self
    }

    /// The severity this problem was raised with.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The short description of what is wrong.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The type the problem was found on, if known.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// The offending property, if the problem is property-scoped.
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    /// Why this is a problem, if the inspector explained it.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Possible solutions, in the order they were added.
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    /// Documentation link for this class of problem, if any.
    pub fn doc_url(&self) -> Option<&str> {
        self.doc_url.as_deref()
    }
}
