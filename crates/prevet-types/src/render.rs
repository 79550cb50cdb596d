//! Minimal human-readable rendering of problems.
//!
//! This is the default renderer the validation context uses when building
//! a report. It produces a single-line message: location prefix, the
//! problem message, the reason, possible solutions, then a documentation
//! pointer. Rendering is pure and infallible; a problem with only a
//! message still renders to something useful.

use crate::problem::Problem;

/// Render the minimal single-line message for a problem.
///
/// ```
/// use prevet_types::{render, Problem, Severity};
///
/// let problem = Problem::new(Severity::Error, "has no value set")
///     .with_type("org.example.Zip")
///     .with_property("archiveName");
/// assert_eq!(
///     render::minimal_message(&problem),
///     "Type 'org.example.Zip' property 'archiveName': has no value set."
/// );
/// ```
pub fn minimal_message(problem: &Problem) -> String {
    let mut out = String::new();

    match (problem.type_name(), problem.property()) {
        (Some(type_name), Some(property)) => {
            out.push_str(&format!("Type '{type_name}' property '{property}': "));
        }
        (Some(type_name), None) => out.push_str(&format!("Type '{type_name}': ")),
        (None, Some(property)) => out.push_str(&format!("Property '{property}': ")),
        (None, None) => {}
    }

    push_sentence(&mut out, problem.message());

    if let Some(reason) = problem.reason() {
        out.push(' ');
        push_sentence(&mut out, &format!("Reason: {reason}"));
    }

    match problem.solutions() {
        [] => {}
        [solution] => {
            out.push(' ');
            push_sentence(&mut out, &format!("Possible solution: {solution}"));
        }
        solutions => {
            out.push(' ');
            push_sentence(&mut out, &format!("Possible solutions: {}", solutions.join("; ")));
        }
    }

    if let Some(url) = problem.doc_url() {
        out.push(' ');
        out.push_str(&format!("For more information, see {url}."));
    }

    out
}

/// Append `text` ensuring it ends as a sentence.
fn push_sentence(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.ends_with(['.', '!', '?']) {
        out.push('.');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    #[test]
    fn message_only() {
        let problem = Problem::new(Severity::Warning, "is not cacheable");
        assert_eq!(minimal_message(&problem), "is not cacheable.");
    }

    #[test]
    fn keeps_existing_terminal_punctuation() {
        let problem = Problem::new(Severity::Warning, "is not cacheable.");
        assert_eq!(minimal_message(&problem), "is not cacheable.");
    }

    #[test]
    fn type_prefix_without_property() {
        let problem = Problem::new(Severity::Error, "is abstract").with_type("org.example.Zip");
        assert_eq!(minimal_message(&problem), "Type 'org.example.Zip': is abstract.");
    }

    #[test]
    fn property_prefix_without_type() {
        let problem = Problem::new(Severity::Error, "has no value set").with_property("archiveName");
        assert_eq!(
            minimal_message(&problem),
            "Property 'archiveName': has no value set."
        );
    }

    #[test]
    fn full_rendering() {
        let problem = Problem::new(Severity::Error, "has no value set")
            .with_type("org.example.Zip")
            .with_property("archiveName")
            .with_reason("this property must have a value")
            .with_solution("assign a value to 'archiveName'")
            .with_doc_url("https://example.org/userguide/validation.html#value_not_set");
        assert_eq!(
            minimal_message(&problem),
            "Type 'org.example.Zip' property 'archiveName': has no value set. \
             Reason: this property must have a value. \
             Possible solution: assign a value to 'archiveName'. \
             For more information, see https://example.org/userguide/validation.html#value_not_set."
        );
    }

    #[test]
    fn multiple_solutions_join_with_semicolons() {
        let problem = Problem::new(Severity::Warning, "is not annotated")
            .with_solution("add an annotation")
            .with_solution("mark it internal");
        assert_eq!(
            minimal_message(&problem),
            "is not annotated. Possible solutions: add an annotation; mark it internal."
        );
    }
}
