//! Stable identifiers for validated work types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one type of work (e.g. a task implementation) by its fully
/// qualified name.
///
/// Ordering, equality, and hashing all delegate to the name, so a sorted
/// collection of identifiers lists types lexicographically regardless of
/// the order they were discovered in. Discovery order depends on
/// unrelated factors such as task-graph construction, so the name order
/// is what keeps two runs over the same types diff-identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkTypeId(String);

impl WorkTypeId {
    /// Create an identifier from a fully qualified type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The fully qualified type name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkTypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}

impl From<&str> for WorkTypeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for WorkTypeId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_name() {
        let mut types = vec![
            WorkTypeId::new("org.example.Zip"),
            WorkTypeId::new("org.example.Apple"),
            WorkTypeId::new("com.example.Tar"),
        ];
        types.sort();
        let names: Vec<&str> = types.iter().map(WorkTypeId::name).collect();
        assert_eq!(
            names,
            ["com.example.Tar", "org.example.Apple", "org.example.Zip"]
        );
    }

    #[test]
    fn from_str_and_string_agree() {
        assert_eq!(
            WorkTypeId::from("org.example.Zip"),
            WorkTypeId::from("org.example.Zip".to_string())
        );
    }

    #[test]
    fn displays_the_name() {
        assert_eq!(WorkTypeId::new("MyTask").to_string(), "MyTask");
    }
}
