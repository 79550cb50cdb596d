//! User-guide link resolution.
//!
//! Inspection code attaches documentation pointers to problems so the
//! final report can send authors to the right user-guide section. Links
//! are resolved eagerly at problem-construction time, which keeps the
//! renderer pure.

use serde::{Deserialize, Serialize};

/// Resolves user-guide pages and anchors against a base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGuideLinks {
    base_url: String,
}

impl UserGuideLinks {
    /// Create a resolver for the given base URL. A trailing slash on the
    /// base is tolerated and normalized away.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// URL of a user-guide page.
    pub fn page(&self, page: &str) -> String {
        format!("{}/{page}.html", self.base_url)
    }

    /// URL of a section anchor within a user-guide page.
    pub fn section(&self, page: &str, anchor: &str) -> String {
        format!("{}/{page}.html#{anchor}", self.base_url)
    }
}
