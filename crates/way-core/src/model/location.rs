use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a construct in the audited codebase.
///
/// Ordering is `(file, line)`, which is what detector output and the final
/// report sort by.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl SourceLocation {
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_file_then_line() {
        let a = SourceLocation::new("a.swift", 90);
        let b = SourceLocation::new("b.swift", 10);
        let b2 = SourceLocation::new("b.swift", 20);
        assert!(a < b);
        assert!(b < b2);
    }

    #[test]
    fn displays_as_file_colon_line() {
        assert_eq!(
            SourceLocation::new("Views/Card.swift", 42).to_string(),
            "Views/Card.swift:42"
        );
    }
}
