// Mon Oct 12 2026 - Alex

use std::fmt;

/// Reference from one node to another, labeled with the accessor that steps
/// from a value of the source to the target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    from: usize,
    to: usize,
    label: Option<String>,
}

impl GraphEdge {
    pub fn new(from: usize, to: usize, label: Option<String>) -> Self {
        Self { from, to, label }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label as it appears in a cycle, empty when unlabeled.
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

impl fmt::Display for GraphEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.from, self.label_text(), self.to)
    }
}
