use std::fmt;

/// Ordered ancestor field names from the root of a generation call.
///
/// Joining the path with `.` yields the rule-table lookup key; the separator
/// is part of the rule table's external contract. Paths are extended with
/// structural field names only, never with synthetic per-index names, so
/// rule paths address the field, not individual collection elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Path with `name` appended, for recursing into a nested structure.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Dotted lookup key for a field named `leaf` under this path.
    pub fn key_for(&self, leaf: &str) -> String {
        if self.segments.is_empty() {
            leaf.to_string()
        } else {
            format!("{}.{leaf}", self.segments.join("."))
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
