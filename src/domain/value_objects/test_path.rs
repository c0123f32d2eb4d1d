//! Test Path Value Object
//!
//! A root-anchored tuple of hierarchy segments. The first segment is always
//! [`TestPath::ROOT_SEGMENT`]; all tree lookups are keyed by this type.

use std::fmt;

/// Ordered, root-anchored sequence of hierarchy segments
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TestPath(Vec<String>);

impl TestPath {
    /// Marker used as the first segment of every path
    pub const ROOT_SEGMENT: &'static str = "<session>";

    /// The root path (a single root marker segment)
    pub fn root() -> Self {
        Self(vec![Self::ROOT_SEGMENT.to_string()])
    }

    /// Build a path from segments below the root
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = Self::root();
        path.0.extend(segments.into_iter().map(Into::into));
        path
    }

    /// Whether this is the root path
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Number of segments, root marker included
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// All segments, root marker included
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Last segment (the root marker for the root path)
    pub fn last(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or(Self::ROOT_SEGMENT)
    }

    /// New path with `name` appended
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    /// Parent path; the root is its own parent
    pub fn parent(&self) -> Self {
        if self.is_root() {
            return self.clone();
        }
        Self(self.0[..self.0.len() - 1].to_vec())
    }

    /// Every prefix from the root down to (and including) this path
    pub fn prefixes(&self) -> impl Iterator<Item = TestPath> + '_ {
        (1..=self.0.len()).map(move |n| Self(self.0[..n].to_vec()))
    }

    /// Whether `other` is this path or lies below it
    pub fn contains(&self, other: &TestPath) -> bool {
        other.0.len() >= self.0.len() && other.0[..self.0.len()] == self.0[..]
    }
}

impl fmt::Display for TestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, ".");
        }
        write!(f, "{}", self.0[1..].join("."))
    }
}
