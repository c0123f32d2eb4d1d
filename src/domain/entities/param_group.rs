//! Parameterized group - the instances of one parametrized test function
//!
//! All instances share one parent path and one base name; each is keyed by
//! its sanitized parametrization id, in collection order.

use crate::domain::value_objects::TestPath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterizedGroup {
    name: String,
    parent: TestPath,
    /// (instance key, item index) in first-seen order
    instances: Vec<(String, usize)>,
}

impl ParameterizedGroup {
    pub fn new(parent: TestPath, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent,
            instances: Vec::new(),
        }
    }

    /// Base function name (the path segment of the group)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the enclosing module/class
    pub fn parent(&self) -> &TestPath {
        &self.parent
    }

    /// Path of the group itself
    pub fn path(&self) -> TestPath {
        self.parent.join(&self.name)
    }

    /// Register an instance; returns the key actually used.
    ///
    /// Distinct ids can sanitize to one key (`a-b`, `a_b`); later arrivals get
    /// a numeric suffix so every instance keeps its own path.
    pub fn insert(&mut self, key: &str, item: usize) -> String {
        let mut candidate = key.to_string();
        let mut n = 2;
        while self.get(&candidate).is_some() {
            candidate = format!("{}_{}", key, n);
            n += 1;
        }
        self.instances.push((candidate.clone(), item));
        candidate
    }

    /// Item index for an instance key
    pub fn get(&self, key: &str) -> Option<usize> {
        self.instances
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, idx)| *idx)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.instances.iter().map(|(k, _)| k.as_str())
    }

    pub fn item_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.instances.iter().map(|(_, idx)| *idx)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut group = ParameterizedGroup::new(TestPath::from_segments(["mod_a"]), "test_x");
        group.insert("_2", 7);
        group.insert("_1", 3);
        assert_eq!(group.keys().collect::<Vec<_>>(), vec!["_2", "_1"]);
        assert_eq!(group.get("_1"), Some(3));
        assert_eq!(group.path(), TestPath::from_segments(["mod_a", "test_x"]));
    }

    #[test]
    fn colliding_keys_get_suffix() {
        let mut group = ParameterizedGroup::new(TestPath::root(), "test_m");
        assert_eq!(group.insert("a_b", 0), "a_b");
        assert_eq!(group.insert("a_b", 1), "a_b_2");
        assert_eq!(group.insert("a_b", 2), "a_b_3");
        assert_eq!(group.len(), 3);
    }
}
