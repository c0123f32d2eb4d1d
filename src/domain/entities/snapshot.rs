//! Snapshot entity
//!
//! Named lists of previously selected node ids. Ids are resolved against the
//! current collection when loaded; stale ones are dropped there, not here.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub name: String,
    pub node_ids: Vec<String>,
    pub saved_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(name: impl Into<String>, node_ids: Vec<String>) -> Self {
        Self {
            name: name.into(),
            node_ids,
            saved_at: Utc::now(),
        }
    }
}

/// All stored snapshots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotBook {
    pub version: u32,
    pub snapshots: Vec<Snapshot>,
}

impl SnapshotBook {
    pub fn new() -> Self {
        Self {
            version: 1,
            snapshots: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Snapshot> {
        self.snapshots.iter().find(|s| s.name == name)
    }

    pub fn upsert(&mut self, snapshot: Snapshot) {
        if let Some(existing) = self.snapshots.iter_mut().find(|s| s.name == snapshot.name) {
            *existing = snapshot;
        } else {
            self.snapshots.push(snapshot);
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let len_before = self.snapshots.len();
        self.snapshots.retain(|s| s.name != name);
        self.snapshots.len() != len_before
    }

    pub fn all(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_by_name() {
        let mut book = SnapshotBook::new();
        book.upsert(Snapshot::new("smoke", vec!["a.py::t1".into()]));
        book.upsert(Snapshot::new("smoke", vec!["a.py::t2".into()]));

        assert_eq!(book.all().len(), 1);
        assert_eq!(book.get("smoke").unwrap().node_ids, vec!["a.py::t2"]);
    }

    #[test]
    fn remove_reports_presence() {
        let mut book = SnapshotBook::new();
        book.upsert(Snapshot::new("smoke", Vec::new()));

        assert!(book.remove("smoke"));
        assert!(!book.remove("smoke"));
    }
}
