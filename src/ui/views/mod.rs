pub mod items;
pub mod selection;
pub mod snapshots;
pub mod tree;

/// `1 test`, `3 tests`
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 test".to_string()
    } else {
        format!("{} tests", count)
    }
}
