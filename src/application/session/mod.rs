//! Selection Session Use Case
//!
//! One interactive selection over a collected tree:
//! - add / exclude test sets named by expressions
//! - remove by position, show, clear
//! - save and restore named selections
//! - finish into an execution plan

mod use_case;

pub use use_case::{SelectionSession, SessionEnd};
