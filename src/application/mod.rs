//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SelectionSession` - Builds up a selection and turns it into an execution plan

pub mod session;

pub use session::{SelectionSession, SessionEnd};
