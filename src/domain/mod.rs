//! Domain Layer
//!
//! The selection tree itself: pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Items, nodes, parametrized groups, the selection
//! - `value_objects/` - Immutable value types (TestPath, IndexSpec)
//! - `services/` - PathResolver, PathTree, TestSet, expressions
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Immutable tree** - Built once, then only borrowed
//! 3. **Ports & Adapters** - Collection, execution and persistence go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
