pub mod collection;
pub mod items;
pub mod select;
pub mod snapshot;
pub mod tree;
