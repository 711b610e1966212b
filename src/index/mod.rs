//! In-memory index of the reference table.
//!
//! - [`builder`]: reads the table and computes a normalized key per row
//! - [`store`]: key lookup plus file-order iteration
//! - [`entry`]: a row and its pending/consumed state

pub mod builder;
pub mod entry;
pub mod store;

pub use builder::{load_reference, BuildStats, IndexBuilder, LoadedReference};
pub use entry::{EntryState, IndexEntry};
pub use store::ReferenceIndex;
