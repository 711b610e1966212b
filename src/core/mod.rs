//! Core data types for the variant join.
//!
//! - [`JoinKey`]: chromosome, position, ref and alt joined with the table separator
//! - [`ColumnLayout`]: where those four fields live in the reference table
//! - [`JoinConfig`]: the resolved run configuration
//! - [`MalformedRowPolicy`]: fail-fast or skip for short rows
//!
//! ## Chromosome Naming
//!
//! Reference tables may use UCSC names while CADD uses NCBI names:
//!
//! | Source | Chromosome 1 | X    |
//! |--------|--------------|------|
//! | UCSC   | chr1         | chrX |
//! | CADD   | 1            | X    |
//!
//! Reference rows are normalized with [`key::normalize_chromosome`] when the
//! index is built. Stream records are matched literally.

pub mod columns;
pub mod config;
pub mod key;
pub mod types;

pub use columns::ColumnLayout;
pub use config::JoinConfig;
pub use key::JoinKey;
pub use types::MalformedRowPolicy;
