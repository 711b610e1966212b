//! # cadd-filter
//!
//! Annotate a table of genomic variants with CADD scores streamed from a pipe.
//!
//! CADD scoring tools write one tab-separated line per scored variant
//! (`Chrom`, `Pos`, `Ref`, `Alt`, `RawScore`, `PHRED`). `cadd-filter` loads a
//! user's variant table into memory, reads the CADD output line by line as it
//! is produced, and appends the two scores to each table row whose variant
//! appears in the stream. Rows that never get a score are written unchanged
//! at the end.
//!
//! ## Features
//!
//! - **Streaming**: the CADD output is never buffered, only the table is
//! - **Chromosome normalization**: `chr1`, `Chr1` and `1` all match CADD's `1`
//! - **Configurable table layout**: any four columns, any separator
//! - **Deterministic reporting**: unmatched rows come out in table order
//! - **Gzip tables**: `.gz` and `.bgz` tables are decompressed on the fly
//!
//! ## Example
//!
//! ```rust
//! use cadd_filter::{IndexBuilder, JoinConfig, StreamMatcher};
//!
//! let config = JoinConfig::new("variants.tsv");
//! let table = "CHROM\tPOS\tREF\tALT\tGENE\nchr1\t100\tA\tG\tFOO\n";
//! let reference = IndexBuilder::from_config(&config).build(table.as_bytes()).unwrap();
//!
//! let mut out = Vec::new();
//! let mut matcher =
//!     StreamMatcher::new(reference, &config.separator, config.malformed_rows, &mut out).unwrap();
//! matcher.process_line("1\t100\tA\tG\t3.1\t24.7", 1).unwrap();
//! let summary = matcher.finish().unwrap();
//!
//! assert_eq!(summary.matched, 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Join keys, column layout and run configuration
//! - [`index`]: Reference table index
//! - [`matching`]: Streaming matcher and run summary
//! - [`parsing`]: Reference table and CADD stream readers
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Standard input inspection

pub mod cli;
pub mod core;
pub mod index;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::{ColumnLayout, JoinConfig, JoinKey, MalformedRowPolicy};
pub use index::{IndexBuilder, LoadedReference, ReferenceIndex};
pub use matching::{run_join, JoinError, JoinSummary, StreamMatcher};
pub use parsing::ParseError;
