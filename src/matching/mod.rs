//! Streaming join of CADD scores onto reference rows.
//!
//! - [`StreamMatcher`]: consumes the stream line by line against a reference index
//! - [`JoinSummary`]: counters for a finished run
//!
//! ## Output
//!
//! Lines are written in this order:
//!
//! 1. `#Data header: <reference header>`
//! 2. `#CADD header: <line>` for each `#` line of the stream, as it arrives
//! 3. `<reference row><sep><RawScore><sep><PHRED>` for each match, as it arrives
//! 4. every unmatched reference row, verbatim, in file order
//!
//! ## Example
//!
//! ```rust
//! use cadd_filter::core::JoinConfig;
//! use cadd_filter::index::IndexBuilder;
//! use cadd_filter::matching::join_reference;
//!
//! let config = JoinConfig::new("variants.tsv");
//! let table = "CHROM\tPOS\tREF\tALT\nchr1\t100\tA\tG\n";
//! let reference = IndexBuilder::from_config(&config).build(table.as_bytes()).unwrap();
//!
//! let mut out = Vec::new();
//! let stream = "1\t100\tA\tG\t5.0\t0.9\n";
//! let summary = join_reference(reference, &config, stream.as_bytes(), &mut out).unwrap();
//!
//! assert_eq!(summary.matched, 1);
//! assert!(String::from_utf8(out).unwrap().contains("chr1\t100\tA\tG\t5.0\t0.9"));
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::core::config::{ConfigError, JoinConfig};
use crate::index::builder::{load_reference, LoadedReference};
use crate::parsing::ParseError;

pub mod matcher;
pub mod summary;

pub use matcher::{StreamMatcher, CADD_HEADER_PREFIX, DATA_HEADER_PREFIX};
pub use summary::JoinSummary;

#[derive(Error, Debug)]
pub enum JoinError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to load reference table {}", path.display())]
    Reference {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to read CADD stream: {0}")]
    StreamRead(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

/// Join an already loaded reference against a stream
///
/// # Errors
///
/// Returns any error from [`StreamMatcher`].
pub fn join_reference<R: BufRead, W: Write>(
    reference: LoadedReference,
    config: &JoinConfig,
    stream: R,
    out: W,
) -> Result<JoinSummary, JoinError> {
    let mut matcher = StreamMatcher::new(reference, &config.separator, config.malformed_rows, out)?;
    matcher.run(stream)?;
    matcher.finish()
}

/// Load the reference table named in `config`, then join the stream against it
///
/// # Errors
///
/// Returns `JoinError::Config` for an invalid configuration,
/// `JoinError::Reference` if the reference cannot be opened or indexed, or any
/// error from
/// [`join_reference`].
pub fn run_join<R: BufRead, W: Write>(
    config: &JoinConfig,
    stream: R,
    out: W,
) -> Result<JoinSummary, JoinError> {
    config.validate()?;

    info!("filter separator: {:?}", config.separator);
    info!("reference columns: {}", config.columns);

    let reference = load_reference(config).map_err(|source| JoinError::Reference {
        path: config.reference.clone(),
        source,
    })?;
    join_reference(reference, config, stream, out)
}
