//! Readers for the two inputs of the join.
//!
//! - **Reference tables**: delimited text with a header line, optionally
//!   gzip/bgzip compressed
//! - **CADD streams**: tab-separated lines as written by CADD scoring tools,
//!   `#` lines are headers
//!
//! ## CADD Columns
//!
//! | Column | Content |
//! |--------|---------|
//! | 0 | Chrom |
//! | 1 | Pos |
//! | 2 | Ref |
//! | 3 | Alt |
//! | 4 | RawScore |
//! | 5 | PHRED |

use thiserror::Error;

pub mod reference;
pub mod stream;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reference table line {line} has {found} fields, at least {required} required by the column layout")]
    ReferenceRowTooShort {
        line: usize,
        found: usize,
        required: usize,
    },

    #[error("CADD stream line {line} has {found} fields, at least {required} required")]
    StreamRecordTooShort {
        line: usize,
        found: usize,
        required: usize,
    },
}

impl ParseError {
    /// True for errors caused by a single short row rather than by the input as a whole
    #[must_use]
    pub fn is_malformed_row(&self) -> bool {
        matches!(
            self,
            Self::ReferenceRowTooShort { .. } | Self::StreamRecordTooShort { .. }
        )
    }
}
