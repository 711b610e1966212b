//! Opening reference tables.
//!
//! Supported inputs:
//! - plain delimited text (`.tsv`, `.csv`, `.txt`, anything else)
//! - gzip or bgzip compressed text (`.gz`, `.bgz`)

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::parsing::ParseError;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a reference table for line-by-line reading
///
/// bgzip files are a series of gzip members, so a multi-member decoder is used
/// for both compressed flavours.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_reference(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
