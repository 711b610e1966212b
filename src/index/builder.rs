use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::columns::ColumnLayout;
use crate::core::config::JoinConfig;
use crate::core::key::{normalize_chromosome, JoinKey};
use crate::core::types::MalformedRowPolicy;
use crate::parsing::reference::open_reference;
use crate::parsing::ParseError;

use super::store::ReferenceIndex;

/// Counters collected while indexing a reference table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Data lines read, excluding the header
    pub rows_read: usize,
    /// Rows whose key replaced an earlier row with the same key
    pub duplicates_overwritten: usize,
    /// Short rows skipped under [`MalformedRowPolicy::Skip`]
    pub rows_skipped: usize,
}

/// A fully indexed reference table
#[derive(Debug)]
pub struct LoadedReference {
    /// First line of the table, never indexed; `None` for an empty table
    pub header: Option<String>,
    pub index: ReferenceIndex,
    pub stats: BuildStats,
}

/// Builds a [`ReferenceIndex`] from the lines of a reference table
pub struct IndexBuilder<'a> {
    columns: ColumnLayout,
    separator: &'a str,
    policy: MalformedRowPolicy,
}

impl<'a> IndexBuilder<'a> {
    #[must_use]
    pub fn new(columns: ColumnLayout, separator: &'a str, policy: MalformedRowPolicy) -> Self {
        Self {
            columns,
            separator,
            policy,
        }
    }

    #[must_use]
    pub fn from_config(config: &'a JoinConfig) -> Self {
        Self::new(config.columns, &config.separator, config.malformed_rows)
    }

    /// Compute the normalized join key of one reference row.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::ReferenceRowTooShort` if the row lacks any of the
    /// configured columns.
    pub fn row_key(&self, line: &str, line_num: usize) -> Result<JoinKey, ParseError> {
        let fields: Vec<&str> = line.split(self.separator).collect();
        let [chrom, pos, ref_allele, alt_allele] =
            self.columns.extract(&fields).ok_or_else(|| {
                ParseError::ReferenceRowTooShort {
                    line: line_num,
                    found: fields.len(),
                    required: self.columns.required_fields(),
                }
            })?;

        let chrom = normalize_chromosome(chrom);
        Ok(JoinKey::from_parts(
            &chrom,
            pos,
            ref_allele,
            alt_allele,
            self.separator,
        ))
    }

    /// Read the whole table and index every data row.
    ///
    /// Short rows, blank ones included, abort the build under
    /// [`MalformedRowPolicy::Fail`] and are skipped with a warning under
    /// [`MalformedRowPolicy::Skip`]. An empty table yields no header and an
    /// empty index.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` on read failures, or
    /// `ParseError::ReferenceRowTooShort` for a short row when failing fast.
    pub fn build<R: BufRead>(&self, reader: R) -> Result<LoadedReference, ParseError> {
        let mut lines = reader.lines();
        let header = lines.next().transpose()?;

        let mut index = ReferenceIndex::new();
        let mut stats = BuildStats::default();

        for (i, line) in lines.enumerate() {
            let line = line?;
            // Line numbers in errors are 1-based and count the header
            let line_num = i + 2;
            stats.rows_read += 1;

            let key = match self.row_key(&line, line_num) {
                Ok(key) => key,
                Err(e) if self.policy == MalformedRowPolicy::Skip => {
                    warn!("{e}, skipping");
                    stats.rows_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if index.insert(key, line) {
                debug!(line = line_num, "Duplicate variant key, earlier reference row replaced");
                stats.duplicates_overwritten += 1;
            }
        }

        if header.is_none() {
            warn!("Reference table is empty");
        }
        info!(
            "Indexed {} reference variants from {} rows",
            index.len(),
            stats.rows_read
        );

        Ok(LoadedReference {
            header,
            index,
            stats,
        })
    }
}

/// Open the reference table named in `config` and index it
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read, or any
/// error from [`IndexBuilder::build`].
pub fn load_reference(config: &JoinConfig) -> Result<LoadedReference, ParseError> {
    let reader = open_reference(&config.reference)?;
    IndexBuilder::from_config(config).build(reader)
}
