use std::path::Path;

use serde::Serialize;

use crate::index::builder::BuildStats;

/// Counters describing one complete join run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinSummary {
    /// Distinct variant keys in the reference index
    pub reference_variants: usize,

    #[serde(flatten)]
    pub reference: BuildStats,

    /// `#` lines passed through from the stream
    pub stream_headers: usize,

    /// Data lines read from the stream
    pub stream_records: usize,

    /// Stream records that claimed a reference row
    pub matched: usize,

    /// Stream records with an unknown or already matched key
    pub dropped: usize,

    /// Short stream records skipped under the skip policy
    pub stream_records_skipped: usize,

    /// Reference rows never matched, emitted without scores
    pub unmatched: usize,
}

impl JoinSummary {
    #[must_use]
    pub fn has_unmatched(&self) -> bool {
        self.unmatched > 0
    }

    /// Write the summary as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or serialization fails.
    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
