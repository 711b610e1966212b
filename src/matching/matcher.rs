use std::io::{BufRead, Write};

use tracing::{debug, error, warn};

use crate::core::types::MalformedRowPolicy;
use crate::index::builder::LoadedReference;
use crate::index::store::ReferenceIndex;
use crate::parsing::stream::{parse_stream_line, trim_line_terminator, StreamLine};

use super::summary::JoinSummary;
use super::JoinError;

/// Prefix for the reference table header in the output
pub const DATA_HEADER_PREFIX: &str = "#Data header: ";

/// Prefix for `#` lines passed through from the CADD stream
pub const CADD_HEADER_PREFIX: &str = "#CADD header: ";

/// Matches CADD stream records against a [`ReferenceIndex`] and writes the
/// annotated rows.
///
/// Records are handled one at a time as they are read, so the stream may be
/// an unbounded pipe. Matched rows are written immediately; unmatched
/// reference rows are written by [`StreamMatcher::finish`].
pub struct StreamMatcher<'a, W: Write> {
    index: ReferenceIndex,
    separator: &'a str,
    policy: MalformedRowPolicy,
    out: W,
    summary: JoinSummary,
}

impl<'a, W: Write> StreamMatcher<'a, W> {
    /// Take ownership of a loaded reference and write its header line, if
    /// the table had one.
    ///
    /// # Errors
    ///
    /// Returns `JoinError::Write` if the header cannot be written.
    pub fn new(
        reference: LoadedReference,
        separator: &'a str,
        policy: MalformedRowPolicy,
        mut out: W,
    ) -> Result<Self, JoinError> {
        if let Some(header) = &reference.header {
            writeln!(out, "{DATA_HEADER_PREFIX}{header}").map_err(JoinError::Write)?;
        }

        let summary = JoinSummary {
            reference_variants: reference.index.len(),
            reference: reference.stats,
            ..JoinSummary::default()
        };

        Ok(Self {
            index: reference.index,
            separator,
            policy,
            out,
            summary,
        })
    }

    /// Handle one stream line (without terminator). `line_num` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns `JoinError::Parse` for a short record when failing fast, or
    /// `JoinError::Write` if output cannot be written.
    pub fn process_line(&mut self, line: &str, line_num: usize) -> Result<(), JoinError> {
        let record = match parse_stream_line(line, line_num) {
            Ok(StreamLine::Header(header)) => {
                self.summary.stream_headers += 1;
                writeln!(self.out, "{CADD_HEADER_PREFIX}{header}").map_err(JoinError::Write)?;
                return Ok(());
            }
            Ok(StreamLine::Record(record)) => record,
            Err(e) if e.is_malformed_row() && self.policy == MalformedRowPolicy::Skip => {
                warn!("{e}, skipping");
                self.summary.stream_records_skipped += 1;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        self.summary.stream_records += 1;
        let key = record.key(self.separator);
        match self.index.consume(&key) {
            Some(reference_line) => {
                writeln!(
                    self.out,
                    "{reference_line}{}{}",
                    self.separator,
                    record.score_suffix(self.separator)
                )
                .map_err(JoinError::Write)?;
                self.summary.matched += 1;
            }
            None => self.summary.dropped += 1,
        }
        Ok(())
    }

    /// Process every line of `reader` until end of data.
    ///
    /// # Errors
    ///
    /// Returns `JoinError::StreamRead` on any read failure other than end of
    /// data, or any error from [`StreamMatcher::process_line`]. Rows written
    /// before the failure stay written.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> Result<(), JoinError> {
        let mut buf = String::new();
        let mut line_num = 0;
        loop {
            buf.clear();
            let n = reader.read_line(&mut buf).map_err(JoinError::StreamRead)?;
            if n == 0 {
                break;
            }
            line_num += 1;
            self.process_line(trim_line_terminator(&buf), line_num)?;
        }
        debug!("CADD stream ended after {line_num} lines");
        Ok(())
    }

    /// Write every reference row that was never matched, in file order, and
    /// flush the output.
    ///
    /// Unmatched rows are not an error; they are logged once at error level.
    ///
    /// # Errors
    ///
    /// Returns `JoinError::Write` if output cannot be written.
    pub fn finish(mut self) -> Result<JoinSummary, JoinError> {
        for entry in self.index.pending() {
            writeln!(self.out, "{}", entry.line).map_err(JoinError::Write)?;
            self.summary.unmatched += 1;
        }
        self.out.flush().map_err(JoinError::Write)?;

        if self.summary.has_unmatched() {
            error!("Some entries were not found.");
        }
        Ok(self.summary)
    }
}
