use crate::core::key::JoinKey;
use crate::parsing::ParseError;

/// CADD output is always tab-separated, whatever the reference table uses
pub const STREAM_DELIMITER: char = '\t';

/// Fields needed on a data line: four key fields plus two scores
pub const STREAM_MIN_FIELDS: usize = 6;

/// Prefix marking header lines in the stream
pub const STREAM_HEADER_MARKER: char = '#';

/// One classified line of the CADD stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamLine<'a> {
    /// A `#` line, passed through untouched
    Header(&'a str),
    /// A scored variant
    Record(StreamRecord<'a>),
}

/// A scored variant borrowed from a stream line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRecord<'a> {
    pub chrom: &'a str,
    pub pos: &'a str,
    pub ref_allele: &'a str,
    pub alt_allele: &'a str,
    pub raw_score: &'a str,
    pub phred: &'a str,
}

impl StreamRecord<'_> {
    /// Join key for this record, built with the reference table separator.
    ///
    /// The chromosome is used as written; CADD already uses the normalized
    /// naming that reference keys are converted to.
    #[must_use]
    pub fn key(&self, sep: &str) -> JoinKey {
        JoinKey::from_parts(self.chrom, self.pos, self.ref_allele, self.alt_allele, sep)
    }

    /// The two scores joined with the reference table separator
    #[must_use]
    pub fn score_suffix(&self, sep: &str) -> String {
        [self.raw_score, self.phred].join(sep)
    }
}

/// Classify and split one stream line (without its line terminator).
///
/// `line_num` is 1-based and only used for error reporting.
///
/// # Errors
///
/// Returns `ParseError::StreamRecordTooShort` if a data line has fewer than
/// six tab-separated fields. A blank line is a data line with one field.
pub fn parse_stream_line(line: &str, line_num: usize) -> Result<StreamLine<'_>, ParseError> {
    if line.starts_with(STREAM_HEADER_MARKER) {
        return Ok(StreamLine::Header(line));
    }

    let fields: Vec<&str> = line.split(STREAM_DELIMITER).collect();
    if fields.len() < STREAM_MIN_FIELDS {
        return Err(ParseError::StreamRecordTooShort {
            line: line_num,
            found: fields.len(),
            required: STREAM_MIN_FIELDS,
        });
    }

    Ok(StreamLine::Record(StreamRecord {
        chrom: fields[0],
        pos: fields[1],
        ref_allele: fields[2],
        alt_allele: fields[3],
        raw_score: fields[4],
        phred: fields[5],
    }))
}

/// Strip a trailing `\n` or `\r\n` from a line read with `read_line`
#[must_use]
pub fn trim_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
