//! Command-line interface for cadd-filter.
//!
//! The arguments are positional, matching how the tool is dropped into
//! existing shell pipelines:
//!
//! ```text
//! cadd-filter <REFERENCE> [CHROM_COL POS_COL REF_COL ALT_COL [SEP]]
//! ```
//!
//! ## Usage
//!
//! ```text
//! # Annotate a tab-separated table, variant columns 0-3
//! CADD.sh -o /dev/stdout variants.vcf | cadd-filter variants.tsv
//!
//! # Columns 1, 2, 4, 5 of a comma-separated table
//! zcat scores.tsv.gz | cadd-filter variants.csv 1 2 4 5 ,
//!
//! # Keep going past short rows and write run counters
//! zcat scores.tsv.gz | cadd-filter variants.tsv --skip-malformed --summary run.json
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::core::columns::ColumnLayout;
use crate::core::config::JoinConfig;
use crate::core::types::MalformedRowPolicy;

pub mod filter;

#[derive(Parser, Debug)]
#[command(name = "cadd-filter")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Annotate a variant table with CADD scores read from a pipe")]
#[command(
    long_about = "cadd-filter joins a variant table against CADD output streamed on standard input.\n\nThe table is loaded into memory first. Each scored variant read from the pipe that matches a table row is written as that row followed by the RawScore and PHRED columns. Table rows that were never scored are written, unchanged, once the stream ends.\n\nChromosome names in the table are upper-cased and stripped of 'chr' before matching, so UCSC-style tables match CADD's NCBI-style names."
)]
pub struct Cli {
    /// Reference table (first line is a header). May be gzip/bgzip compressed.
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Zero-based chromosome column [default: 0]
    #[arg(value_name = "CHROM_COL", requires = "pos_col")]
    pub chrom_col: Option<usize>,

    /// Zero-based position column [default: 1]
    #[arg(value_name = "POS_COL", requires = "ref_col")]
    pub pos_col: Option<usize>,

    /// Zero-based reference allele column [default: 2]
    #[arg(value_name = "REF_COL", requires = "alt_col")]
    pub ref_col: Option<usize>,

    /// Zero-based alternate allele column [default: 3]
    #[arg(value_name = "ALT_COL")]
    pub alt_col: Option<usize>,

    /// Field separator of the reference table; the exact string `\t` means tab [default: tab]
    #[arg(value_name = "SEP", value_parser = parse_separator)]
    pub separator: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip rows with too few fields instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Write run counters as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Accept a regular file or terminal on standard input
    #[arg(long)]
    pub allow_non_pipe: bool,
}

impl Cli {
    /// Column layout from the positional columns, or the default layout
    #[must_use]
    pub fn columns(&self) -> ColumnLayout {
        match (self.chrom_col, self.pos_col, self.ref_col, self.alt_col) {
            (Some(chrom), Some(pos), Some(ref_allele), Some(alt_allele)) => {
                ColumnLayout::new(chrom, pos, ref_allele, alt_allele)
            }
            _ => ColumnLayout::default(),
        }
    }

    #[must_use]
    pub fn to_config(&self) -> JoinConfig {
        let policy = if self.skip_malformed {
            MalformedRowPolicy::Skip
        } else {
            MalformedRowPolicy::Fail
        };

        let mut config = JoinConfig::new(&self.reference)
            .with_columns(self.columns())
            .with_malformed_rows(policy);
        if let Some(sep) = &self.separator {
            config = config.with_separator(sep.clone());
        }
        config
    }
}

/// Parse a separator argument.
///
/// The exact string `\t` stands for a tab, since a literal tab is awkward to
/// type in a shell. Anything else is used verbatim.
fn parse_separator(s: &str) -> Result<String, String> {
    match s {
        "" => Err("separator must not be empty".to_string()),
        r"\t" => Ok("\t".to_string()),
        _ => Ok(s.to_string()),
    }
}
