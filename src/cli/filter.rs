use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};

use crate::cli::Cli;
use crate::matching::run_join;
use crate::utils::stdin::stdin_kind;

/// Printed when standard input is not a pipe
pub const USAGE: &str = "Usage: <program that writes CADD data to stdout> | cadd-filter <input.tsv> <CHROM col> <POS col> <REF col> <ALT col> <sep>";

/// Exit status for usage errors, the same one clap uses
const USAGE_EXIT_CODE: u8 = 2;

/// Execute the filter
///
/// Returns exit status 2 without reading anything when standard input is not
/// a pipe. Unmatched reference rows do not affect the exit status.
///
/// # Errors
///
/// Returns an error if the reference table cannot be loaded, the stream cannot
/// be read, output cannot be written, or the summary file cannot be written.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    if !cli.allow_non_pipe {
        let kind = stdin_kind().context("Failed to inspect standard input")?;
        if !kind.is_pipe() {
            error!(stdin = %kind, "{USAGE}");
            return Ok(ExitCode::from(USAGE_EXIT_CODE));
        }
    }

    let config = cli.to_config();
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let summary = run_join(&config, stdin, stdout)?;

    info!(
        "Matched {} of {} reference variants ({} stream records dropped)",
        summary.matched, summary.reference_variants, summary.dropped
    );

    if let Some(path) = &cli.summary {
        summary
            .write_json(path)
            .with_context(|| format!("Failed to write summary {}", path.display()))?;
    }

    Ok(ExitCode::SUCCESS)
}
