//! End-to-end tests of the `cadd-filter` binary.
//!
//! `write_stdin` connects the child's standard input to a pipe, which is what
//! the filter expects in production.

use std::fs::File;
use std::io::Write;
use std::process::Stdio;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const REFERENCE: &str = "CHROM\tPOS\tREF\tALT\tINFO\n\
                         chr1\t100\tA\tG\tfoo\n\
                         2\t200\tC\tT\tbar\n";

const STREAM: &str = "#hdr\n1\t100\tA\tG\t5.0\t0.9\n3\t300\tG\tC\t1.0\t0.1\n";

fn reference_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write reference");
    file
}

fn cadd_filter() -> Command {
    let mut cmd = Command::cargo_bin("cadd-filter").expect("binary should build");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_scenario_output() {
    let reference = reference_file(".tsv", REFERENCE);

    cadd_filter()
        .arg(reference.path())
        .write_stdin(STREAM)
        .assert()
        .success()
        .stdout(
            "#Data header: CHROM\tPOS\tREF\tALT\tINFO\n\
             #CADD header: #hdr\n\
             chr1\t100\tA\tG\tfoo\t5.0\t0.9\n\
             2\t200\tC\tT\tbar\n",
        )
        .stderr(predicate::str::contains("Some entries were not found."));
}

#[test]
fn test_all_matched_has_no_notice() {
    let reference = reference_file(".tsv", REFERENCE);

    cadd_filter()
        .arg(reference.path())
        .write_stdin("1\t100\tA\tG\t5.0\t0.9\n2\t200\tC\tT\t0.3\t4.2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2\t200\tC\tT\tbar\t0.3\t4.2\n"))
        .stderr(predicate::str::contains("not found").not());
}

#[test]
fn test_columns_and_separator() {
    let reference = reference_file(
        ".csv",
        "id,chrom,pos,gene,ref,alt\nrs1,Chr7,55,EGFR,G,A\nrs2,chr7,60,EGFR,T,C\n",
    );

    cadd_filter()
        .arg(reference.path())
        .args(["1", "2", "4", "5", ","])
        .write_stdin("7\t55\tG\tA\t4.1\t33\n")
        .assert()
        .success()
        .stdout(
            "#Data header: id,chrom,pos,gene,ref,alt\n\
             rs1,Chr7,55,EGFR,G,A,4.1,33\n\
             rs2,chr7,60,EGFR,T,C\n",
        );
}

#[test]
fn test_escaped_tab_separator() {
    let reference = reference_file(".tsv", REFERENCE);

    cadd_filter()
        .arg(reference.path())
        .args(["0", "1", "2", "3", "\\t"])
        .write_stdin("2\t200\tC\tT\t0.3\t4.2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2\t200\tC\tT\tbar\t0.3\t4.2\n"));
}

#[test]
fn test_gzipped_reference() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let file = NamedTempFile::with_suffix(".tsv.gz").expect("Failed to create temp file");
    let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
    encoder.write_all(REFERENCE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    cadd_filter()
        .arg(file.path())
        .write_stdin(STREAM)
        .assert()
        .success()
        .stdout(predicate::str::contains("chr1\t100\tA\tG\tfoo\t5.0\t0.9\n"));
}

#[test]
fn test_partial_columns_is_usage_error() {
    let reference = reference_file(".tsv", REFERENCE);

    cadd_filter()
        .arg(reference.path())
        .args(["0", "1"])
        .write_stdin(STREAM)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_reference_argument_is_usage_error() {
    cadd_filter()
        .write_stdin(STREAM)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

/// The binary with stdin attached directly to `stdin`, bypassing the pipe
/// assert_cmd would otherwise set up
fn cadd_filter_with_stdin(stdin: Stdio) -> std::process::Command {
    let mut cmd = std::process::Command::new(cargo_bin("cadd-filter"));
    cmd.env_remove("RUST_LOG").stdin(stdin);
    cmd
}

#[test]
fn test_file_redirect_is_usage_error() {
    let reference = reference_file(".tsv", REFERENCE);
    let stream = reference_file(".cadd.tsv", STREAM);
    let stdin = File::open(stream.path()).expect("Failed to open stream file");

    let output = cadd_filter_with_stdin(Stdio::from(stdin))
        .arg(reference.path())
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
    assert!(stderr.contains("regular file"), "stderr: {stderr}");
}

#[test]
fn test_null_stdin_is_usage_error() {
    let reference = reference_file(".tsv", REFERENCE);

    let output = cadd_filter_with_stdin(Stdio::null())
        .arg(reference.path())
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn test_allow_non_pipe_accepts_file() {
    let reference = reference_file(".tsv", REFERENCE);
    let stream = reference_file(".cadd.tsv", STREAM);
    let stdin = File::open(stream.path()).expect("Failed to open stream file");

    cadd_filter_with_stdin(Stdio::from(stdin))
        .arg(reference.path())
        .arg("--allow-non-pipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("chr1\t100\tA\tG\tfoo\t5.0\t0.9\n"));
}

#[test]
fn test_missing_reference_file_is_fatal() {
    cadd_filter()
        .arg("/nonexistent/variants.tsv")
        .write_stdin(STREAM)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to load reference table"));
}

#[test]
fn test_short_reference_row_is_fatal() {
    let reference = reference_file(".tsv", "CHROM\tPOS\tREF\tALT\nchr1\t100\tA\n");

    cadd_filter()
        .arg(reference.path())
        .write_stdin(STREAM)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_short_reference_row_skipped() {
    let reference = reference_file(".tsv", "CHROM\tPOS\tREF\tALT\nchr1\t100\tA\n1\t100\tA\tG\n");

    cadd_filter()
        .arg(reference.path())
        .arg("--skip-malformed")
        .write_stdin(STREAM)
        .assert()
        .success()
        .stdout("#Data header: CHROM\tPOS\tREF\tALT\n#CADD header: #hdr\n1\t100\tA\tG\t5.0\t0.9\n");
}

#[test]
fn test_blank_reference_row_is_fatal() {
    let reference = reference_file(".tsv", "CHROM\tPOS\tREF\tALT\nchr1\t100\tA\tG\n\n");

    cadd_filter()
        .arg(reference.path())
        .write_stdin(STREAM)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 3 has 1 fields"));
}

#[test]
fn test_blank_stream_line_skipped() {
    let reference = reference_file(".tsv", REFERENCE);

    cadd_filter()
        .arg(reference.path())
        .arg("--skip-malformed")
        .write_stdin("\n1\t100\tA\tG\t5.0\t0.9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("chr1\t100\tA\tG\tfoo\t5.0\t0.9\n"));
}

#[test]
fn test_empty_reference_passes_stream_through() {
    let reference = reference_file(".tsv", "");

    cadd_filter()
        .arg(reference.path())
        .write_stdin(STREAM)
        .assert()
        .success()
        .stdout("#CADD header: #hdr\n");
}

#[test]
fn test_backslash_separator_used_verbatim() {
    let reference = reference_file(".txt", "c\\p\\r\\a\nchr1\\100\\A\\G\n");

    cadd_filter()
        .arg(reference.path())
        .args(["0", "1", "2", "3", "\\"])
        .write_stdin("1\t100\tA\tG\t5.0\t0.9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("chr1\\100\\A\\G\\5.0\\0.9\n"));
}

#[test]
fn test_short_stream_record_is_fatal_after_partial_output() {
    let reference = reference_file(".tsv", REFERENCE);

    cadd_filter()
        .arg(reference.path())
        .write_stdin("1\t100\tA\tG\t5.0\t0.9\n2\t200\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("chr1\t100\tA\tG\tfoo\t5.0\t0.9\n"))
        .stderr(predicate::str::contains("CADD stream line 2"));
}

#[test]
fn test_summary_file() {
    let reference = reference_file(".tsv", REFERENCE);
    let dir = tempfile::tempdir().unwrap();
    let summary_path = dir.path().join("summary.json");

    cadd_filter()
        .arg(reference.path())
        .arg("--summary")
        .arg(&summary_path)
        .write_stdin(STREAM)
        .assert()
        .success();

    let text = std::fs::read_to_string(&summary_path).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(summary["reference_variants"], 2);
    assert_eq!(summary["matched"], 1);
    assert_eq!(summary["dropped"], 1);
    assert_eq!(summary["unmatched"], 1);
    assert_eq!(summary["stream_headers"], 1);
}
