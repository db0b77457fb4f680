//! Running the binaries the way a user would.

extern crate tempfile;
#[macro_use] extern crate pretty_assertions;

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const STATS: &str = env!("CARGO_BIN_EXE_js-stats");
const MORPH_COUNT: &str = env!("CARGO_BIN_EXE_js-morph-count");

/// Run a binary in `dir`, feeding it `stdin`
fn run(bin: &str, dir: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut child = Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start binary");
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    let output = child.wait_with_output().expect("Failed to wait on binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// A pretokenized text and a known file in a fresh directory
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.txt"), "猫\n猫\n犬\n鳥\n猫\nを\n").unwrap();
    fs::write(dir.path().join("known.txt"), "鳥\n").unwrap();
    dir
}

const REPORT: &str = "\
Your current comprehension is 20%.
(You know 1 of 5 morphemes.)
80% comprehension is gained after unknown unique morpheme 1 of 2
85% comprehension is gained after unknown unique morpheme 2 of 2
90% comprehension is gained after unknown unique morpheme 2 of 2
95% comprehension is gained after unknown unique morpheme 2 of 2
98% comprehension is gained after unknown unique morpheme 2 of 2
99% comprehension is gained after unknown unique morpheme 2 of 2
1: 猫 3
2: 犬 1
";

#[test]
fn report_goes_to_stdout() {
    let dir = workspace();
    let (stdout, stderr, success) =
        run(STATS, dir.path(), &["--pretokenized", "-k", "known.txt", "in.txt"], "");
    assert!(success, "js-stats failed: {}", stderr);
    assert_eq!(stdout, REPORT);
}

#[test]
fn bare_outfile_flag_writes_stats_txt() {
    let dir = workspace();
    let (stdout, stderr, success) =
        run(STATS, dir.path(), &["--pretokenized", "-k", "known.txt", "in.txt", "-o"], "");
    assert!(success, "js-stats failed: {}", stderr);
    assert_eq!(stdout, "");
    assert_eq!(fs::read_to_string(dir.path().join("stats.txt")).unwrap(), REPORT);
}

#[test]
fn outfile_with_a_name() {
    let dir = workspace();
    let (_, stderr, success) = run(STATS, dir.path(),
        &["--pretokenized", "--outfile=report.txt", "-k", "known.txt", "in.txt"], "");
    assert!(success, "js-stats failed: {}", stderr);
    assert_eq!(fs::read_to_string(dir.path().join("report.txt")).unwrap(), REPORT);
    assert!(!dir.path().join("stats.txt").exists());
}

#[test]
fn dash_reads_stdin() {
    let dir = workspace();
    let (stdout, stderr, success) = run(STATS, dir.path(),
        &["--pretokenized", "-k", "known.txt", "-"], "猫\n猫\n犬\n鳥\n猫\nを\n");
    assert!(success, "js-stats failed: {}", stderr);
    assert_eq!(stdout, REPORT);
}

#[test]
fn top_limits_the_frequency_list() {
    let dir = workspace();
    let (stdout, stderr, success) =
        run(STATS, dir.path(), &["--pretokenized", "-n", "1", "in.txt"], "");
    assert!(success, "js-stats failed: {}", stderr);
    assert!(stdout.ends_with("unknown unique morpheme 3 of 3\n1: 猫 3\n"), "{}", stdout);
    assert!(!stdout.contains("2: "));
}

#[test]
fn format_overrides_the_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.txt"), "<p><ruby>猫<rt>ねこ</rt></ruby>と猫</p>").unwrap();
    let (stdout, stderr, success) = run(STATS, dir.path(), &["--format", "html", "page.txt"], "");
    assert!(success, "js-stats failed: {}", stderr);
    assert!(stdout.ends_with("1: 猫 2\n"), "{}", stdout);
    assert!(!stdout.contains("ねこ"));
}

#[test]
fn unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("book.epub"), "猫").unwrap();
    let (stdout, stderr, success) = run(STATS, dir.path(), &["book.epub"], "");
    assert!(!success);
    assert_eq!(stdout, "");
    assert!(stderr.contains("Unsupported input"), "{}", stderr);
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, success) = run(STATS, dir.path(), &["nowhere.txt"], "");
    assert!(!success);
    assert!(stderr.contains("input file"), "{}", stderr);
}

#[test]
fn no_japanese_says_so() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, success) = run(STATS, dir.path(), &[], "a b c\n");
    assert!(success);
    assert_eq!(stdout, "No valid Japanese morphemes found.\n");
}

#[test]
fn morph_count_pretokenized() {
    let dir = TempDir::new().unwrap();
    let (stdout, stderr, success) =
        run(MORPH_COUNT, dir.path(), &["--pretokenized"], "日本語\nを\n勉強\n。\nする\n");
    assert!(success, "js-morph-count failed: {}", stderr);
    assert_eq!(stdout, "3\n");
}

#[test]
fn morph_count_word_bounds() {
    let dir = TempDir::new().unwrap();
    // 猫 and コーヒー count; が, を and 。 don't
    let (stdout, stderr, success) = run(MORPH_COUNT, dir.path(), &[], "猫がコーヒーを。\n");
    assert!(success, "js-morph-count failed: {}", stderr);
    assert_eq!(stdout, "2\n");
}
