//! Hygiene: source-level budgets checked at test time.
//!
//! Scans production files under `src/` (sibling `*_test.rs` files are
//! skipped) for patterns the crate does not allow. Every budget is zero; a
//! new hit means fixing the code, not raising the number.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Pattern, budget, and what a hit means.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the process"),
    ("unreachable!(", 0, "crashes the process"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a value without inspecting it"),
    (".ok()", 0, "drops the error"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();

    for &(pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail: Vec<String> = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
            failures.push(format!("`{pattern}` ({why}): found {count}, max {budget}\n{}", detail.join("\n")));
        }
    }

    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn environment_is_read_only_by_config() {
    let files = source_files();
    let offenders: Vec<String> = hits(&files, "std::env::var(")
        .into_iter()
        .map(|(path, _)| path)
        .filter(|path| !path.ends_with("config.rs"))
        .collect();
    assert!(offenders.is_empty(), "environment read outside config.rs: {offenders:?}");
}

#[test]
fn no_direct_stdout_printing() {
    let files = source_files();
    let offenders: Vec<String> = files
        .iter()
        .filter(|file| file.content.lines().any(|line| line.contains("println!(") && !line.contains("eprintln!(")))
        .map(|file| file.path.clone())
        .collect();
    assert!(offenders.is_empty(), "println! in production code: {offenders:?}");
}
