//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the crate source tree for antipatterns. Each has a budget
//! (ideally zero). The budget never grows: to add one, fix another first.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics: a render or gesture must never take the host down.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss: discards errors without inspecting.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Library output goes through `tracing`; only the binary prints.
const MAX_LIBRARY_PRINT: usize = 0;

const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    fn is_binary(&self) -> bool {
        self.path.ends_with("main.rs")
    }
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in(files: &[&SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_budget(pattern: &str, max: usize, library_only: bool) {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found; run from the crate root");
    let scoped: Vec<&SourceFile> = files
        .iter()
        .filter(|f| !(library_only && f.is_binary()))
        .collect();
    let hits = count_in(&scoped, pattern);
    let count = total(&hits);
    assert!(
        count <= max,
        "`{pattern}` budget exceeded: found {count}, max {max}.\n{}",
        format_hits(&hits)
    );
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP, false);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT, false);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC, false);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", MAX_UNREACHABLE, false);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO, false);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", MAX_UNIMPLEMENTED, false);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD, false);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK, false);
}

#[test]
fn library_println_budget() {
    assert_budget("println!(", MAX_LIBRARY_PRINT, true);
}

#[test]
fn library_eprintln_budget() {
    assert_budget("eprintln!(", MAX_LIBRARY_PRINT, true);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE, false);
}
