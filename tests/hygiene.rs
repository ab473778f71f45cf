//! Source hygiene checks for the client crate.
//!
//! Scans production sources under `src/` (sibling `_test.rs` files are
//! skipped) for patterns that crash the page, swallow errors, or bypass the
//! `log` facade. Every budget is zero; fix the code rather than raising one.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
    reason: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, reason: "propagate or log the error" },
    Budget { pattern: ".expect(", max: 0, reason: "propagate or log the error" },
    Budget { pattern: "panic!(", max: 0, reason: "a panic takes the whole page down" },
    Budget { pattern: "unreachable!(", max: 0, reason: "a panic takes the whole page down" },
    Budget { pattern: "todo!(", max: 0, reason: "stubs do not ship" },
    Budget { pattern: "unimplemented!(", max: 0, reason: "stubs do not ship" },
    Budget { pattern: "let _ =", max: 0, reason: "inspect the result instead of discarding it" },
    Budget { pattern: ".ok()", max: 0, reason: "match on the error so it can be logged" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, reason: "delete unused code" },
    Budget { pattern: "println!(", max: 0, reason: "use the log macros" },
    Budget { pattern: "eprintln!(", max: 0, reason: "use the log macros" },
    Budget { pattern: "dbg!(", max: 0, reason: "use the log macros" },
];

fn production_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files.retain(|f| !f.path.ends_with("_test.rs"));
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path.to_string_lossy().to_string(), content });
            }
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
fn sources_were_found() {
    assert!(production_files().iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = production_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let listing = found.iter().map(|(p, c)| format!("    {p}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!(
                "`{}` found {count}, max {} ({})\n{listing}",
                budget.pattern, budget.max, budget.reason
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn test_module_paths_resolve() {
    let mut missing = Vec::new();
    for file in production_files() {
        let dir = Path::new(&file.path).parent().map(Path::to_path_buf).unwrap_or_default();
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(target) = rest.split('"').next() else {
                continue;
            };
            if !dir.join(target).is_file() {
                missing.push(format!("{} -> {target}", file.path));
            }
        }
    }
    assert!(missing.is_empty(), "test modules point at missing files:\n{}", missing.join("\n"));
}
