//! Source hygiene ratchets for the canvas crate.
//!
//! The sketch engine runs inside a browser animation frame where a panic kills
//! the page, so production sources must not panic or drop errors unseen.
//! Each pattern has a budget; budgets only go down.
//!
//! Browser bindings are confined to `src/web/` so everything else stays
//! testable natively. Logging belongs to the host page, so the engine
//! reports failures through return values only.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    label: &'static str,
    pattern: &'static str,
    max: usize,
}

const PANICS: &[Budget] = &[
    Budget { label: "unwrap", pattern: ".unwrap()", max: 0 },
    Budget { label: "expect", pattern: ".expect(", max: 0 },
    Budget { label: "panic", pattern: "panic!(", max: 0 },
    Budget { label: "unreachable", pattern: "unreachable!(", max: 0 },
    Budget { label: "todo", pattern: "todo!(", max: 0 },
    Budget { label: "unimplemented", pattern: "unimplemented!(", max: 0 },
];

const SILENT_LOSS: &[Budget] = &[
    Budget { label: "discarded result", pattern: "let _ =", max: 0 },
    Budget { label: "Result::ok", pattern: ".ok()", max: 0 },
];

const LOGGING: &[Budget] = &[
    Budget { label: "console", pattern: "console::", max: 0 },
    Budget { label: "println", pattern: "println!(", max: 0 },
    Budget { label: "eprintln", pattern: "eprintln!(", max: 0 },
];

const SUPPRESSIONS: &[Budget] = &[Budget { label: "allow(dead_code)", pattern: "#[allow(dead_code)]", max: 0 }];

const WEB_DIR: &str = "web";

struct Source {
    /// Path relative to `src/`.
    rel: PathBuf,
    /// Code lines with comment-only lines removed.
    code: Vec<String>,
}

fn src_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// Production sources under `src/`, skipping `*_test.rs` modules.
fn sources() -> Vec<Source> {
    let root = src_root();
    let mut out = Vec::new();
    walk(&root, &root, &mut out);
    assert!(!out.is_empty(), "no sources found under {}", root.display());
    out
}

fn walk(root: &Path, dir: &Path, out: &mut Vec<Source>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(root, &path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rs || is_test {
            continue;
        }
        let Ok(text) = fs::read_to_string(&path) else {
            continue;
        };
        let code = text
            .lines()
            .filter(|line| !line.trim_start().starts_with("//"))
            .map(str::to_owned)
            .collect();
        let rel = path.strip_prefix(root).map(Path::to_path_buf).unwrap_or(path);
        out.push(Source { rel, code });
    }
}

fn hits(files: &[Source], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.rel.display().to_string(), f.code.iter().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = sources();
    let mut failures = Vec::new();
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > budget.max {
            let detail: Vec<String> = found.iter().map(|(path, n)| format!("    {path}: {n}")).collect();
            failures.push(format!("  {} ({}): {count} > {}\n{}", budget.label, budget.pattern, budget.max, detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}

// =============================================================
// Budgets
// =============================================================

#[test]
fn no_panicking_calls() {
    check(PANICS);
}

#[test]
fn no_silently_dropped_errors() {
    check(SILENT_LOSS);
}

#[test]
fn engine_never_logs() {
    check(LOGGING);
}

#[test]
fn no_dead_code_suppressions() {
    check(SUPPRESSIONS);
}

// =============================================================
// Layering
// =============================================================

#[test]
fn web_sys_confined_to_web_module() {
    let outside: Vec<(String, usize)> = sources()
        .into_iter()
        .filter(|f| !f.rel.starts_with(WEB_DIR))
        .flat_map(|f| hits(std::slice::from_ref(&f), "web_sys::"))
        .collect();
    assert!(outside.is_empty(), "web_sys used outside src/{WEB_DIR}: {outside:?}");
}

#[test]
fn core_modules_do_not_name_js_value_outside_engine() {
    let outside: Vec<(String, usize)> = sources()
        .into_iter()
        .filter(|f| !f.rel.starts_with(WEB_DIR) && f.rel != Path::new("engine.rs"))
        .flat_map(|f| hits(std::slice::from_ref(&f), "JsValue"))
        .collect();
    assert!(outside.is_empty(), "JsValue used in the native core: {outside:?}");
}
