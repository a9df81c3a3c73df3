use std::fs;
use std::path::{Path, PathBuf};

/// A matching source line: (path relative to the crate root, 1-based line, text).
pub type Hit = (String, usize, String);

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// All `.rs` files below `relative_dir`, sorted.
pub fn collect_rs_files(relative_dir: &str) -> Vec<PathBuf> {
    let mut pending = vec![root().join(relative_dir)];
    let mut files = Vec::new();

    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()));
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

/// Run `matches` over every line of the given files.
fn scan<'a>(
    files: impl IntoIterator<Item = &'a Path>,
    matches: impl Fn(&str) -> bool,
) -> Vec<Hit> {
    let mut hits = Vec::new();
    for file in files {
        let source = fs::read_to_string(file)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", file.display()));
        let shown = file
            .strip_prefix(root())
            .unwrap_or(file)
            .to_string_lossy()
            .replace('\\', "/");

        hits.extend(
            source
                .lines()
                .enumerate()
                .filter(|(_, line)| matches(line))
                .map(|(i, line)| (shown.clone(), i + 1, line.to_string())),
        );
    }
    hits
}

pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    let files = collect_rs_files(relative_dir);
    scan(files.iter().map(PathBuf::as_path), |line| {
        patterns.iter().any(|p| line.contains(p))
    })
}

pub fn path_exists(relative_path: &str) -> bool {
    root().join(relative_path).exists()
}

/// Lines in `mod.rs` files that declare items instead of modules or re-exports.
pub fn find_item_definitions_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    const KEYWORDS: &[&str] = &["fn", "struct", "enum", "trait", "static", "const"];

    let files: Vec<PathBuf> = collect_rs_files(relative_dir)
        .into_iter()
        .filter(|f| f.file_name().is_some_and(|n| n == "mod.rs"))
        .collect();

    scan(files.iter().map(PathBuf::as_path), |line| {
        let line = line.trim_start();
        if line.starts_with("impl") {
            return true;
        }
        let line = line.strip_prefix("pub ").unwrap_or(line);
        let line = line.strip_prefix("async ").unwrap_or(line);
        KEYWORDS
            .iter()
            .any(|kw| line.strip_prefix(kw).is_some_and(|rest| rest.starts_with(' ')))
    })
}
