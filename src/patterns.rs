use crate::error::Result;
use crate::fs::WalkerFactory;
use crate::safety::resolve;
use globset::{GlobBuilder, GlobMatcher};
use ignore::DirEntry;
use log::warn;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Pattern used by `--everything`.
pub const EVERYTHING: &str = "**/*";

fn normalize_pattern(p: &str) -> &str {
    p.trim_start_matches("./")
}

fn has_glob_meta(p: &str) -> bool {
    p.contains(['*', '?', '[', '{'])
}

/// `*` and `?` stay within one path segment; `**` crosses them.
pub fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    Ok(GlobBuilder::new(pattern).literal_separator(true).build()?.compile_matcher())
}

/// Splits a glob into its leading literal directories and the rest:
/// `../lib/**/*.ts` becomes `("../lib", "**/*.ts")`.
fn split_glob(pattern: &str) -> (String, String) {
    let segments: Vec<&str> = pattern.split('/').collect();
    let k = segments.iter().position(|s| has_glob_meta(s)).unwrap_or(segments.len());
    let mut base = segments[..k].join("/");
    if base.is_empty() && pattern.starts_with('/') {
        base.push('/');
    }
    (base, segments[k..].join("/"))
}

fn to_match_str(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/")
}

/// Regular files, and symlinks that point at one.
fn is_gatherable(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

fn walk_glob(walker: &dyn WalkerFactory, root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let (base, rest) = split_glob(pattern);
    let matcher = compile_glob(&rest)?;
    let walk_root = root.join(&base);
    if !walk_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in walker.build(&walk_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => { warn!("Skipping unreadable entry: {}", e); continue; }
        };
        if !is_gatherable(&entry) { continue; }
        let Ok(rel) = entry.path().strip_prefix(&walk_root) else { continue };
        if matcher.is_match(to_match_str(rel)) {
            found.push(Path::new(&base).join(rel));
        }
    }
    found.sort();
    Ok(found)
}

/// Expands patterns into files, in pattern order, each file once.
/// Globs are walked from their literal directory prefix, so `../lib/*.ts` and
/// absolute globs work; results keep the prefix as typed.
/// Patterns without glob syntax naming an existing file are taken literally.
pub fn expand_patterns(walker: &dyn WalkerFactory, root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for p in patterns {
        let p = normalize_pattern(p);
        let matches = if has_glob_meta(p) {
            walk_glob(walker, root, p)?
        } else if root.join(p).is_file() {
            vec![PathBuf::from(p)]
        } else {
            Vec::new()
        };
        for path in matches {
            if seen.insert(resolve(root, &path)) { files.push(path); }
        }
    }
    Ok(files)
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
