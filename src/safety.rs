use crate::error::{GatherError, Result};
use std::path::{Component, Path, PathBuf};

/// Directory the CLI refuses to write into.
pub const PROTECTED_DIR: &str = "src";

/// Joins `path` onto `base` when relative and drops `.`/`..` segments lexically.
/// Symlinks are left alone.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { base.join(path) };
    let mut out = PathBuf::new();
    for c in joined.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => { out.pop(); }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Fails with `Conflict` when the resolved output is one of the resolved inputs.
/// Paths that exist on disk are also compared canonically, which catches symlinks.
pub fn check_not_input<P: AsRef<Path>>(base: &Path, inputs: &[P], output: &Path) -> Result<()> {
    let out_abs = resolve(base, output);
    let out_canon = std::fs::canonicalize(&out_abs).ok();
    for input in inputs {
        let in_abs = resolve(base, input.as_ref());
        let same_canon = match &out_canon {
            Some(oc) => std::fs::canonicalize(&in_abs).map(|ic| &ic == oc).unwrap_or(false),
            None => false,
        };
        if in_abs == out_abs || same_canon {
            return Err(GatherError::Conflict { output: output.to_path_buf() });
        }
    }
    Ok(())
}

/// Fails with `ProtectedPath` when `output`, resolved against `cwd`, is `src` or lies under it.
pub fn check_not_protected(cwd: &Path, output: &Path) -> Result<()> {
    let abs = resolve(cwd, output);
    let cwd = resolve(cwd, Path::new(""));
    let protected = match abs.strip_prefix(&cwd) {
        Ok(rel) => matches!(rel.components().next(), Some(Component::Normal(first)) if first == PROTECTED_DIR),
        Err(_) => false,
    };
    if protected {
        return Err(GatherError::ProtectedPath { output: output.to_path_buf() });
    }
    Ok(())
}

#[cfg(test)]
#[path = "safety_tests.rs"]
mod tests;
