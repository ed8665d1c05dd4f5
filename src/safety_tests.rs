use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn resolve_normalizes_segments() {
    let base = Path::new("/work/proj");
    assert_eq!(resolve(base, Path::new("a/./b.ts")), PathBuf::from("/work/proj/a/b.ts"));
    assert_eq!(resolve(base, Path::new("out/../src/x.ts")), PathBuf::from("/work/proj/src/x.ts"));
    assert_eq!(resolve(base, Path::new("/abs/file")), PathBuf::from("/abs/file"));
}

#[test]
fn conflict_on_same_resolved_path() {
    let base = Path::new("/work/proj");
    let inputs = vec![PathBuf::from("a.ts"), PathBuf::from("lib/b.ts")];
    assert!(check_not_input(base, &inputs, Path::new("out.ts")).is_ok());
    let err = check_not_input(base, &inputs, Path::new("./lib/../a.ts")).unwrap_err();
    assert!(matches!(err, GatherError::Conflict { .. }));
    assert!(check_not_input(base, &inputs, Path::new("/work/proj/lib/b.ts")).is_err());
}

#[cfg(unix)]
#[test]
fn conflict_through_symlink() {
    let d = tempdir().unwrap();
    fs::write(d.path().join("real.txt"), "x").unwrap();
    std::os::unix::fs::symlink(d.path().join("real.txt"), d.path().join("link.txt")).unwrap();
    let err = check_not_input(d.path(), &["real.txt"], Path::new("link.txt")).unwrap_err();
    assert!(matches!(err, GatherError::Conflict { .. }));
}

#[test]
fn protected_src_directory() {
    let cwd = Path::new("/work/proj");
    assert!(matches!(check_not_protected(cwd, Path::new("src")), Err(GatherError::ProtectedPath { .. })));
    assert!(check_not_protected(cwd, Path::new("src/foo.ts")).is_err());
    assert!(check_not_protected(cwd, Path::new("./src/deep/foo.ts")).is_err());
    assert!(check_not_protected(cwd, Path::new("out/../src/foo.ts")).is_err());
    assert!(check_not_protected(cwd, Path::new("/work/proj/src/foo.ts")).is_err());
}

#[test]
fn unprotected_paths_pass() {
    let cwd = Path::new("/work/proj");
    assert!(check_not_protected(cwd, Path::new("srcs/foo.ts")).is_ok());
    assert!(check_not_protected(cwd, Path::new("generated/src/foo.ts")).is_ok());
    assert!(check_not_protected(cwd, Path::new("../src/foo.ts")).is_ok());
    assert!(check_not_protected(cwd, Path::new("/elsewhere/src/foo.ts")).is_ok());
}
