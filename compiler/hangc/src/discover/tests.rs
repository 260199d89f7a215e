use super::*;
use pretty_assertions::assert_eq;
use std::fs::File;
use tempfile::tempdir;

#[test]
fn test_discover_empty_dir() {
    let dir = tempdir().unwrap();
    assert!(discover_sources(dir.path()).is_empty());
}

#[test]
fn test_discover_only_source_files() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("b.py")).unwrap();
    File::create(dir.path().join("a.py")).unwrap();
    File::create(dir.path().join("notes.txt")).unwrap();
    File::create(dir.path().join("stub.pyi")).unwrap();

    let files = discover_sources(dir.path());
    assert_eq!(
        files,
        vec![dir.path().join("a.py"), dir.path().join("b.py")]
    );
}

#[test]
fn test_discover_recursive_sorted() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("pkg");
    fs::create_dir(&sub).unwrap();
    File::create(sub.join("mod.py")).unwrap();
    File::create(dir.path().join("setup.py")).unwrap();

    let files = discover_sources(dir.path());
    assert_eq!(files, vec![sub.join("mod.py"), dir.path().join("setup.py")]);
}

#[test]
fn test_skip_hidden_and_cache_dirs() {
    let dir = tempdir().unwrap();
    let hidden = dir.path().join(".venv");
    let cache = dir.path().join("__pycache__");
    fs::create_dir(&hidden).unwrap();
    fs::create_dir(&cache).unwrap();
    File::create(hidden.join("site.py")).unwrap();
    File::create(cache.join("cached.py")).unwrap();
    File::create(dir.path().join(".hidden.py")).unwrap();
    File::create(dir.path().join("real.py")).unwrap();

    let files = discover_sources(dir.path());
    assert_eq!(files, vec![dir.path().join("real.py")]);
}

#[test]
fn test_expand_keeps_explicit_files_in_order() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("src");
    fs::create_dir(&sub).unwrap();
    File::create(sub.join("one.py")).unwrap();
    let script = dir.path().join("script");
    File::create(&script).unwrap();
    let missing = dir.path().join("missing.py");

    let files = expand_paths(&[script.clone(), sub.clone(), missing.clone()]);
    assert_eq!(files, vec![script, sub.join("one.py"), missing]);
}
