use std::path::{Path, PathBuf};

use unlock_vba::error::UnlockError;
use unlock_vba::select::{by_extension, by_regex};

#[test]
fn extension_filter_keeps_matches_only() {
    let temp_dir = tempfile::tempdir().unwrap();
    touch(temp_dir.path(), "Book1.xlsm");
    touch(temp_dir.path(), "Book2.xlsx");
    touch(temp_dir.path(), "Archive.mdb");
    touch(temp_dir.path(), "notes.txt");

    let files = by_extension(temp_dir.path(), &args(&["xlsm", ".mdb"])).unwrap();
    assert_eq!(paths(&["Archive.mdb", "Book1.xlsm"]), files);
}

#[test]
fn extension_filter_is_case_insensitive() {
    let temp_dir = tempfile::tempdir().unwrap();
    touch(temp_dir.path(), "SHOUTY.XLSM");

    let files = by_extension(temp_dir.path(), &args(&["xlsm"])).unwrap();
    assert_eq!(paths(&["SHOUTY.XLSM"]), files);
}

#[test]
fn extension_filter_skips_directories() {
    let temp_dir = tempfile::tempdir().unwrap();
    touch(temp_dir.path(), "Book1.xlsm");
    std::fs::create_dir(temp_dir.path().join("backup.xlsm")).unwrap();

    let files = by_extension(temp_dir.path(), &args(&["xlsm"])).unwrap();
    assert_eq!(paths(&["Book1.xlsm"]), files);
}

#[test]
fn regex_filter_matches_from_the_start() {
    let temp_dir = tempfile::tempdir().unwrap();
    touch(temp_dir.path(), "Book1.xlsm");
    touch(temp_dir.path(), "Book2.xlsm");
    touch(temp_dir.path(), "MyBook1.xlsm");

    let files = by_regex(temp_dir.path(), "Book").unwrap();
    assert_eq!(paths(&["Book1.xlsm", "Book2.xlsm"]), files);
}

#[test]
fn regex_filter_rejects_bad_patterns() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = by_regex(temp_dir.path(), "Book[").unwrap_err();
    assert!(matches!(err, UnlockError::BadRegex(_)));
}

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"").unwrap();
}

fn args(extensions: &[&str]) -> Vec<String> {
    extensions.iter().map(|e| (*e).to_owned()).collect()
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}
