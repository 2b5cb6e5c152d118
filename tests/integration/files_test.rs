// Tests for the whole-file text helpers

use std::fs;
use tempfile::TempDir;
use toolbelt::platform::fs::{read_text_file, write_text_file};
use toolbelt::ToolbeltError;

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("subfolder1")).unwrap();
    fs::create_dir(dir.path().join("subfolder2")).unwrap();
    fs::write(dir.path().join("subfolder1").join("file1.txt"), "content1").unwrap();
    dir
}

#[test]
fn test_read_existing_file() {
    let dir = fixture();
    let path = dir.path().join("subfolder1").join("file1.txt");
    assert_eq!(read_text_file(&path, false).unwrap(), "content1");
}

#[test]
fn test_read_missing_file_fails() {
    let dir = fixture();
    let path = dir.path().join("subfolder1").join("file2.txt");

    match read_text_file(&path, false) {
        Err(ToolbeltError::FileNotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_read_missing_file_ok() {
    let dir = fixture();
    let path = dir.path().join("subfolder2").join("file1.txt");
    assert_eq!(read_text_file(&path, true).unwrap(), "");
}

#[test]
fn test_write_then_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    write_text_file(&path, "content").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "content");
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("out.txt");

    let err = write_text_file(&path, "content").unwrap_err();
    assert!(matches!(err, ToolbeltError::Io(_)));
}
