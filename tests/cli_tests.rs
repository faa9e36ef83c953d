//! CLI behavior tests
//!
//! Exit status and top-level output contracts: configuration failures
//! abort before any scan with a non-zero status, successful runs (dry or
//! not) exit zero.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dirsync() -> Command {
    Command::cargo_bin("dirsync").expect("binary should build")
}

#[test]
fn test_missing_src_flag_fails() {
    let dst = TempDir::new().expect("create dst tempdir");

    dirsync()
        .args(["--dst", dst.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--src"));
}

#[test]
fn test_nonexistent_src_fails_before_any_scan() {
    let dst = TempDir::new().expect("create dst tempdir");

    dirsync()
        .args(["--src", "/nonexistent/source/dir"])
        .args(["--dst", dst.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("src="));
}

#[test]
fn test_file_as_dst_fails() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");
    let file_path = dst.path().join("plain.txt");
    fs::write(&file_path, b"not a dir").expect("write file");

    dirsync()
        .args(["--src", src.path().to_str().unwrap()])
        .args(["--dst", file_path.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_successful_sync_exits_zero() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");
    fs::write(src.path().join("a.txt"), b"payload").expect("write source file");

    dirsync()
        .args(["--src", src.path().to_str().unwrap()])
        .args(["--dst", dst.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Diff Completed!"));

    assert_eq!(
        fs::read(dst.path().join("a.txt")).expect("read copy"),
        b"payload"
    );
}

#[test]
fn test_dry_run_exits_zero_and_copies_nothing() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");
    fs::write(src.path().join("a.txt"), b"payload").expect("write source file");

    dirsync()
        .args(["--src", src.path().to_str().unwrap()])
        .args(["--dst", dst.path().to_str().unwrap()])
        .arg("--dryrun")
        .assert()
        .success()
        .stdout(predicate::str::contains("no changes were made"));

    assert!(!dst.path().join("a.txt").exists());
}

#[test]
fn test_banner_echoes_configuration() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");

    dirsync()
        .args(["--src", src.path().to_str().unwrap()])
        .args(["--dst", dst.path().to_str().unwrap()])
        .arg("--skipsrc")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skip Src: true"))
        .stdout(predicate::str::contains("No differences found."));
}
