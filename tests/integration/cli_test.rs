//! Binary behaviour: preflight rejection, exit status, batch report.

use super::test_images::{write_corrupt, write_logo, write_photo};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn logomark(args: &[&Path], extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_logomark"))
        .args(args)
        .args(extra)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

#[test]
fn test_single_image_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = write_photo(dir.path(), "in.png", 300, 200);
    let logo = write_logo(dir.path(), 30, 30);
    let output = dir.path().join("out.png");

    let out = logomark(
        &[
            input.as_path(),
            output.as_path(),
            logo.as_path(),
            Path::new("topleft"),
            Path::new("3:1"),
        ],
        &[],
    );

    assert!(out.status.success());
    assert!(output.exists());
}

#[test]
fn test_invalid_anchor_exits_with_usage_and_no_side_effects() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("images");
    std::fs::create_dir(&input).unwrap();
    let logo = write_logo(dir.path(), 30, 30);
    let output = dir.path().join("output");

    let out = logomark(
        &[
            input.as_path(),
            output.as_path(),
            logo.as_path(),
            Path::new("middle"),
        ],
        &[],
    );

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Invalid position 'middle'"));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage"));
    assert!(!output.exists());
}

#[test]
fn test_missing_logo_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let input = write_photo(dir.path(), "in.png", 50, 50);
    let out = logomark(
        &[
            input.as_path(),
            dir.path().join("out.png").as_path(),
            dir.path().join("logo.png").as_path(),
            Path::new("center"),
        ],
        &[],
    );

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));
}

#[test]
fn test_failed_single_image_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let input = write_corrupt(dir.path(), "in.jpg");
    let logo = write_logo(dir.path(), 30, 30);

    let out = logomark(
        &[
            input.as_path(),
            dir.path().join("out.jpg").as_path(),
            logo.as_path(),
            Path::new("center"),
        ],
        &[],
    );

    assert!(!out.status.success());
}

#[test]
fn test_batch_with_failure_exits_success_and_writes_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("images");
    std::fs::create_dir(&input).unwrap();
    write_photo(&input, "good.png", 100, 100);
    write_corrupt(&input, "bad.png");
    let logo = write_logo(dir.path(), 20, 20);
    let output = dir.path().join("output");
    let report = dir.path().join("report.json");
    let report_arg = report.to_string_lossy().into_owned();

    let out = logomark(
        &[
            input.as_path(),
            output.as_path(),
            logo.as_path(),
            Path::new("bottomleft"),
            Path::new("6:2"),
        ],
        &["--report", &report_arg, "--log-format", "json"],
    );

    assert!(out.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["total"], 2);
    assert_eq!(json["succeeded"], 1);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["files"][0]["file"], "bad.png");
    assert_eq!(json["files"][0]["status"], "failed");
}

#[test]
fn test_too_few_arguments_is_rejected() {
    let dir = TempDir::new().unwrap();
    let out = logomark(&[dir.path(), dir.path()], &[]);
    assert!(!out.status.success());
}

#[test]
fn test_unusable_output_directory_is_logged_and_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("images");
    std::fs::create_dir(&input).unwrap();
    write_photo(&input, "a.png", 50, 50);
    let logo = write_logo(dir.path(), 10, 10);
    let output = dir.path().join("taken");
    std::fs::write(&output, b"a regular file").unwrap();

    let out = logomark(
        &[
            input.as_path(),
            output.as_path(),
            logo.as_path(),
            Path::new("center"),
        ],
        &[],
    );

    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Failed to create output directory"));
}
