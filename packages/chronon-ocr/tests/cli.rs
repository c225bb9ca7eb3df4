//! Integration tests for the `chronon-ocr` binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("chronon-ocr");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("chronon-ocr "));
}

#[test]
fn test_image_is_required() {
    let mut cmd = cargo_bin_cmd!("chronon-ocr");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--image"));
}

#[test]
fn test_unknown_backend_rejected() {
    let mut cmd = cargo_bin_cmd!("chronon-ocr");
    cmd.args(["--image", "page.png", "--backend", "carrier-pigeon"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown OCR backend"));
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_apple_backend_fails_fast_off_macos() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.png");
    image::RgbImage::new(8, 8).save(&path).unwrap();

    let mut cmd = cargo_bin_cmd!("chronon-ocr");
    cmd.arg("--image").arg(&path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("only available on macOS"));
}
