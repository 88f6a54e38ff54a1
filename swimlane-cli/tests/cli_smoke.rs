use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn cli_renders_svg_smoke() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("flow.svg");

    let exe = assert_cmd::cargo_bin!("postcode-flow");
    let assert = Command::new(exe)
        .args(["--output", out.to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Saved:"), "missing confirmation: {stdout}");

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("OS Places API"));
    assert!(svg.contains("GET /search/places/v1/postcode"));
}

#[test]
fn cli_renders_pdf_smoke() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("flow.pdf");

    let exe = assert_cmd::cargo_bin!("postcode-flow");
    Command::new(exe)
        .args(["--output", out.to_string_lossy().as_ref()])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"), "output is not a PDF");
}

#[test]
fn cli_rejects_unknown_theme_and_writes_nothing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("flow.svg");

    let exe = assert_cmd::cargo_bin!("postcode-flow");
    Command::new(exe)
        .args([
            "--theme",
            "neon",
            "--output",
            out.to_string_lossy().as_ref(),
        ])
        .assert()
        .failure();

    assert!(!out.exists());
}
