extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn renders_a_complete_tga_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mandel.tga");

    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&[
            "--output",
            out.to_str().unwrap(),
            "--threads",
            "2",
            "--iterations",
            "50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ms"));

    // 18-byte header plus one BGR triple per pixel of the fixed
    // 1920x1200 grid.
    let len = std::fs::metadata(&out).unwrap().len();
    assert_eq!(len, 18 + 3 * 1920 * 1200);
}

#[test]
fn rejects_a_zero_thread_count() {
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be at least 1"));
}

#[test]
fn rejects_a_garbled_thread_count() {
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["--threads", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse thread count"));
}
