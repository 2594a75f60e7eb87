use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn pixelwin_cmd() -> Command {
    Command::cargo_bin("pixelwin").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    pixelwin_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Single-window framebuffer shim demo",
        ));
}

#[test]
fn demo_presents_the_requested_frames() {
    pixelwin_cmd()
        .args(["--frames", "3", "--width", "320", "--height", "200"])
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .assert()
        .success()
        .stdout(predicate::str::contains("presented 3 frames of 320x200"))
        .stdout(predicate::str::contains("0 dropped"));
}

#[test]
fn unknown_interpolation_mode_is_rejected() {
    pixelwin_cmd()
        .args(["--frames", "1", "--interpolation", "cubic"])
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown interpolation mode"));
}

#[test]
fn config_file_sets_window_geometry() {
    let mut config = NamedTempFile::new().unwrap();
    config
        .write_all(b"[window]\nwidth = 1280\nheight = 800\n\n[present]\ninterpolation = \"linear\"\n")
        .unwrap();

    pixelwin_cmd()
        .args(["--frames", "2"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("in a 1280x800 window"))
        // 1280/320 == 800/200: the quad fills the window exactly.
        .stdout(predicate::str::contains(
            "letterbox rect [-1.000, -1.000, 1.000, 1.000]",
        ));
}

#[test]
fn malformed_config_fails_with_context() {
    let mut config = NamedTempFile::new().unwrap();
    config.write_all(b"[window\nwidth =").unwrap();

    pixelwin_cmd()
        .args(["--frames", "1"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading config"));
}
