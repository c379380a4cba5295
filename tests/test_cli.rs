use std::fs;
use std::process::Command;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

fn autocrop() -> Command {
    Command::new(env!("CARGO_BIN_EXE_autocrop"))
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.output().unwrap();
    assert!(out.status.success());
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn test_no_argument_prints_usage() {
    assert_eq!(stdout_of(&mut autocrop()), "Usage: autocrop <image_path>\n");
}

#[test]
fn test_success_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logo.png");
    let mut img = RgbaImage::new(5, 5);
    img.put_pixel(2, 2, Rgba([10, 20, 30, 255]));
    img.save(&path).unwrap();

    let out = stdout_of(autocrop().arg(&path));
    assert_eq!(out, format!("Successfully cropped {}\n", path.display()));
    assert_eq!(image::open(&path).unwrap().into_rgba8().dimensions(), (1, 1));
}

#[test]
fn test_empty_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.png");
    RgbaImage::new(3, 3).save(&path).unwrap();

    assert_eq!(
        stdout_of(autocrop().arg(&path)),
        "Image is empty or fully transparent.\n"
    );
}

#[test]
fn test_error_line_exits_successfully() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("junk.png");
    fs::write(&path, b"junk").unwrap();

    let out = stdout_of(autocrop().arg(&path));
    assert!(out.starts_with(&format!("Error processing {}: ", path.display())));
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.png");

    let out = stdout_of(autocrop().arg(&path).arg("--json"));
    let report: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(report["status"], "error");
    assert_eq!(report["error_kind"], "not_found");
    assert_eq!(report["path"], path.display().to_string());
}

#[test]
fn test_extra_arguments_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logo.png");
    let mut img = RgbaImage::new(4, 4);
    img.put_pixel(1, 1, Rgba([1, 2, 3, 255]));
    img.save(&path).unwrap();

    let out = stdout_of(autocrop().arg(&path).arg("second.png").arg("-x"));
    assert_eq!(out, format!("Successfully cropped {}\n", path.display()));
    assert_eq!(image::open(&path).unwrap().into_rgba8().dimensions(), (1, 1));
}
