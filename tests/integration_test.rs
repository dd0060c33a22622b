use image::{Rgba, RgbaImage};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_play_icon(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_play-icon"))
        .args(args)
        .output()
        .expect("Failed to run play-icon command")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("play-icon command failed");
    }
}

/// Generates an icon, then feeds it back through `process`, the way the two
/// commands are meant to be chained.
#[test]
fn test_generate_then_process() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let generated = temp_dir.path().join("generated.png");
    let rounded = temp_dir.path().join("rounded.png");

    let output = run_play_icon(&[Path::new("generate"), generated.as_path()]);
    assert_success(&output);
    assert!(generated.exists(), "generate should write {}", generated.display());

    let output = run_play_icon(&[Path::new("process"), generated.as_path(), rounded.as_path()]);
    assert_success(&output);
    assert!(rounded.exists(), "process should write {}", rounded.display());

    let icon = image::open(&rounded).expect("Failed to load rounded icon").to_rgba8();
    assert_eq!(icon.dimensions(), (512, 512));
    assert_eq!(icon.get_pixel(0, 0)[3], 0);
    assert_eq!(*icon.get_pixel(256, 256), Rgba([255, 111, 0, 255]));
}

#[test]
fn test_missing_arguments_print_usage() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("source.png");
    RgbaImage::from_pixel(32, 32, Rgba([1, 2, 3, 255]))
        .save(&input_path)
        .expect("Failed to save source image");

    let output = run_play_icon(&[Path::new("generate")]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: play-icon generate <output_path>"));

    let output = run_play_icon(&[Path::new("process"), input_path.as_path()]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: play-icon process <input_path> <output_path>"));

    // Only the source image we created ourselves
    let entries = std::fs::read_dir(temp_dir.path()).expect("read temp dir").count();
    assert_eq!(entries, 1);
}

#[test]
fn test_corrupted_input_fails_cleanly() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("broken.jpg");
    let output_path = temp_dir.path().join("rounded.png");
    std::fs::write(&input_path, b"\x00\x01 not an image").expect("write junk");

    let output = run_play_icon(&[Path::new("process"), input_path.as_path(), output_path.as_path()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!output_path.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error processing icon"),
        "stderr should name the failure, got: {stderr}"
    );
}

#[test]
fn test_trailing_arguments_are_ignored() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let generated = temp_dir.path().join("generated.png");
    let rounded = temp_dir.path().join("rounded.png");

    let output = run_play_icon(&[Path::new("generate"), generated.as_path(), Path::new("extra")]);
    assert_success(&output);
    assert!(generated.exists(), "generate should write {}", generated.display());

    let output = run_play_icon(&[
        Path::new("process"),
        generated.as_path(),
        rounded.as_path(),
        Path::new("extra"),
        Path::new("more"),
    ]);
    assert_success(&output);
    assert!(rounded.exists(), "process should write {}", rounded.display());
}

/// With the file size limit at one block the PNG cannot be written in full;
/// the partial file must not be left behind.
#[cfg(unix)]
#[test]
fn test_failed_write_removes_partial_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("icon.png");

    let output = Command::new("sh")
        .arg("-c")
        .arg(r#"trap '' XFSZ; ulimit -f 1; exec "$0" generate "$1""#)
        .arg(env!("CARGO_BIN_EXE_play-icon"))
        .arg(&output_path)
        .output()
        .expect("Failed to run play-icon under sh");

    assert_eq!(output.status.code(), Some(1));
    assert!(
        !output_path.exists(),
        "partial PNG should have been removed from {}",
        output_path.display()
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write"), "got: {stderr}");
}

#[test]
fn test_inspect_icon_detects_silhouette() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let generated = temp_dir.path().join("generated.png");

    let output = run_play_icon(&[Path::new("generate"), generated.as_path()]);
    assert_success(&output);

    let output = Command::new(env!("CARGO_BIN_EXE_inspect_icon"))
        .arg(&generated)
        .output()
        .expect("Failed to run inspect_icon");
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Image dimensions: 512x512"), "got: {stdout}");
    assert!(stdout.contains("Center pixel RGBA: [255, 111, 0, 255]"), "got: {stdout}");
    assert!(stdout.contains("✓ Rounded silhouette detected"), "got: {stdout}");
}

#[test]
fn test_inspect_icon_flags_square_image() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let square = temp_dir.path().join("square.png");
    RgbaImage::from_pixel(64, 64, Rgba([9, 9, 9, 255]))
        .save(&square)
        .expect("Failed to save square image");

    let output = Command::new(env!("CARGO_BIN_EXE_inspect_icon"))
        .arg(&square)
        .output()
        .expect("Failed to run inspect_icon");
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("⚠ Icon does not look like a rounded square"), "got: {stdout}");
}
