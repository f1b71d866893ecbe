use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("imagelist").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn touch(dir: &TempDir, names: &[&str]) {
    for name in names {
        fs::write(dir.path().join(name), "x").unwrap();
    }
}

fn listing(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("image_list.csv")).unwrap()
}

#[test]
fn lists_images_in_working_directory() {
    let dir = TempDir::new().unwrap();
    touch(&dir, &["b.png", "A.JPG", "notes.txt", "c.gif"]);

    cmd_in(&dir)
        .assert()
        .success()
        .stdout(contains("Cleared a.csv, s.csv."))
        .stdout(contains("Generated image_list.csv with 3 image files."));

    assert_eq!(listing(&dir), "Filename\nA.JPG\nb.png\nc.gif");
}

#[test]
fn clears_fixed_files_even_when_absent() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("s.csv"), "filename,title\nx.png,X\n").unwrap();

    cmd_in(&dir).assert().success();

    assert_eq!(fs::read(dir.path().join("a.csv")).unwrap(), b"");
    assert_eq!(fs::read(dir.path().join("s.csv")).unwrap(), b"");
}

#[test]
fn empty_directory_writes_header_only() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .assert()
        .success()
        .stdout(contains("with 0 image files."));

    assert_eq!(listing(&dir), "Filename");
}

#[test]
fn edge_case_names() {
    let dir = TempDir::new().unwrap();
    touch(&dir, &["photo.JPG", "doc.JPGX", "IMG", ".png"]);
    fs::create_dir(dir.path().join("album.jpg")).unwrap();

    cmd_in(&dir).assert().success();

    assert_eq!(listing(&dir), "Filename\n.png\nphoto.JPG");
}

#[test]
fn second_run_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    touch(&dir, &["x.webp", "y.tiff", "w.bmp"]);

    cmd_in(&dir).assert().success();
    let first = fs::read(dir.path().join("image_list.csv")).unwrap();
    cmd_in(&dir).assert().success();
    let second = fs::read(dir.path().join("image_list.csv")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn directory_flag_overrides_working_directory() {
    let cwd = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    touch(&target, &["only.png"]);

    cmd_in(&cwd)
        .arg("--directory")
        .arg(target.path())
        .assert()
        .success();

    assert_eq!(listing(&target), "Filename\nonly.png");
    assert!(!cwd.path().join("image_list.csv").exists());
}

#[test]
fn missing_directory_fails_with_error() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .args(["--directory", "does-not-exist"])
        .assert()
        .code(3)
        .stderr(contains("not a directory"));
}

#[test]
fn json_output_reports_images() {
    let dir = TempDir::new().unwrap();
    touch(&dir, &["b.png", "a.gif"]);

    let output = cmd_in(&dir)
        .args(["--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["image_count"], 2);
    assert_eq!(report["images"][0], "a.gif");
    assert_eq!(report["cleared_files"][1], "s.csv");
}

#[test]
fn quiet_mode_prints_nothing() {
    let dir = TempDir::new().unwrap();
    touch(&dir, &["a.png"]);

    cmd_in(&dir)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(listing(&dir), "Filename\na.png");
}

#[test]
fn dry_run_leaves_files_alone() {
    let dir = TempDir::new().unwrap();
    touch(&dir, &["a.png"]);
    fs::write(dir.path().join("a.csv"), "keep").unwrap();

    cmd_in(&dir)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(contains("Would write image_list.csv with 1 image file."));

    assert_eq!(fs::read_to_string(dir.path().join("a.csv")).unwrap(), "keep");
    assert!(!dir.path().join("image_list.csv").exists());
}

#[test]
fn config_file_changes_listing() {
    let dir = TempDir::new().unwrap();
    touch(&dir, &["a.png", "b.jpg"]);
    fs::write(
        dir.path().join("custom.toml"),
        "[scan]\nextensions = [\".jpg\"]\n\n[output]\nclear_files = [\"a.csv\", \"s.csv\"]\nlisting_file = \"jpgs.csv\"\nheader = \"Name\"\n",
    )
    .unwrap();

    cmd_in(&dir)
        .args(["--config", "custom.toml"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("jpgs.csv")).unwrap(),
        "Name\nb.jpg"
    );
}

#[test]
fn invalid_config_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.toml"), "[scan\n").unwrap();

    cmd_in(&dir)
        .args(["--config", "broken.toml"])
        .assert()
        .code(2)
        .stderr(contains("Configuration error"));

    assert!(!dir.path().join("a.csv").exists());
}

#[test]
fn generate_config_writes_sample() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(contains("imagelist.toml"));

    let content = fs::read_to_string(dir.path().join("imagelist.toml")).unwrap();
    assert!(content.contains("image_list.csv"));
    assert!(!dir.path().join("image_list.csv").exists());
}

#[test]
fn clear_failure_aborts_without_listing() {
    let dir = TempDir::new().unwrap();
    touch(&dir, &["x.png"]);
    fs::create_dir(dir.path().join("a.csv")).unwrap();

    cmd_in(&dir)
        .assert()
        .failure()
        .stderr(contains("a.csv"));

    assert!(!dir.path().join("s.csv").exists());
    assert!(!dir.path().join("image_list.csv").exists());
}

#[test]
fn startup_error_uses_json_format() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.toml"), "[scan\n").unwrap();

    let output = cmd_in(&dir)
        .args(["--config", "broken.toml", "--output-format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let first_line = String::from_utf8(output.stdout).unwrap();
    let message: serde_json::Value =
        serde_json::from_str(first_line.lines().next().unwrap()).unwrap();
    assert_eq!(message["level"], "error");
    assert!(message["message"]
        .as_str()
        .unwrap()
        .contains("Configuration error"));
}
