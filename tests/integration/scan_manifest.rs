//! End-to-end scan and manifest coverage against real temporary trees.

use canopy::scan::{run_scan, ScanOptions};
use canopy::tree::walker::WalkerConfig;
use std::fs;
use tempfile::TempDir;

fn options_for(temp_dir: &TempDir) -> ScanOptions {
    ScanOptions {
        root: temp_dir.path().join("Files"),
        output: temp_dir.path().join("public").join("files.json"),
        label: "Files".to_string(),
        walker: WalkerConfig::default(),
        dry_run: false,
    }
}

#[test]
fn empty_root_serializes_to_empty_array() {
    let temp_dir = TempDir::new().unwrap();
    let options = options_for(&temp_dir);

    run_scan(&options).unwrap();
    assert_eq!(fs::read_to_string(&options.output).unwrap(), "[]");
}

#[test]
fn two_entry_tree_matches_expected_shape() {
    let temp_dir = TempDir::new().unwrap();
    let options = options_for(&temp_dir);
    fs::create_dir_all(options.root.join("a")).unwrap();
    fs::write(options.root.join("b.txt"), "0123456789").unwrap();

    run_scan(&options).unwrap();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&options.output).unwrap()).unwrap();
    let entries = manifest.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["type"], "directory");
    assert_eq!(entries[0]["name"], "a");
    assert_eq!(entries[0]["path"], "Files/a");
    assert_eq!(entries[0]["children"], serde_json::json!([]));

    assert_eq!(entries[1]["type"], "file");
    assert_eq!(entries[1]["name"], "b.txt");
    assert_eq!(entries[1]["path"], "Files/b.txt");
    assert_eq!(entries[1]["size"], 10);
    assert_eq!(entries[1]["extension"], ".txt");
    assert!(entries[1]["lastModified"].is_string());
}

#[test]
fn directories_never_follow_files() {
    let temp_dir = TempDir::new().unwrap();
    let options = options_for(&temp_dir);
    fs::create_dir_all(options.root.join("zeta")).unwrap();
    fs::create_dir_all(options.root.join("beta")).unwrap();
    fs::write(options.root.join("alpha.txt"), "x").unwrap();
    fs::write(options.root.join("gamma.txt"), "x").unwrap();

    run_scan(&options).unwrap();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&options.output).unwrap()).unwrap();
    let names: Vec<&str> = manifest
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["beta", "zeta", "alpha.txt", "gamma.txt"]);
}

#[test]
fn nested_paths_use_forward_slashes_and_label() {
    let temp_dir = TempDir::new().unwrap();
    let options = options_for(&temp_dir);
    fs::create_dir_all(options.root.join("sub").join("dir")).unwrap();
    fs::write(options.root.join("sub").join("dir").join("x.txt"), "x").unwrap();

    run_scan(&options).unwrap();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&options.output).unwrap()).unwrap();
    let file = &manifest[0]["children"][0]["children"][0];
    assert_eq!(file["path"], "Files/sub/dir/x.txt");
}

#[test]
fn extension_rules_apply_to_real_files() {
    let temp_dir = TempDir::new().unwrap();
    let options = options_for(&temp_dir);
    fs::create_dir_all(&options.root).unwrap();
    fs::write(options.root.join("archive.tar.gz"), "x").unwrap();
    fs::write(options.root.join("README"), "x").unwrap();
    fs::write(options.root.join(".gitignore"), "x").unwrap();
    fs::write(options.root.join("PHOTO.JPG"), "x").unwrap();

    run_scan(&options).unwrap();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&options.output).unwrap()).unwrap();
    let by_name = |name: &str| -> String {
        manifest
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["name"] == name)
            .unwrap()["extension"]
            .as_str()
            .unwrap()
            .to_string()
    };

    assert_eq!(by_name("archive.tar.gz"), ".gz");
    assert_eq!(by_name("README"), "");
    assert_eq!(by_name(".gitignore"), "");
    assert_eq!(by_name("PHOTO.JPG"), ".jpg");
}

#[test]
fn rescan_of_unchanged_tree_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let options = options_for(&temp_dir);
    fs::create_dir_all(options.root.join("sub")).unwrap();
    fs::write(options.root.join("sub").join("a.txt"), "aa").unwrap();
    fs::write(options.root.join("b.bin"), "bbb").unwrap();

    run_scan(&options).unwrap();
    let first = fs::read(&options.output).unwrap();

    run_scan(&options).unwrap();
    let second = fs::read(&options.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn ignored_names_are_left_out() {
    let temp_dir = TempDir::new().unwrap();
    let mut options = options_for(&temp_dir);
    options.walker.ignore_patterns = vec![".git".to_string()];
    fs::create_dir_all(options.root.join(".git")).unwrap();
    fs::write(options.root.join("kept.txt"), "x").unwrap();

    let report = run_scan(&options).unwrap();
    assert_eq!(report.summary.directories, 0);
    assert_eq!(report.summary.files, 1);
}
