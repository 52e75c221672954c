//! Configuration layering: file precedence and environment overrides.

use crate::integration::support::with_env;
use canopy::config::ConfigLoader;
use std::fs;
use tempfile::TempDir;

#[test]
fn env_specific_file_overrides_base_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[scan]
label = "Base"
max_depth = 4
"#,
    )
    .unwrap();
    // CANOPY_ENV defaults to "development"
    fs::write(
        config_dir.join("development.toml"),
        r#"
[scan]
label = "Dev"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.scan.label, "Dev");
    // Keys absent from the env-specific file fall through to the base file
    assert_eq!(config.scan.max_depth, Some(4));
}

#[test]
fn environment_variable_overrides_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[scan]
label = "FromFile"
"#,
    )
    .unwrap();

    let config = with_env("CANOPY_SCAN__LABEL", "FromEnv", || {
        ConfigLoader::load(temp_dir.path()).unwrap()
    });
    assert_eq!(config.scan.label, "FromEnv");
}

#[cfg(target_os = "linux")]
#[test]
fn global_file_applies_below_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    let global_dir = temp_dir.path().join("xdg").join("canopy");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("config.toml"),
        r#"
[scan]
label = "Global"
output = "global.json"
"#,
    )
    .unwrap();

    let workspace = temp_dir.path().join("workspace");
    let config_dir = workspace.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[scan]
label = "Workspace"
"#,
    )
    .unwrap();

    let xdg_root = temp_dir.path().join("xdg");
    let config = with_env("XDG_CONFIG_HOME", xdg_root.to_str().unwrap(), || {
        ConfigLoader::load(&workspace).unwrap()
    });

    // Workspace wins on conflict; global fills the gaps
    assert_eq!(config.scan.label, "Workspace");
    assert_eq!(config.scan.output, std::path::PathBuf::from("global.json"));
}
