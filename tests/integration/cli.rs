//! Integration tests for the sdkconf binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_sdkconf(home: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_sdkconf");
    Command::new(bin)
        .env_clear()
        .env("HOME", home.as_os_str())
        .env("AWS_REGION", "us-east-2")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_show_layers_flags_over_files() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(workspace.join(".sdkconf")).unwrap();
    fs::write(
        workspace.join(".sdkconf").join("config.toml"),
        "max_retries = 4\ndisable_ssl = true\n",
    )
    .unwrap();

    let output = run_sdkconf(
        &home,
        &[
            "--workspace",
            workspace.to_str().unwrap(),
            "show",
            "--max-retries",
            "7",
            "--format",
            "json",
        ],
    );
    assert!(
        output.status.success(),
        "sdkconf show should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["settings"]["region"], "us-east-2");
    assert_eq!(value["settings"]["max_retries"], 7);
    assert_eq!(value["settings"]["disable_ssl"], true);
    assert_eq!(value["settings"]["log_level"], 0);
    assert_eq!(value["handles"]["credentials"], "ChainProvider");
}

#[test]
fn test_overrides_shows_only_loaded_settings() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    fs::create_dir_all(&home).unwrap();
    let config_file = temp_dir.path().join("override.toml");
    fs::write(&config_file, "endpoint = \"\"\n").unwrap();

    let output = run_sdkconf(
        &home,
        &["--config", config_file.to_str().unwrap(), "overrides"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("endpoint = \"\""));
    assert!(!stdout.contains("region"));
    assert!(stdout.contains("# credentials: (unset)"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");

    let output = run_sdkconf(
        temp_dir.path(),
        &["--config", missing.to_str().unwrap(), "overrides"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}
