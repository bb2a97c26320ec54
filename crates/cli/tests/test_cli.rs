//! Exit codes and stdout of the built binary

use identmoji_core::{parse_rendered, OutputFormat};
use std::path::Path;
use std::process::{Command, Output};

fn identmoji(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_identmoji"))
        .args(args)
        .env("IDENTMOJI_CONFIG", config_dir.join("identmoji.toml"))
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

#[test]
fn help_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let output = identmoji(&["--help"], tmp.path());
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--json"));
    assert!(stdout.contains("--check"));
}

#[test]
fn unknown_flag_exits_one_with_usage() {
    let tmp = tempfile::tempdir().unwrap();
    let output = identmoji(&["--bogus"], tmp.path());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn output_without_file_exits_one() {
    let tmp = tempfile::tempdir().unwrap();
    let output = identmoji(&["-o"], tmp.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn check_missing_file_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let id_path = tmp.path().join("identmoji.json");
    let output = identmoji(&["--check", "-o", id_path.to_str().unwrap()], tmp.path());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("No configuration found at {}\n", id_path.display())
    );
}

#[test]
fn generate_then_check_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let id_path = tmp.path().join("identmoji.json");
    let id_arg = id_path.to_str().unwrap();

    let generated = identmoji(&["-4", "--json", "-o", id_arg], tmp.path());
    assert_eq!(generated.status.code(), Some(0));
    let fields = parse_rendered(&String::from_utf8_lossy(&generated.stdout), OutputFormat::Json)
        .unwrap();
    assert_eq!(fields.code.len(), 5);
    assert!(!fields.emojis.is_empty());

    let checked = identmoji(&["--check", "-o", id_arg], tmp.path());
    assert_eq!(checked.status.code(), Some(0));
    assert_eq!(checked.stdout, generated.stdout);
}

#[test]
fn check_uses_configured_default_path() {
    let tmp = tempfile::tempdir().unwrap();
    let id_path = tmp.path().join("persisted.txt");
    std::fs::write(&id_path, "Server Identifier: 🍒ABCDE\n").unwrap();
    std::fs::write(
        tmp.path().join("identmoji.toml"),
        format!("[output]\ndefault_path = {:?}\n", id_path.to_str().unwrap()),
    )
    .unwrap();

    let output = identmoji(&["--check"], tmp.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Server Identifier: 🍒ABCDE\n"
    );
}

#[test]
fn malformed_config_exits_one() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("identmoji.toml"), "[sources\n").unwrap();

    let output = identmoji(&[], tmp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error"));
}


#[test]
fn check_with_output_ignores_malformed_config() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("identmoji.toml"), "[sources\n").unwrap();
    let id_path = tmp.path().join("id.txt");
    std::fs::write(&id_path, "Server Identifier: 🍒ABCDE\n").unwrap();

    let output = identmoji(&["--check", "-o", id_path.to_str().unwrap()], tmp.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Server Identifier: 🍒ABCDE\n"
    );
}

#[test]
fn short_help_flag_is_unknown() {
    let tmp = tempfile::tempdir().unwrap();
    let output = identmoji(&["-h"], tmp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn repeated_output_flag_writes_last_file() {
    let tmp = tempfile::tempdir().unwrap();
    let first = tmp.path().join("first.txt");
    let second = tmp.path().join("second.txt");

    let output = identmoji(
        &[
            "-4",
            "-4",
            "-o",
            first.to_str().unwrap(),
            "-o",
            second.to_str().unwrap(),
        ],
        tmp.path(),
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(!first.exists());
    assert_eq!(std::fs::read(&second).unwrap(), output.stdout);
}
