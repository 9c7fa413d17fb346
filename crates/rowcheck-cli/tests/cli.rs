//! End-to-end tests of the `rowcheck` binary's exit codes and stdout.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rowcheck_cli::pipeline::exit_code;
use tempfile::TempDir;

const HEADER: &str =
    "telephone;height;inn;identifier;occupation;latitude;blood_type;issn;uuid;date";
const VALID_ROW: &str = "+7-(495)-123-45-67;1.65;500100732259;12-34/56;Teacher;55.7558;O+;0028-0836;8c0b7b4e-3c2f-4b8a-9d3e-2f1a0b9c8d7e;2021-07-15";

fn rowcheck_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rowcheck"))
}

fn write_utf16(path: &Path, text: &str) {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}

fn run_check(dir: &Path, input: &Path) -> Output {
    Command::new(rowcheck_bin())
        .arg("check")
        .arg(input)
        .arg("--output")
        .arg(dir.join("result.json"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run rowcheck")
}

#[test]
fn test_check_success_prints_checksum_first() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("80.csv");
    write_utf16(&input, &format!("{HEADER}\n{VALID_ROW}\n"));

    let output = run_check(temp_dir.path(), &input);

    assert_eq!(output.status.code(), Some(exit_code::SUCCESS));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("d751713988987e9331980363e24189ce"));
    assert!(temp_dir.path().join("result.json").exists());
}

#[test]
fn test_missing_input_exits_with_input_code() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_check(temp_dir.path(), &temp_dir.path().join("absent.csv"));

    assert_eq!(output.status.code(), Some(exit_code::INPUT_NOT_FOUND));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.csv"));
    assert!(!temp_dir.path().join("result.json").exists());
}

#[test]
fn test_header_without_inn_exits_with_malformed_code() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("80.csv");
    let header = HEADER.replace(";inn", ";tax_id");
    write_utf16(&input, &format!("{header}\n{VALID_ROW}\n"));

    let output = run_check(temp_dir.path(), &input);

    assert_eq!(output.status.code(), Some(exit_code::MALFORMED_INPUT));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'inn'"));
    assert!(!temp_dir.path().join("result.json").exists());
}

#[test]
fn test_encoding_error_exits_with_encoding_code() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("80.csv");
    fs::write(&input, [0xFF, 0xFE, 0x00, 0xDC, 0x41]).unwrap();

    let output = run_check(temp_dir.path(), &input);

    assert_eq!(output.status.code(), Some(exit_code::ENCODING));
}

#[test]
fn test_verify_mismatch_exits_with_failure_code() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("80.csv");
    write_utf16(&input, &format!("{HEADER}\n{VALID_ROW}\n"));
    let result = temp_dir.path().join("stored.json");
    fs::write(&result, r#"{"variant": 80, "checksum": "e4cad8e19a57da50f84d42ac0b8fff1a"}"#)
        .unwrap();

    let output = Command::new(rowcheck_bin())
        .arg("verify")
        .arg(&input)
        .arg("--result")
        .arg(&result)
        .output()
        .expect("failed to run rowcheck");

    assert_eq!(output.status.code(), Some(exit_code::FAILURE));
    assert!(String::from_utf8_lossy(&output.stderr).contains("checksum mismatch"));
}

#[test]
fn test_unwritable_output_exits_with_output_code() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("80.csv");
    write_utf16(&input, &format!("{HEADER}\n{VALID_ROW}\n"));
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let output = Command::new(rowcheck_bin())
        .arg("check")
        .arg(&input)
        .arg("--output")
        .arg(blocker.join("result.json"))
        .output()
        .expect("failed to run rowcheck");

    assert_eq!(output.status.code(), Some(exit_code::OUTPUT_WRITE));
    assert!(output.stdout.is_empty());
}
