//! Runs the `classpick` binary end to end.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn classpick() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_classpick"));
    command.env_remove("CLASSPICK_LOG").env_remove("RUST_LOG");
    command
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_exit_zero_on_match() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "App.tsx", "<a className={clsx('underline text-|')} />");
    let output = classpick()
        .arg(&file)
        .args(["--marker", "|", "--suggest", "text-sm"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("class-functions"));
    assert!(text.contains("extracted  \"text-\""));
    assert!(text.contains("with \"text-sm\""));
}

#[test]
fn test_exit_one_without_match() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "plain.ts", "export const x = 1\n");
    let output = classpick().arg(&file).args(["--cursor", "3"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_exit_two_on_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.tsx");
    let output = classpick().arg(&missing).args(["--cursor", "0"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: failed to read"));

    let file = write_file(dir.path(), "a.tsx", "cn('')");
    let output = classpick()
        .arg(&file)
        .args(["--cursor", "4", "--lookback", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let output = classpick().arg(&file).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_reads_stdin_and_prints_json() {
    let mut child = classpick()
        .args(["-", "--line", "2", "--column", "23", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b".btn {\n  --uno-apply: p-4 sha;\n}\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["file"], "-");
    assert_eq!(value["match"]["extractor"], "css-directives");
    assert_eq!(value["match"]["extracted"], "sha");
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        dir.path(),
        "classpick.json",
        "{\n  // only objects\n  \"enableFunctions\": false,\n}\n",
    );
    let file = write_file(dir.path(), "a.ts", "cn({ base: 'fle|' })");
    let output = classpick()
        .arg(&file)
        .args(["--marker", "|", "--format", "json", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["match"]["extractor"], "object-completion");
}
