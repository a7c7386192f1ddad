use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("canjson-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn canonicalizes_file_input() -> Result<(), Box<dyn std::error::Error>> {
    let input = "{\n  \"foo\": 1,\n  \"bar\": [true, \"x\"],\n  \"baz\": {}\n}\n";
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("canjson-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert_eq!(out.trim_end(), r#"{"bar":[true,"x"],"baz":{},"foo":1}"#);
    Ok(())
}

#[test]
fn omit_empty_drops_members() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, r#"{{"b": 0, "a": "", "c": [0], "d": null}}"#)?;

    Command::new(assert_cmd::cargo::cargo_bin!("canjson-cli"))
        .arg("--omit-empty")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"c\":[0]}\n"));
    Ok(())
}

#[test]
fn invalid_json_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{{not json")?;

    Command::new(assert_cmd::cargo::cargo_bin!("canjson-cli"))
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());
    Ok(())
}

#[test]
fn accepts_integers_past_i64() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, r#"{{"id": 18446744073709551615}}"#)?;

    Command::new(assert_cmd::cargo::cargo_bin!("canjson-cli"))
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"id\":18446744073709552000}\n"));
    Ok(())
}
