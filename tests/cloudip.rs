use assert_cmd::Command;
use predicates::prelude::*;

/*-------------------------------------------------------------------------------------------------
  cloudip Binary Tests
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Version and Help
--------------------------------------------------------------------------------------*/

#[test]
fn command_version() {
    Command::cargo_bin("cloudip")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn command_help_lists_flags() {
    Command::cargo_bin("cloudip")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--vendor"))
        .stdout(predicate::str::contains("--iptype"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--config"));
}

/*--------------------------------------------------------------------------------------
  Argument Validation
--------------------------------------------------------------------------------------*/

#[test]
fn command_no_args_requires_vendor() {
    Command::cargo_bin("cloudip")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--vendor"));
}

#[test]
fn command_unknown_vendor() {
    Command::cargo_bin("cloudip")
        .unwrap()
        .args(["--vendor", "oracle"])
        .assert()
        .failure();
}

#[test]
fn command_unknown_iptype() {
    Command::cargo_bin("cloudip")
        .unwrap()
        .args(["-v", "aws", "-i", "5"])
        .assert()
        .failure();
}

#[test]
fn command_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("aws.csv");

    Command::cargo_bin("cloudip")
        .unwrap()
        .args(["-v", "aws", "--config"])
        .arg(dir.path().join("missing.yaml"))
        .arg("--file")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("configuration error"));

    assert!(!output.exists());
}

/*--------------------------------------------------------------------------------------
  Vendor Exports (network)
--------------------------------------------------------------------------------------*/

#[test]
#[ignore = "requires network access"]
fn command_google_ipv4_console() {
    Command::cargo_bin("cloudip")
        .unwrap()
        .args(["-v", "google", "-i", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/"));
}

#[test]
#[ignore = "requires network access"]
fn command_aws_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("aws.csv");

    Command::cargo_bin("cloudip")
        .unwrap()
        .args(["-v", "aws", "-i", "6", "--summary", "--file"])
        .arg(&output)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("Prefix,Region,Service,Network Border Group\n"));
}
