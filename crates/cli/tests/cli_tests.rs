//! End-to-end tests of the `neo-invoke` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONTRACT: &str = "0x0102030405060708090a0b0c0d0e0f1011121314";

fn neo_invoke(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("neo-invoke").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn write_registry(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("contracts.json");
    fs::write(
        &path,
        format!(
            r#"[{{"hash": "{CONTRACT}", "name": "Scenario", "code_version": "1.0", "author": "neo", "parameter_list": [2, 16], "return_type": 1}}]"#
        ),
    )
    .unwrap();
    path
}

#[test]
fn test_encode_prints_metadata_and_script() {
    let dir = TempDir::new().unwrap();
    let registry = write_registry(&dir);

    neo_invoke(&dir)
        .arg("encode")
        .arg("--registry")
        .arg(&registry)
        .arg("--contract")
        .arg(CONTRACT)
        .arg("--arg")
        .arg("42")
        .arg("--arg")
        .arg(r#"[{"type":"Integer","value":"7"},{"type":"Integer","value":"9"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Scenario"))
        .stdout(predicate::str::contains("Parameters: [Integer, Array]"))
        .stdout(predicate::str::contains(
            "Script: 595752c1012a6714131211100f0e0d0c0b0a090807060504030201",
        ));
}

#[test]
fn test_encode_unknown_contract_fails() {
    let dir = TempDir::new().unwrap();
    let registry = write_registry(&dir);

    neo_invoke(&dir)
        .args(["encode", "--contract", "0x0000000000000000000000000000000000000001", "--registry"])
        .arg(&registry)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contract not found"));
}

#[test]
fn test_encode_wrong_argument_count_fails() {
    let dir = TempDir::new().unwrap();
    let registry = write_registry(&dir);

    neo_invoke(&dir)
        .args(["encode", "--contract", CONTRACT, "--arg", "1", "--registry"])
        .arg(&registry)
        .assert()
        .failure()
        .stderr(predicate::str::contains("takes 2 arguments, 1 given"));
}

#[test]
fn test_import_prints_hex() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("call.avm");
    fs::write(&script, [0x00, 0x67, 0xAB]).unwrap();

    neo_invoke(&dir)
        .arg("import")
        .arg(&script)
        .assert()
        .success()
        .stdout("0067ab\n");
}

#[test]
fn test_estimate_uses_configured_allowance() {
    let dir = TempDir::new().unwrap();

    neo_invoke(&dir)
        .args(["estimate", "--gas-consumed", "12.3"])
        .assert()
        .success()
        .stdout("Gas: 3\nNetwork Fee: 3\n");

    fs::write(
        dir.path().join("neo-invoke.toml"),
        "[fees]\nfree_gas_allowance = \"12\"\nmin_network_fee = \"0.5\"\n",
    )
    .unwrap();

    neo_invoke(&dir)
        .args(["estimate", "--gas-consumed", "12.3"])
        .assert()
        .success()
        .stdout("Gas: 1\nNetwork Fee: 1\n");

    neo_invoke(&dir)
        .args(["estimate", "--gas-consumed", "11"])
        .assert()
        .success()
        .stdout("Gas: 0\nNetwork Fee: 0.5\n");
}

#[test]
fn test_interpret_halt() {
    let dir = TempDir::new().unwrap();
    let result = dir.path().join("result.json");
    fs::write(
        &result,
        r#"{"state": "HALT", "gas_consumed": "10.5", "stack": [{"type": "Integer", "value": "1"}]}"#,
    )
    .unwrap();

    neo_invoke(&dir)
        .arg("interpret")
        .arg("--result")
        .arg(&result)
        .assert()
        .success()
        .stdout(predicate::str::contains("VM State: HALT"))
        .stdout(predicate::str::contains("Gas Consumed: 10.5"))
        .stdout(predicate::str::contains(
            r#"Evaluation Stack: [{"type":"Integer","value":"1"}]"#,
        ))
        .stdout(predicate::str::contains("Network Fee: 1"));
}

#[test]
fn test_interpret_fault_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let result = dir.path().join("result.json");
    fs::write(&result, r#"{"state": "HALT, FAULT", "gas_consumed": "3"}"#).unwrap();

    neo_invoke(&dir)
        .arg("interpret")
        .arg("--result")
        .arg(&result)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Network Fee").not())
        .stderr(predicate::str::contains("Execution failed"))
        .stderr(predicate::str::contains("VM State: HALT, FAULT"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("neo-invoke.toml"), "[fees\n").unwrap();

    neo_invoke(&dir)
        .args(["estimate", "--gas-consumed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}
