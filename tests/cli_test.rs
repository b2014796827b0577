use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

const DEMANDS_DOCUMENT: &str = r#"{
    "account": {
        "transactions": {
            "pageInfo": { "endCursor": null, "hasNextPage": false },
            "edges": [
                {
                    "node": {
                        "id": "t1",
                        "amount": { "value": "50.00", "currency": "EUR" },
                        "createdAt": "2025-01-08T12:47:44.170Z",
                        "beneficiary": { "name": "ERIKA", "iban": "ES6411112222008763481670" }
                    }
                }
            ]
        }
    }
}"#;

fn demands_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{DEMANDS_DOCUMENT}").unwrap();
    file
}

fn base_command(input: &tempfile::NamedTempFile) -> Command {
    let mut cmd = Command::new(cargo_bin!("demandpay"));
    cmd.env_remove("RUST_LOG")
        .arg(input.path())
        .arg("--demand-id")
        .arg("t1")
        .arg("--account-id")
        .arg("account-1")
        .arg("--account-membership-id")
        .arg("m-1");
    cmd
}

#[test]
fn test_cli_initiated_end_to_end() {
    let input = demands_file();
    let mut cmd = base_command(&input);
    cmd.arg("--outcome").arg("initiated");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "transfer initiated (payment payment-1)",
        ))
        .stderr(predicate::str::contains("Transfer initiated"))
        .stderr(predicate::str::contains("/accounts/m-1/transactions"));
}

#[test]
fn test_cli_rejected_end_to_end() {
    let input = demands_file();
    let mut cmd = base_command(&input);
    cmd.arg("--outcome").arg("rejected");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "transfer rejected (payment payment-1)",
        ))
        .stderr(predicate::str::contains("Transfer rejected"));
}

#[test]
fn test_cli_consent_pending_end_to_end() {
    let input = demands_file();
    let mut cmd = base_command(&input);
    cmd.arg("--outcome")
        .arg("consent-pending")
        .arg("--consent-url")
        .arg("https://consent.example/p1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "awaiting external consent (payment payment-1)",
        ))
        .stderr(predicate::str::contains(
            "redirecting to external consent page",
        ))
        .stderr(predicate::str::contains("https://consent.example/p1"));
}

#[test]
fn test_cli_unknown_demand_id() {
    let input = demands_file();
    let mut cmd = Command::new(cargo_bin!("demandpay"));
    cmd.env_remove("RUST_LOG")
        .arg(input.path())
        .arg("--demand-id")
        .arg("missing")
        .arg("--account-id")
        .arg("account-1")
        .arg("--account-membership-id")
        .arg("m-1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not in the pending list"));
}
