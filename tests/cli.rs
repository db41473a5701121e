use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn lints_a_clean_dashboard() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dashlint")?;

    cmd.arg("lint").arg("--file").arg("tests/fixtures/dashboard.json");
    cmd.assert().success();

    Ok(())
}

#[test]
fn reports_invalid_units() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dashlint")?;

    cmd.arg("lint")
        .arg("--file")
        .arg("tests/fixtures/invalid_units.json");
    cmd.assert().failure().stdout(predicate::str::contains(
        "has no or invalid units defined: 'xyz'",
    ));

    Ok(())
}

#[test]
fn reports_a_parse_error_for_a_malformed_datasource() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dashlint")?;

    cmd.arg("lint")
        .arg("--file")
        .arg("tests/fixtures/invalid_datasource.json");
    cmd.assert().failure().stdout(predicate::str::contains(
        "invalid type for field 'datasource'",
    ));

    Ok(())
}

#[test]
fn shows_a_dashboard() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dashlint")?;

    cmd.arg("show").arg("--file").arg("tests/fixtures/dashboard.json");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Service overview"));

    Ok(())
}

#[test]
fn file_doesnt_exist() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dashlint")?;

    cmd.arg("lint").arg("--file").arg("test/file/doesnt/exist");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No such file or directory"));

    Ok(())
}
