use assert_cmd::Command;

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("particlekit").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("particlekit").unwrap();
    cmd.arg("-V");
    cmd.assert()
        .success()
        .stdout(predicates::str::starts_with("particlekit "));
}

// Info subcommand tests

#[test]
fn info_known_element_succeeds() {
    let mut cmd = Command::cargo_bin("particlekit").unwrap();
    cmd.args(["info", "Fe"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("iron"))
        .stdout(predicates::str::contains("atomic number: 26"));
}

#[test]
fn info_ion_reports_charge() {
    let mut cmd = Command::cargo_bin("particlekit").unwrap();
    cmd.args(["info", "He-4 2+"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("charge:        +2"));
}

#[test]
fn info_unknown_symbol_fails() {
    let mut cmd = Command::cargo_bin("particlekit").unwrap();
    cmd.args(["info", "Xx"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("invalid particle"));
}

#[test]
fn info_json_output_format() {
    let mut cmd = Command::cargo_bin("particlekit").unwrap();
    cmd.args(["info", "e-", "--output", "json"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"symbol\": \"e-\""))
        .stdout(predicates::str::contains("\"kind\": \"lepton\""));
}

#[test]
fn info_missing_mass_is_reported_not_fatal() {
    let mut cmd = Command::cargo_bin("particlekit").unwrap();
    cmd.args(["info", "Tc"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("not tabulated"));
}

// Name subcommand tests

#[test]
fn name_maps_atomic_number() {
    let mut cmd = Command::cargo_bin("particlekit").unwrap();
    cmd.args(["name", "1"]);
    cmd.assert().success().stdout("hydrogen\n");
}

#[test]
fn name_rejects_out_of_range() {
    let mut cmd = Command::cargo_bin("particlekit").unwrap();
    cmd.args(["name", "119"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("not in 1..=118"));
}
