use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_JWT: &str =
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.signature";

fn pasteur(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pasteur").unwrap();
    cmd.env("PASTEUR_HOME", home);
    cmd
}

#[test]
fn json_pretty_prints() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["json", r#"{"a":1}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 1"));
}

#[test]
fn json_minifies() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["json", "--minify", "{ \"a\" : 1 }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"a":1}"#));
}

#[test]
fn json_rejects_garbage() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["json", "{nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn base64_decodes() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["base64", "--decode", "SGVsbG8sIFdvcmxkIQ=="])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, World!"));
}

#[test]
fn base64_reads_piped_stdin() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["base64"])
        .write_stdin("Hello, World!")
        .assert()
        .success()
        .stdout(predicate::str::contains("SGVsbG8sIFdvcmxkIQ=="));
}

#[test]
fn time_converts_epoch() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["time", "1700000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-11-14T22:13:20"));
}

#[test]
fn jwt_decodes_header_and_payload() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["jwt", SAMPLE_JWT])
        .assert()
        .success()
        .stdout(predicate::str::contains("HS256"))
        .stdout(predicate::str::contains("1234567890"));
}

#[test]
fn regex_reports_matches() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["regex", "/a./g", "ab ac"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ab\""))
        .stdout(predicate::str::contains("\"ac\""));
}

#[test]
fn analyze_names_the_route() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["analyze", "1700000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timestamp Converter"));
}

#[test]
fn paste_routes_and_converts() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["paste", r#"{"a":1}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON Formatter"))
        .stdout(predicate::str::contains("\"a\": 1"));
}

#[test]
fn paste_decodes_mixed_alphabet_base64() {
    // Contains both '+' (standard) and '_' (URL-safe); the detector accepts
    // it, so the routed decode must too.
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["paste", "YWI+YWI+YWI+YWI+YWI_"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base64 Converter"))
        .stdout(predicate::str::contains("ab>ab>ab>ab>ab?"));
}

#[test]
fn paste_unknown_text_falls_back_without_failing() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["paste", "not a recognizable format at all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recognized format"))
        .stdout(predicate::str::contains("not a recognizable format at all"));
}

#[test]
fn paste_records_history() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["paste", "--dry-run", "1700000000"])
        .assert()
        .success();

    pasteur(home.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1700000000"))
        .stdout(predicate::str::contains("timestamp"));

    pasteur(home.path())
        .args(["history", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared"));

    pasteur(home.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No detections recorded yet"));
}

#[test]
fn config_get_and_set() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base64-printable-ratio = 0.7"));

    pasteur(home.path())
        .args(["config", "history-limit", "5"])
        .assert()
        .success();

    pasteur(home.path())
        .args(["config", "history-limit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("history-limit = 5"));
}

#[test]
fn version_flag_reports_build_info() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_rejects_unknown_keys() {
    let home = tempfile::tempdir().unwrap();
    pasteur(home.path())
        .args(["config", "no-such-key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
