use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

const SESSION: &str = "3\n2\n0:1:5\n1:2:3\n1\n0:2:9\n0\n2\n";

fn cli() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo_bin!("citygraph-cli"))
}

#[test]
fn cli_reads_session_from_stdin_and_prints_json() {
    let output = cli()
        .write_stdin(SESSION)
        .assert()
        .success()
        .stdout(predicate::str::contains("  3 cities (0 - 2) have been added."))
        .stdout(predicate::str::contains(
            "      New optional road from 0 to 2 with length 9.",
        ))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("utf8 stdout");
    let json_line = stdout.lines().last().expect("json line");
    let value: serde_json::Value = serde_json::from_str(json_line).expect("json");
    assert_eq!(value["endpoints"], serde_json::json!({ "source": 0, "target": 2 }));
    assert_eq!(value["cities"]["roads"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["optional_roads"][0]["class"], "optional");
}

#[test]
fn cli_reports_validation_errors_on_stderr() {
    cli()
        .write_stdin("1\n2\n1\n5:1:5\n0:1:5\n0\n0\n1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Error: There must be at least 2 cities in your graph.",
        ))
        .stderr(predicate::str::contains("between 0 and 1 inclusive"));
}

#[test]
fn cli_replays_scripted_file_and_writes_out_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let script = tmp.path().join("session.txt");
    let out = tmp.path().join("graph.json");
    fs::write(&script, SESSION).expect("write script");

    let exe = assert_cmd::cargo_bin!("citygraph-cli");
    Command::new(exe)
        .args([
            "--pretty",
            "--out",
            out.to_string_lossy().as_ref(),
            script.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("read json");
    assert!(text.contains("\n  \"endpoints\""), "not pretty: {text}");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value["cities"]["cities"].as_array().map(Vec::len), Some(3));
}

#[test]
fn cli_lenient_flag_accepts_self_loops() {
    cli()
        .arg("--lenient")
        .write_stdin("2\n1\n1:1:0\n0\n0\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "      New mandatory road from 1 to 1 with length 0.",
        ))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn cli_exits_with_input_closed_status_on_truncated_session() {
    cli()
        .write_stdin("3\n2\n0:1:5\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Input ended while waiting for road details"));
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    cli()
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("USAGE:"));
}
