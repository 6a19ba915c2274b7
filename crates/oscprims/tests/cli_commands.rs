#![cfg(feature = "cli")]

use std::process::{Command, Output};

const FREQUENCY_HEX: &str = "2f6f7363696c6c61746f722f342f6672657175656e6379002c66000043dc0000";

fn oscprims(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oscprims"))
        .args(["--log-level", "error"])
        .args(args)
        .output()
        .expect("oscprims should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    stdout(output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("line should be json"))
        .collect()
}

#[test]
fn encode_emits_reference_bytes() {
    let output = oscprims(&["--format", "json", "encode", "/oscillator/4/frequency 440.0(f)"]);
    assert!(output.status.success());

    let lines = json_lines(&output);
    assert_eq!(lines[0]["size"], 32);
    assert_eq!(lines[0]["framed"], false);
    assert_eq!(lines[0]["hex"], FREQUENCY_HEX);
}

#[test]
fn decode_prints_annotation() {
    let output = oscprims(&["--format", "pretty", "decode", "--hex", FREQUENCY_HEX]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/oscillator/4/frequency 440.0(f)\n");

    let output = oscprims(&[
        "--format",
        "raw",
        "decode",
        "--hex",
        FREQUENCY_HEX,
        "--style",
        "equals-comma",
        "--no-type-tags",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/oscillator/4/frequency=440.0\n");
}

#[test]
fn decode_json_describes_arguments() {
    let output = oscprims(&["--format", "json", "decode", "--hex", FREQUENCY_HEX]);
    assert!(output.status.success());

    let lines = json_lines(&output);
    assert_eq!(lines[0]["type"], "message");
    assert_eq!(lines[0]["address"], "/oscillator/4/frequency");
    assert_eq!(lines[0]["type_tags"], ",f");
    assert_eq!(lines[0]["args"][0]["tag"], "f");
    assert_eq!(lines[0]["args"][0]["value"], 440.0);
}

#[test]
fn framed_bundle_round_trips_through_cli() {
    let encoded = oscprims(&[
        "--format",
        "json",
        "encode",
        "/a 1",
        r#"/b "two words""#,
        "--framed",
    ]);
    assert!(encoded.status.success());
    let lines = json_lines(&encoded);
    assert_eq!(lines[0]["framed"], true);
    let hex = lines[0]["hex"].as_str().expect("hex should be a string");

    let decoded = oscprims(&["--format", "pretty", "decode", "--framed", "--hex", hex]);
    assert!(decoded.status.success());
    assert_eq!(
        stdout(&decoded),
        "#bundle immediate\n  /a 1(i)\n  /b \"two words\"(s)\n"
    );
}

#[test]
fn malformed_packet_exits_60() {
    let output = oscprims(&["decode", "--hex", "2f610000"]);
    assert!(output.status.success(), "address-only packet is valid");

    let output = oscprims(&["decode", "--hex", "2f6100"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn invalid_hex_exits_64() {
    let output = oscprims(&["decode", "--hex", "xyz"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn validate_exit_codes() {
    let ok = oscprims(&[
        "validate",
        r#"/an/address/pattern 1 3.142 "a string with spaces" string true"#,
    ]);
    assert_eq!(ok.status.code(), Some(0));

    let bad = oscprims(&["validate", r#"/an/address/pattern "unbalanced"#]);
    assert_eq!(bad.status.code(), Some(60));

    let bad = oscprims(&["validate", "--style", "equals-comma", "/a=1,,2"]);
    assert_eq!(bad.status.code(), Some(60));
}

#[test]
fn encode_rejects_invalid_annotation() {
    let output = oscprims(&["encode", "no-slash 1"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn match_exit_codes() {
    let output = oscprims(&["--format", "raw", "match", "/foo/{bar,baz}", "/foo/baz", "/foo/qux"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "/foo/baz\n");

    let output = oscprims(&["match", "/foo/[a-c]ar", "/foo/dar"]);
    assert_eq!(output.status.code(), Some(1));

    let output = oscprims(&["match", "/foo/[ab", "/foo/a"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn version_reports_package_version() {
    let output = oscprims(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("oscprims {}\n", env!("CARGO_PKG_VERSION"))
    );
}
