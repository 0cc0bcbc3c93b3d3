use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_adfmt")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_source() {
    let input = std::fs::read_to_string(fixture_path("users.json")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("users.expected.py")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn stdin_mode_multi_section_groups() {
    let input = std::fs::read_to_string(fixture_path("search.json")).unwrap();

    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("class ApiDocSearch(object):"))
        .stdout(predicate::str::contains("@apiParam (params-1) {String} name"))
        .stdout(predicate::str::contains("@apiParam (params-2) {String} tag"))
        .stdout(predicate::str::contains("@apiParam (params-3) {Number} page"))
        .stdout(predicate::str::contains("@apiParamExample {json} param-example-params-3"));
}

#[test]
fn stdin_mode_empty_unit() {
    cmd()
        .write_stdin(r#"{"name": "empty"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("class ApiDocEmpty(object):\n    pass\n"));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("users.json"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("users.py")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("users.expected.py")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn file_mode_multiple_files() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("users.json"))
        .arg(fixture_path("search.json"))
        .assert()
        .success();

    assert!(dir.path().join("users.py").exists());
    assert!(dir.path().join("search.py").exists());
}

#[test]
fn file_mode_creates_nested_output_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("docs").join("api");

    cmd()
        .args(["-o", nested.to_str().unwrap()])
        .arg(fixture_path("users.json"))
        .assert()
        .success();

    assert!(nested.join("users.py").exists());
}

#[test]
fn file_mode_without_output_prints() {
    cmd()
        .arg(fixture_path("users.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#!/usr/bin/env python3\n"))
        .stdout(predicate::str::contains("def users_create() -> None:"));
}

#[test]
fn file_mode_glob_pattern() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::copy(fixture_path("users.json"), src.path().join("users.json")).unwrap();
    std::fs::copy(fixture_path("search.json"), src.path().join("search.json")).unwrap();

    let pattern = format!("{}/*.json", src.path().display());
    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(&pattern)
        .assert()
        .success();

    assert!(out.path().join("users.py").exists());
    assert!(out.path().join("search.py").exists());
}

#[test]
fn file_mode_unmatched_glob_warns() {
    let out = TempDir::new().unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg("/nonexistent/*.json")
        .assert()
        .success()
        .stderr(predicate::str::contains("no files matched"));
}

// -- explanations --

#[test]
fn explain_file_overrides_manifest() {
    cmd()
        .args(["-e", &fixture_path("explain.json")])
        .arg(fixture_path("users.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("@apiParam {Number} page which page to return"))
        .stdout(predicate::str::contains("@apiSuccess {Number} items.0.id user id"));
}

#[test]
fn missing_explain_file_fails() {
    cmd()
        .args(["-e", "/nonexistent/explain.json"])
        .arg(fixture_path("users.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read explanations"));
}

// -- invalid manifests --

#[test]
fn unknown_method_fails() {
    let input = r#"{"name": "u", "endpoints": [{"path": "/a", "method": "fetch", "title": "A"}]}"#;

    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("`fetch` is not a member of RequestMethod"));
}

#[test]
fn unknown_permission_fails() {
    let input = r#"{"name": "u", "permission": "root", "endpoints": []}"#;

    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("`root` is not a member of Permission"));
}

#[test]
fn relative_path_fails() {
    let input = r#"{"name": "u", "endpoints": [{"path": "users", "method": "get", "title": "A"}]}"#;

    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal path `users`"));
}

#[test]
fn invalid_file_names_the_manifest() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{not json").unwrap();

    cmd()
        .arg(bad.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid manifest"))
        .stderr(predicate::str::contains("bad.json"));
}
