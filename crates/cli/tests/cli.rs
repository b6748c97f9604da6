// ABOUTME: Integration tests for the element-filter CLI binary.
// ABOUTME: Tests filtering from files and stdin, config files, JSON output, and validation.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn filter_cmd() -> Command {
    Command::cargo_bin("element-filter").unwrap()
}

#[test]
fn filters_file_with_selector_flag() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("page.html");
    fs::write(
        &html_path,
        r#"<div class="sidebar-filters">X</div><p>Y</p>"#,
    )
    .unwrap();

    filter_cmd()
        .arg("-s")
        .arg(".sidebar-filters")
        .arg(&html_path)
        .assert()
        .success()
        .stdout("<p>Y</p>\n");
}

#[test]
fn reads_stdin_by_default() {
    filter_cmd()
        .arg("--selector")
        .arg("nav")
        .write_stdin("<nav>menu</nav><p>body</p>")
        .assert()
        .success()
        .stdout("<p>body</p>\n");
}

#[test]
fn invalid_selector_does_not_fail_filtering() {
    filter_cmd()
        .arg("-s")
        .arg("###invalid")
        .write_stdin("<p>A</p>")
        .assert()
        .success()
        .stdout("<p>A</p>\n");
}

#[test]
fn config_file_selectors() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("filter.json");
    fs::write(&config_path, r#"{"css_selectors": "div.a\r\n\r\ndiv.b"}"#).unwrap();

    filter_cmd()
        .arg("--config")
        .arg(&config_path)
        .write_stdin(r#"<div class="a">1</div><div class="b">2</div><div class="c">3</div>"#)
        .assert()
        .success()
        .stdout("<div class=\"c\">3</div>\n");
}

#[test]
fn json_output_lists_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let one = temp_dir.path().join("one.html");
    let two = temp_dir.path().join("two.html");
    fs::write(&one, "<p>one</p><aside>x</aside>").unwrap();
    fs::write(&two, "<aside>y</aside><p>two</p>").unwrap();

    let output = filter_cmd()
        .args(["-s", "aside", "--json"])
        .arg(&one)
        .arg(&two)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["output"], "<p>one</p>");
    assert_eq!(entries[1]["output"], "<p>two</p>");
}

#[test]
fn output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.html");

    filter_cmd()
        .args(["-s", ".ad", "-o"])
        .arg(&output_path)
        .write_stdin(r#"<b class="ad">x</b><p>kept</p>"#)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output_path).unwrap(), "<p>kept</p>");
}

#[test]
fn validate_accepts_good_selectors() {
    filter_cmd()
        .args(["--validate", "-s", ".sidebar-filters", "-s", "nav > ul"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn validate_reports_bad_selectors() {
    filter_cmd()
        .args(["--validate", "-s", "p", "-s", "###invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid CSS Selector: ###invalid"));
}

#[test]
fn validate_requires_selectors() {
    filter_cmd()
        .arg("--validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CSS Selectors field is required"));
}

#[test]
fn missing_input_file_fails() {
    filter_cmd()
        .args(["-s", "p", "/nonexistent/page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
