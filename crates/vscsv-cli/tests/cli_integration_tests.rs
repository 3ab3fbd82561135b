// vscsv - Delimiter-Separated Value Tooling
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

fn vscsv_cmd() -> Command {
    Command::cargo_bin("vscsv").expect("Failed to find vscsv binary")
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

const PEOPLE: &str = "id,name,city\n1,\"Smith, J\",London\n2,Ada,Paris\n";
const RAGGED: &str = "id,name,city\n1,Ada\n2,Grace,NYC\n";

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    vscsv_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version_output() {
    vscsv_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vscsv"));
}

#[test]
fn test_no_subcommand_fails() {
    vscsv_cmd().assert().failure();
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_valid_file() {
    let file = create_temp_file(PEOPLE, ".csv");
    vscsv_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 4"))
        .stdout(predicate::str::contains("Columns: 3"))
        .stdout(predicate::str::contains("Ragged rows: 0"));
}

#[test]
fn test_validate_ragged_non_strict_succeeds() {
    let file = create_temp_file(RAGGED, ".csv");
    vscsv_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ragged rows: 1"))
        .stdout(predicate::str::contains("line 2: expected 3 columns, found 2"));
}

#[test]
fn test_validate_ragged_strict_fails() {
    let file = create_temp_file(RAGGED, ".csv");
    vscsv_cmd()
        .arg("validate")
        .arg("--strict")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: 1 ragged row(s) found"));
}

#[test]
fn test_validate_strict_trailing_quoted_empty_row_fails() {
    let file = create_temp_file("a,b\n1,2\n\"\"", ".csv");
    vscsv_cmd()
        .arg("validate")
        .arg("--strict")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: 1 ragged row(s) found"));

    vscsv_cmd()
        .arg("lint")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected 2 columns, found 1"));
}

#[test]
fn test_validate_missing_file() {
    vscsv_cmd()
        .arg("validate")
        .arg("/nonexistent/file.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}

#[test]
fn test_validate_size_limit() {
    let file = create_temp_file(PEOPLE, ".csv");
    vscsv_cmd()
        .env("VSCSV_MAX_FILE_SIZE", "8")
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_validate_invalid_delimiter() {
    let file = create_temp_file(PEOPLE, ".csv");
    vscsv_cmd()
        .args(["validate", "--delimiter", "\""])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid delimiter"));
}

// ===== Lint Command Tests =====

#[test]
fn test_lint_clean_file() {
    let file = create_temp_file(PEOPLE, ".csv");
    vscsv_cmd()
        .arg("lint")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));
}

#[test]
fn test_lint_warning_only_succeeds() {
    let file = create_temp_file(RAGGED, ".csv");
    vscsv_cmd()
        .arg("lint")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected 3 columns, found 2"));
}

#[test]
fn test_lint_warn_error_fails() {
    let file = create_temp_file(RAGGED, ".csv");
    vscsv_cmd()
        .args(["lint", "-W"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Lint errors found"));
}

#[test]
fn test_lint_json_output() {
    let file = create_temp_file(RAGGED, ".csv");
    let output = vscsv_cmd()
        .args(["lint", "--format", "json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let diagnostics = json["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["rule"], "ragged-row");
    assert_eq!(diagnostics[0]["severity"], "warning");
    assert_eq!(diagnostics[0]["line"], 2);
}

#[test]
fn test_lint_unknown_format() {
    let file = create_temp_file(PEOPLE, ".csv");
    vscsv_cmd()
        .args(["lint", "--format", "xml"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

// ===== Format Command Tests =====

#[test]
fn test_format_canonicalizes_quotes() {
    let file = create_temp_file("\"a\",\"b c\"\n\"1\",2\n", ".csv");
    vscsv_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout("a,b c\n1,2\n");
}

#[test]
fn test_format_check_canonical() {
    let file = create_temp_file(PEOPLE, ".csv");
    vscsv_cmd()
        .args(["format", "--check"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File is in canonical form"));
}

#[test]
fn test_format_check_not_canonical() {
    let file = create_temp_file("\"a\",b\n", ".csv");
    vscsv_cmd()
        .args(["format", "--check"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in canonical form"));
}

#[test]
fn test_format_convert_to_tab() {
    let file = create_temp_file(PEOPLE, ".csv");
    let out = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    vscsv_cmd()
        .args(["format", "--to", "tab", "-o"])
        .arg(out.path())
        .arg(file.path())
        .assert()
        .success();

    let written = fs::read_to_string(out.path()).unwrap();
    assert_eq!(written, "id\tname\tcity\n1\tSmith, J\tLondon\n2\tAda\tParis\n");
}

#[test]
fn test_format_crlf_normalized() {
    let file = create_temp_file("a,b\r\n1,2\r\n", ".csv");
    vscsv_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout("a,b\n1,2\n");
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect_text() {
    let file = create_temp_file(PEOPLE, ".csv");
    vscsv_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("city"))
        .stdout(predicate::str::contains("2 non-empty"));
}

#[test]
fn test_inspect_json_positions() {
    let file = create_temp_file("a,\"b\"", ".csv");
    let output = vscsv_cmd()
        .args(["inspect", "--json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0][1]["value"], "b");
    assert_eq!(json[0][1]["column"], 2);
    assert_eq!(json[0][1]["columnEnd"], 5);
}

// ===== Preview Command Tests =====

#[test]
fn test_preview_values() {
    let file = create_temp_file("a,b\n1,2", ".csv");
    vscsv_cmd()
        .arg("preview")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"command":"update","data":[["a","b"],["1","2"]]}"#,
        ));
}

#[test]
fn test_preview_filter() {
    let file = create_temp_file(PEOPLE, ".csv");
    vscsv_cmd()
        .args(["preview", "--filter", "paris"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"[["id","name","city"],["2","Ada","Paris"]]"#,
        ));
}

#[test]
fn test_preview_records_with_filter_fails() {
    let file = create_temp_file(PEOPLE, ".csv");
    vscsv_cmd()
        .args(["preview", "--records", "--filter", "x"])
        .arg(file.path())
        .assert()
        .failure();
}

// ===== Detect Command Tests =====

#[test]
fn test_detect_from_extension() {
    let file = create_temp_file("a,b", ".tsv");
    vscsv_cmd()
        .arg("detect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\\t (extension)"));
}

#[test]
fn test_detect_sniffed() {
    let file = create_temp_file("a;b;c\n1;2;3\n", ".txt");
    vscsv_cmd()
        .arg("detect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("; (detected)"));
}

#[test]
fn test_detect_default() {
    let file = create_temp_file("single\n", ".txt");
    vscsv_cmd()
        .arg("detect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(", (default)"));
}
