use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_defaults_to_the_go_target() {
    Command::cargo_bin("rxc")
        .unwrap()
        .arg("a(b|c)*d")
        .assert()
        .success()
        .stdout(predicate::str::contains("package main"))
        .stdout(predicate::str::contains(
            "concat(concat(char('a'), closure(or(char('b'), char('c')), 0)), char('d'))",
        ));
}

#[test]
fn cli_selects_the_python_target() {
    Command::cargo_bin("rxc")
        .unwrap()
        .arg("--output-lang")
        .arg("python3")
        .arg("ab|cd")
        .assert()
        .success()
        .stdout(predicate::str::contains("class Matcher"))
        .stdout(predicate::str::contains(
            "((Char('a') + Char('b')) | (Char('c') + Char('d')))",
        ));
}

#[test]
fn cli_target_names_are_case_insensitive() {
    Command::cargo_bin("rxc")
        .unwrap()
        .arg("-l")
        .arg("C")
        .arg("a+")
        .assert()
        .success()
        .stdout(predicate::str::contains("#include <stdio.h>"));
}

#[test]
fn cli_rejects_unknown_targets() {
    Command::cargo_bin("rxc")
        .unwrap()
        .arg("-l")
        .arg("cobol")
        .arg("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot find output language \"cobol\"",
        ))
        .stderr(predicate::str::contains("c, golang, python3"));
}

#[test]
fn cli_reports_lexical_errors() {
    Command::cargo_bin("rxc")
        .unwrap()
        .arg("a?b")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: cannot sieve: '?' is not an allowed symbol",
        ));
}

#[test]
fn cli_reports_parse_errors_with_partial_result() {
    Command::cargo_bin("rxc")
        .unwrap()
        .arg("a|")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: cannot convert to RPN: \
             empty union operand: partial result \"a\"",
        ));
}

#[test]
fn cli_requires_a_regex_argument() {
    Command::cargo_bin("rxc").unwrap().assert().failure();
}

#[test]
fn cli_writes_output_files() {
    let output_path = std::env::temp_dir().join("rxc_cli_writes_output.go");

    Command::cargo_bin("rxc")
        .unwrap()
        .arg("-o")
        .arg(&output_path)
        .arg("xy")
        .assert()
        .success()
        .stdout("");

    let code = std::fs::read_to_string(&output_path).unwrap();
    assert!(code.contains("concat(char('x'), char('y'))"));

    std::fs::remove_file(&output_path).unwrap();
}
