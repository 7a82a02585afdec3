//! CLI tests for the `pascal-lex` driver.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_prints_sample_program_by_default() {
    Command::cargo_bin("pascal-lex")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("type: IDENTIFIER value: program\n"))
        .stdout(predicate::str::contains("type: ASSIGN value: None"))
        .stdout(predicate::str::ends_with("type: END_OF_INPUT value: None\n"));
}

#[test]
fn test_prints_tokens_of_file() {
    let file = source_file("x := 2.5;");

    Command::cargo_bin("pascal-lex")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            "type: IDENTIFIER value: x\n\
             type: ASSIGN value: None\n\
             type: REAL_LITERAL value: 2.5\n\
             type: SEMI value: None\n\
             type: END_OF_INPUT value: None\n",
        );
}

#[test]
fn test_no_eof_flag() {
    let file = source_file("BEGIN END");

    Command::cargo_bin("pascal-lex")
        .unwrap()
        .arg(file.path())
        .arg("--no-eof")
        .assert()
        .success()
        .stdout("type: BEGIN value: BEGIN\ntype: END value: END\n");
}

#[test]
fn test_lex_error_exits_with_failure() {
    let file = source_file("x := 1;\n{ unterminated");

    Command::cargo_bin("pascal-lex")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: UnterminatedComment"))
        .stderr(predicate::str::contains(
            "Lexer error on 'EOF' line: 2 column: 15",
        ));
}

#[test]
fn test_missing_file() {
    Command::cargo_bin("pascal-lex")
        .unwrap()
        .arg("does/not/exist.pas")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
