//! Black-box tests driving the `sbml` binary end to end: write a source
//! file, run the binary against it, assert on stdout and the exit code.
//! Mirrors the host compiler driver's own `tests/e2e/cli_tests.rs` style.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sbml_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sbml"))
}

fn write_source(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("program.sbml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn scenario_1_operator_precedence() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "{ print(1 + 2 * 3); }");

    sbml_bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("7\n"));
}

#[test]
fn scenario_2_indexed_assignment() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "{ a = [1,2,3]; a[1] = 20; print(a); }");

    sbml_bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("[1, 20, 3]\n"));
}

#[test]
fn scenario_3_tuple_index() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "{ print(#2 (10, 20, 30)); }");

    sbml_bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("20\n"));
}

#[test]
fn scenario_4_cons() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "{ print(1 :: [2,3]); }");

    sbml_bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("[1, 2, 3]\n"));
}

#[test]
fn scenario_5_while_loop() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "{ i = 0; while (i < 3) { print(i); i = i + 1; } }",
    );

    sbml_bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("0\n1\n2\n"));
}

#[test]
fn scenario_6_type_mismatch_is_semantic_error() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, r#"{ print(1 + "a"); }"#);

    sbml_bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("SEMANTIC ERROR\n"));
}

#[test]
fn scenario_7_division_by_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "{ print(3 / 0); }");

    sbml_bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("SEMANTIC ERROR\n"));
}

#[test]
fn scenario_8_unbound_variable() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "{ print(x); }");

    sbml_bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("SEMANTIC ERROR\n"));
}

#[test]
fn scenario_9_syntax_error() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "{ print(1 + ); }");

    sbml_bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("SYNTAX ERROR\n"));
}

#[test]
fn no_arguments_prints_usage_and_exits_nonzero() {
    sbml_bin()
        .assert()
        .failure()
        .stdout(predicate::str::contains("usage"));
}

#[test]
fn too_many_arguments_prints_usage_and_exits_nonzero() {
    sbml_bin()
        .arg("a.sbml")
        .arg("b.sbml")
        .assert()
        .failure()
        .stdout(predicate::str::contains("usage"));
}

#[test]
fn missing_file_is_a_host_level_error_not_a_language_error() {
    sbml_bin()
        .arg("/no/such/file.sbml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
