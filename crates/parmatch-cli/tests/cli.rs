use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn parmatch() -> Command {
    let mut cmd = Command::cargo_bin("parmatch").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_extracts_params() {
    parmatch()
        .args([r"{{a,\d+}}-{{b,\d+}}", "12-34"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a = 12"))
        .stdout(predicate::str::contains("b = 34"));
}

#[test]
fn test_non_matching_input_fails() {
    parmatch()
        .args([r"{{a,\d+}}-{{b,\d+}}", "12-34", "nope"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ nope"))
        .stdout(predicate::str::contains("1/2 matched"));
}

#[test]
fn test_single_param() {
    parmatch()
        .args(["-p", "b", "{{a,(x)(y)}}{{b}}", "xy!"])
        .assert()
        .success()
        .stdout("!\n");
}

#[test]
fn test_check_uses_search() {
    parmatch()
        .args(["--check", "hello", "say hello now"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ say hello now"));
}

#[test]
fn test_extraction_needs_full_match() {
    parmatch()
        .args(["hello", "say hello now"])
        .assert()
        .code(1);
}

#[test]
fn test_json_lines_from_stdin() {
    parmatch()
        .args(["--json", "-s", r"n={{n,\d+}}"])
        .write_stdin("n=1\nn=x\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            r#"{"matched":true,"params":{"n":"1"},"text":"n=1"}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"matched":false,"params":{},"text":"n=x"}"#,
        ));
}

#[test]
fn test_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "alice rolled 3").unwrap();
    writeln!(file, "bob rolled 6").unwrap();

    parmatch()
        .args(["-p", "user", r"{{user,\w+}} rolled {{n,\d}}", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("alice\nbob\n");
}

#[test]
fn test_explain() {
    parmatch()
        .args(["--explain", r"id {{id,(\d)+}} {{rest}}"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r"id ((\d)+) (.*)"))
        .stdout(predicate::str::contains("#1"))
        .stdout(predicate::str::contains("#3"));
}

#[test]
fn test_invalid_template() {
    parmatch()
        .args(["{{a,[z}}", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("placeholder 'a'"));
}
