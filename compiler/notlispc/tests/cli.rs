//! End-to-end tests against the built `notlisp` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn notlisp(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_notlisp"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn notlisp");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for notlisp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn repl_over_piped_stdin() {
    let output = notlisp(&["repl"], "(+ 1 2 3)\nhead {}\n");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "not-lisp > 6\nnot-lisp > Error: Function 'head' passed {}!\nnot-lisp > \n"
    );
}

#[test]
fn default_command_is_repl() {
    let output = notlisp(&[], "eval {* 6 7}\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("not-lisp > 42\n"));
}

#[test]
fn parse_from_stdin() {
    let output = notlisp(&["parse", "-"], "(x)");
    assert!(output.status.success());
    assert!(stdout(&output).contains("expr|symbol|regex:1:2 'x'"));
}

#[test]
fn parse_error_exits_nonzero() {
    let output = notlisp(&["parse", "-"], "(x");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unclosed '('"), "{stderr}");
}

#[test]
fn unknown_command_fails() {
    let output = notlisp(&["frobnicate"], "");
    assert!(!output.status.success());
}

#[test]
fn version() {
    let output = notlisp(&["--version"], "");
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("not-lisp "));
}
