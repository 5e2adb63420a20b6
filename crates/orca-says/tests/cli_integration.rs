use std::process::{Command, Output};

fn orca_says() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_orca-says"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    orca_says()
        .args(args)
        .output()
        .expect("failed to run orca-says")
}

fn assert_success(out: &Output) {
    assert!(
        out.status.success(),
        "orca-says failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
}

#[test]
fn defaults_are_used_without_arguments() {
    let out = run(&[]);
    assert_success(&out);
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Orca says: hello sea world!\n"
    );
}

#[test]
fn prefix_and_second_message() {
    let out = run(&["--prefix=> ", "first", "second"]);
    assert_success(&out);
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "> first\nSecond orca says: second\n"
    );
}

#[test]
fn prefix_as_following_token() {
    let out = run(&["-p", "Seal says: ", "hi"]);
    assert_success(&out);
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Seal says: hi\n");
}

#[test]
fn help_lists_options() {
    let out = run(&["-h"]);
    assert_success(&out);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.starts_with("Usage:\n\torca-says [-h] [-p[=]prefix] [message] [2nd_message]"),
        "unexpected help output:\n{stdout}"
    );
    assert!(stdout.contains("\t-p, --prefix\n\t\tprefix to a message\n"));
}

#[test]
fn parse_error_exits_with_failure() {
    let out = run(&["--unknown"]);
    assert!(!out.status.success(), "expected failure");
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("clorca error: Option \"--unknown\" isn't a possible option"),
        "missing diagnostic:\n{stderr}"
    );
    assert!(
        stderr.contains("not a possible option (code 3)"),
        "missing status line:\n{stderr}"
    );
}

#[test]
fn trailing_prefix_without_value_fails() {
    let out = run(&["hi", "-p"]);
    assert!(!out.status.success(), "expected failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing value for option (code 1)"), "{stderr}");
}
