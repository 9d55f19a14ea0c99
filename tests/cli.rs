use std::process::{Command, Output};

fn rscript(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rscript")).args(args)
                                               .env_remove("RUST_LOG")
                                               .output()
                                               .expect("failed to launch rscript")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

#[test]
fn no_arguments_prints_usage() {
    let output = rscript(&[]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Usage: rscript"), "unexpected usage text: {text}");
}

#[test]
fn missing_file_is_reported_on_stdout() {
    let output = rscript(&["no/such/script.r"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "File no/such/script.r not found.\n");
}

#[test]
fn runs_a_script_file() {
    let output = rscript(&["demos/gcd.r"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "gcd = 21\n");
}

#[test]
fn eval_runs_inline_source() {
    let output = rscript(&["--eval", "x <- 6 * 7; print(x)"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "42\n");
}

#[test]
fn script_errors_go_to_stderr_with_failure_status() {
    let output = rscript(&["-e", "print(1)\nprint(1 / 0)"]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "1\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error on line 2"), "unexpected stderr: {stderr}");
}

#[test]
fn undefined_variable_is_not_fatal() {
    let output = rscript(&["-e", "print(y)"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Error on line 1: Variable 'y' not defined.\n0\n");
}
