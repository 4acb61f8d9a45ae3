//! Shared test infrastructure for integration tests.

use std::path::Path;
use std::process::{Command, Output};

/// Run the fpack binary with the given arguments.
pub fn run_fpack(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fpack"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run fpack")
}

/// Run fpack with the given working directory.
pub fn run_fpack_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fpack"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("run fpack")
}

/// Decode captured stdout as UTF-8.
pub fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

/// Decode captured stderr as UTF-8.
pub fn stderr_text(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}

/// The exact byte sequence a bare invocation must emit.
pub const WALKTHROUGH_OUTPUT: &str = "\
Hello, World!
Number: 0
Even
Number: 1
Odd
Number: 2
Even
Number: 3
Odd
Number: 4
Even
Number: 5
Odd
Number: 6
Even
Number: 7
Odd
Number: 8
Even
Number: 9
Odd
This is true
This will print
";
