#![allow(dead_code)]

use assert_cmd::Command;

/// Stdout of every normal run.
pub const GREETING: &str = "Hello, sailor!\nこんにちは! Count is 16.\n";

/// A `sailor` command with `RUST_LOG` cleared, so stderr stays quiet.
pub fn sailor() -> Command {
    let mut command = Command::cargo_bin("sailor").unwrap();
    command.env_remove("RUST_LOG");
    command
}

pub fn test_sailor(
    args: &[&str],
    envs: &[(&str, &str)],
    stdout: &'static str,
    stderr: &'static str,
    code: Option<i32>,
) {
    let mut command = sailor();
    command.args(args);
    command.envs(envs.iter().copied());
    let assert = command.assert();
    let assert = assert.stdout(stdout).stderr(stderr);
    if let Some(code) = code {
        assert.code(code);
    } else {
        assert.success();
    }
}
