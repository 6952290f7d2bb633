use assert_cmd::{assert::Assert, Command};

#[allow(dead_code, reason = "test helpers used ad-hoc across tests")]
pub fn run(args: &[&str]) -> Assert {
    let mut cmd = Command::cargo_bin("joinstring").expect("bin");
    cmd.args(args).assert()
}

#[allow(dead_code, reason = "test helpers used ad-hoc across tests")]
pub fn run_stdout(args: &[&str]) -> String {
    let assert = run(args).success();
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

#[allow(dead_code, reason = "test helpers used ad-hoc across tests")]
pub fn run_with_stdin(input: &str, args: &[&str]) -> Assert {
    let mut cmd = Command::cargo_bin("joinstring").expect("bin");
    cmd.args(args).write_stdin(input).assert()
}

#[allow(dead_code, reason = "test helpers used ad-hoc across tests")]
pub fn run_capture(args: &[&str]) -> (bool, String, String) {
    let assert = run(args);
    let ok = assert.get_output().status.success();
    let out =
        String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let err =
        String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    (ok, out, err)
}
