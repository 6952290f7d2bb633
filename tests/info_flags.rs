#[path = "../test_support/mod.rs"]
mod util;

#[test]
fn help_prints_usage_and_exits_zero() {
    for flag in ["-h", "--help"] {
        let assert = util::run(&[flag]).success();
        let out = String::from_utf8_lossy(&assert.get_output().stdout);
        assert!(out.contains("Usage"), "help should show usage: {out:?}");
        assert!(out.contains("--delimiter"));
    }
}

#[test]
fn version_prints_the_crate_version() {
    for flag in ["-v", "--version"] {
        let out = util::run_stdout(&[flag]);
        assert!(
            out.contains(env!("CARGO_PKG_VERSION")),
            "version output should carry the crate version: {out:?}"
        );
    }
}

#[test]
fn license_prints_the_license_text() {
    for flag in ["-l", "--license"] {
        let out = util::run_stdout(&[flag]);
        assert!(out.contains("MIT License"), "got: {out:?}");
    }
}

#[test]
fn example_prints_worked_examples() {
    let out = util::run_stdout(&["--example"]);
    assert!(out.contains("one||two||three"), "got: {out:?}");
}
