use std::fs;

#[path = "../test_support/mod.rs"]
mod util;

#[test]
fn output_flag_writes_the_file_instead_of_stdout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.txt");
    let path_s = path.to_str().expect("utf8 path");
    let out =
        util::run_stdout(&["-o", path_s, "-d", "||", r#"["a","b"]"#]);
    assert!(out.is_empty(), "stdout should be empty, got: {out:?}");
    assert_eq!(fs::read_to_string(&path).expect("read output"), "a||b\n");
}

#[test]
fn output_file_is_truncated_on_each_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.txt");
    fs::write(&path, "previous contents that are much longer").expect("seed");
    let path_s = path.to_str().expect("utf8 path");
    util::run(&["-o", path_s, "x"]).success();
    assert_eq!(fs::read_to_string(&path).expect("read output"), "x\n");
}

#[test]
fn uncreatable_output_path_fails() {
    let (ok, _out, err) =
        util::run_capture(&["-o", "/no/such/dir/out.txt", "x"]);
    assert!(!ok, "uncreatable output path must fail");
    assert!(!err.trim().is_empty());
}
