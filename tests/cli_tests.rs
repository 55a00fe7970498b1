use std::io::Write;
use std::process::Command;

fn simgroup() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_simgroup"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn input_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    for l in lines {
        writeln!(f, "{l}").expect("write line");
    }
    f
}

#[test]
fn groups_file_lines_as_json() {
    let f = input_file(&["timeout after 30s", "timeout after 31s", "disk full"]);
    let out = simgroup()
        .args(["--tolerance", "2"])
        .arg(f.path())
        .output()
        .expect("failed to run simgroup");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(v["total_items"], 3);
    assert_eq!(v["total_groups"], 2);
    assert_eq!(v["groups"][0]["representative"], "disk full");
    assert_eq!(v["groups"][1]["count"], 2);
}

#[test]
fn config_file_and_flags_combine() {
    let f = input_file(&["job 1 done", "job 22 done", "job 333 done"]);
    let cfg = input_file(&[r#"{"unit":"absolute","tolerance":0}"#]);
    let out = simgroup()
        .arg("--config")
        .arg(cfg.path())
        .arg("--strip-digits")
        .arg(f.path())
        .output()
        .expect("failed to run simgroup");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(v["total_groups"], 1);
    assert_eq!(v["groups"][0]["representative"], "job  done");
}

#[test]
fn table_format_lists_groups() {
    let f = input_file(&["alpha", "alpha", "omega"]);
    let out = simgroup()
        .args(["--format", "table", "--min-count", "2"])
        .arg(f.path())
        .output()
        .expect("failed to run simgroup");
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.starts_with("Count"));
    assert!(text.contains("alpha"));
    assert!(!text.contains("omega"));
}

#[test]
fn negative_tolerance_is_rejected() {
    let f = input_file(&["a"]);
    let out = simgroup()
        .arg("--tolerance=-1")
        .arg(f.path())
        .output()
        .expect("failed to run simgroup");
    assert!(!out.status.success());
}
