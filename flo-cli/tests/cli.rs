use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn flo_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("flo"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// flo tee
// ---------------------------------------------------------------------------

#[test]
fn tee_copies_stdin_verbatim_and_logs_plain_text() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("flo.yaml"), "log: logs/run.log\n").unwrap();

    let input = "\x1b[32mok\x1b[0m build\nplain line\n";
    let output = flo_cmd(dir.path())
        .arg("tee")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(contains("bytes logged to"))
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(output).unwrap(), input);
    let log = fs::read_to_string(dir.path().join("logs/run.log")).unwrap();
    assert_eq!(log, "ok build\nplain line\n");
}

#[test]
fn tee_truncates_previous_run_log() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("flo.yaml"), "log: run.log\n").unwrap();
    fs::write(dir.path().join("run.log"), "old run\n").unwrap();

    flo_cmd(dir.path())
        .arg("tee")
        .write_stdin("new run\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("run.log")).unwrap(), "new run\n");
}

#[test]
fn tee_subgraph_uses_parent_log() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("flo.yaml"),
        "log: run.log\ntasks:\n  - name: build\n  - name: test\n",
    )
    .unwrap();

    flo_cmd(dir.path())
        .args(["tee", "--only", "test"])
        .write_stdin("subgraph output\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("run.log")).unwrap(),
        "subgraph output\n"
    );
}

#[test]
fn tee_rejects_unknown_task() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("flo.yaml"), "tasks:\n  - name: build\n").unwrap();

    flo_cmd(dir.path())
        .args(["tee", "--only", "deploy"])
        .write_stdin("x\n")
        .assert()
        .failure()
        .stderr(contains("unknown task 'deploy'"));
    assert!(!dir.path().join(".flo").exists());
}

#[test]
fn tee_without_config_fails() {
    let dir = TempDir::new().unwrap();
    flo_cmd(dir.path())
        .arg("tee")
        .write_stdin("x\n")
        .assert()
        .failure()
        .stderr(contains("run configuration not found"));
}

// ---------------------------------------------------------------------------
// flo init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_config_that_tee_can_use() {
    let dir = TempDir::new().unwrap();
    flo_cmd(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("flo.yaml"));

    let written = fs::read_to_string(dir.path().join("flo.yaml")).unwrap();
    assert!(written.contains("log: \".flo/flo.log\""), "got:\n{written}");
    assert!(written.ends_with("tasks: []\n"), "got:\n{written}");

    flo_cmd(dir.path())
        .arg("tee")
        .write_stdin("hello\n")
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join(".flo/flo.log")).unwrap(),
        "hello\n"
    );
}

#[test]
fn init_quotes_log_path_with_yaml_syntax() {
    let dir = TempDir::new().unwrap();
    flo_cmd(dir.path())
        .args(["init", "--log", "logs/a: b.log"])
        .assert()
        .success();

    flo_cmd(dir.path())
        .arg("tee")
        .write_stdin("quoted\n")
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("logs/a: b.log")).unwrap(),
        "quoted\n"
    );
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("flo.yaml"), "log: keep.log\n").unwrap();

    flo_cmd(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("--force"));
    assert_eq!(
        fs::read_to_string(dir.path().join("flo.yaml")).unwrap(),
        "log: keep.log\n"
    );

    flo_cmd(dir.path())
        .args(["init", "--force", "--log", "custom.log"])
        .assert()
        .success();
    let written = fs::read_to_string(dir.path().join("flo.yaml")).unwrap();
    assert!(written.contains("log: \"custom.log\""), "got:\n{written}");
}

// ---------------------------------------------------------------------------
// flo render
// ---------------------------------------------------------------------------

#[test]
fn render_inline_string() {
    let dir = TempDir::new().unwrap();
    flo_cmd(dir.path())
        .args(["render", "--string", "{{x}}", "--var", "x=42"])
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn render_reports_syntax_error() {
    let dir = TempDir::new().unwrap();
    flo_cmd(dir.path())
        .args(["render", "--string", "{{"])
        .assert()
        .failure()
        .stderr(contains("syntax error in template `<string>`"));
}

#[test]
fn render_file_with_include() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("tpl")).unwrap();
    fs::write(dir.path().join("tpl/footer.j2"), "-- {{ who }}").unwrap();
    fs::write(
        dir.path().join("tpl/note.j2"),
        "note for {{ who }}{{ missing }}\n{% include 'footer.j2' %}",
    )
    .unwrap();

    flo_cmd(dir.path())
        .args(["render", "tpl/note.j2", "--var", "who=ops"])
        .assert()
        .success()
        .stdout("note for ops\n-- ops\n");
}

#[test]
fn render_missing_builtin_fails() {
    let dir = TempDir::new().unwrap();
    flo_cmd(dir.path())
        .args(["render", "--builtin", "nope.j2"])
        .assert()
        .failure()
        .stderr(contains("template `nope.j2` not found").and(contains("templates")));
}

#[test]
fn render_requires_a_source() {
    let dir = TempDir::new().unwrap();
    flo_cmd(dir.path()).arg("render").assert().failure();
}
