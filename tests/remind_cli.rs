use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn tdl(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tdl").expect("binary");
    cmd.arg("--dir").arg(dir.path());
    cmd
}

fn fired_count(dir: &TempDir) -> u64 {
    let assert = tdl(dir).args(["--json", "remind"]).assert().success();
    let output: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    output["data"]["fired"].as_u64().expect("fired count")
}

#[test]
fn remind_fires_each_due_task_once() {
    let dir = TempDir::new().unwrap();
    tdl(&dir)
        .args(["add", "overdue", "--remind", "2020-01-01T00:00:00Z"])
        .assert()
        .success();

    assert_eq!(fired_count(&dir), 1);
    // Already notified, a second scan is quiet.
    assert_eq!(fired_count(&dir), 0);
}

#[test]
fn remind_skips_future_deadlines() {
    let dir = TempDir::new().unwrap();
    tdl(&dir)
        .args(["add", "later", "--remind", "2099-01-01T00:00:00Z"])
        .assert()
        .success();
    tdl(&dir).args(["add", "no deadline"]).assert().success();

    assert_eq!(fired_count(&dir), 0);
}

#[test]
fn editing_rearms_a_fired_reminder() {
    let dir = TempDir::new().unwrap();
    let assert = tdl(&dir)
        .args(["--json", "add", "overdue", "--remind", "2020-01-01T00:00:00Z"])
        .assert()
        .success();
    let output: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let id = output["data"]["task"]["id"].as_str().unwrap().to_string();

    assert_eq!(fired_count(&dir), 1);

    tdl(&dir)
        .args(["edit", &id, "still overdue"])
        .assert()
        .success();

    assert_eq!(fired_count(&dir), 1);
}

#[test]
fn invalid_remind_timestamp_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    tdl(&dir)
        .args(["add", "task", "--remind", "tomorrowish"])
        .assert()
        .failure()
        .code(2);
}
