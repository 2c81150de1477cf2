use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn taskboard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("taskboard").unwrap();
    cmd.env_remove("TASKBOARD_TEMPLATE")
        .env_remove("TASKBOARD_DEBUG_LOG")
        .args(["--data-dir", dir.to_str().unwrap()]);
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn run_ok(dir: &Path, args: &[&str]) -> Value {
    let output = taskboard(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&output);
    assert!(json["success"].as_bool().unwrap());
    json
}

fn ids(json: &Value, column: &str) -> Vec<String> {
    json["data"]["board"][column]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect()
}

mod one_shot {
    use super::*;

    #[test]
    fn test_show_default_board() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["show"]);

        assert_eq!(json["data"]["template"], "kanban");
        assert_eq!(ids(&json, "todo"), ["1", "2"]);
        assert_eq!(json["data"]["can_undo"], false);
        let columns: Vec<&String> = json["data"]["board"].as_object().unwrap().keys().collect();
        assert_eq!(columns, ["todo", "in-progress", "review", "done"]);
    }

    #[test]
    fn test_show_template_option() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["--template", "priority", "show"]);
        assert_eq!(json["data"]["template"], "priority");
        assert!(json["data"]["board"]["critical"].is_array());
    }

    #[test]
    fn test_move_persists_between_runs() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["move", "todo", "in-progress", "0", "0"]);
        assert_eq!(ids(&json, "in-progress"), ["1", "3", "4"]);
        assert!(dir.path().join("kanbanBoard.json").exists());

        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(ids(&json, "todo"), ["2"]);
        assert_eq!(json["data"]["can_undo"], false);
    }

    #[test]
    fn test_add_reports_task_id() {
        let dir = tempdir().unwrap();
        let json = run_ok(
            dir.path(),
            &["add", "review", "Check docs", "--description", "All of them", "--priority", "low"],
        );
        let id = json["data"]["task_id"].as_str().unwrap().to_string();
        let review = json["data"]["board"]["review"].as_array().unwrap();
        assert_eq!(review[1]["id"], id.as_str());
        assert_eq!(review[1]["priority"], "low");
        assert_eq!(review[1]["tags"], Value::Array(vec![]));
    }

    #[test]
    fn test_edit_and_delete() {
        let dir = tempdir().unwrap();
        let json = run_ok(
            dir.path(),
            &["edit", "todo", "2", "--title", "Design v2", "--tag", "ui", "--tag", "design"],
        );
        let task = &json["data"]["board"]["todo"][1];
        assert_eq!(task["title"], "Design v2");
        assert_eq!(task["description"], "Create UI designs");
        assert_eq!(task["tags"], serde_json::json!(["ui", "design"]));

        let json = run_ok(dir.path(), &["delete", "todo", "2"]);
        assert_eq!(ids(&json, "todo"), ["1"]);
    }

    #[test]
    fn test_declined_move_fails() {
        let dir = tempdir().unwrap();
        taskboard(dir.path())
            .args(["move", "todo", "done", "7", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(r#""success":false"#));
        assert!(!dir.path().join("kanbanBoard.json").exists());
    }

    #[test]
    fn test_clear_requires_yes() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["delete", "done", "6"]);

        taskboard(dir.path())
            .args(["clear"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--yes"));

        let json = run_ok(dir.path(), &["clear", "--yes"]);
        assert_eq!(ids(&json, "done"), ["6"]);
    }

    #[test]
    fn test_stored_value_is_bare_board() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("kanbanBoard.json"),
            r#"{"inbox":[{"id":"a","title":"Old","description":"","priority":"urgent","tags":[]}]}"#,
        )
        .unwrap();

        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(json["data"]["board"]["inbox"][0]["priority"], "urgent");

        run_ok(dir.path(), &["move", "inbox", "done", "0", "0"]);
        let stored: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("kanbanBoard.json")).unwrap())
                .unwrap();
        assert!(stored.get("version").is_none());
        assert_eq!(stored["inbox"], serde_json::json!([]));
        assert_eq!(stored["done"][0]["id"], "a");
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("kanbanBoard.json"), "{ nope").unwrap();
        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(ids(&json, "done"), ["6"]);
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        let dir = tempdir().unwrap();
        taskboard(dir.path())
            .args(["--template", "scrum", "show"])
            .assert()
            .failure();
    }

    #[test]
    fn test_completions() {
        let dir = tempdir().unwrap();
        taskboard(dir.path())
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("taskboard"));
    }
}

mod shell {
    use super::*;

    fn lines(output: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(output)
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_session_undo_redo() {
        let dir = tempdir().unwrap();
        let output = taskboard(dir.path())
            .arg("shell")
            .write_stdin("move todo in-progress 0 0\nundo\nredo\nundo\nquit\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let responses = lines(&output);
        assert_eq!(responses.len(), 4);
        assert_eq!(ids(&responses[0], "in-progress"), ["1", "3", "4"]);
        assert_eq!(responses[1]["data"]["can_redo"], true);
        assert_eq!(ids(&responses[1], "todo"), ["1", "2"]);
        assert_eq!(ids(&responses[2], "todo"), ["2"]);
        assert_eq!(responses[3]["data"]["history_index"], 0);

        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(ids(&json, "todo"), ["1", "2"]);
    }

    #[test]
    fn test_reset_is_undoable_in_shell() {
        let dir = tempdir().unwrap();
        let output = taskboard(dir.path())
            .write_stdin("reset
undo
")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let responses = lines(&output);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["data"]["can_undo"], true);
        assert_eq!(responses[0]["data"]["history_len"], 2);
        assert_eq!(responses[1]["data"]["can_redo"], true);
    }

    #[test]
    fn test_default_is_shell() {
        let dir = tempdir().unwrap();
        taskboard(dir.path())
            .write_stdin("undo\nshow\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""template":"kanban""#))
            .stderr(predicate::str::contains("Nothing to undo"));
    }

    #[test]
    fn test_template_switch_is_undoable() {
        let dir = tempdir().unwrap();
        let output = taskboard(dir.path())
            .write_stdin("template timeline\nundo\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let responses = lines(&output);
        assert!(responses[0]["data"]["board"]["this-week"].is_array());
        assert_eq!(responses[0]["data"]["template"], "timeline");
        assert!(responses[1]["data"]["board"]["todo"].is_array());
    }
}
