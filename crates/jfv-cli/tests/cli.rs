//! End-to-end tests: run the `jfv` binary against saved Jira responses.
//!
//! Every test gets its own tempdir holding the field and project listings
//! and points `--config` at a file that does not exist, so the user's
//! environment never leaks in.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const FIELDS: &str = r#"[
    {"id": "field1", "key": "field1", "name": "Summary",
     "schema": {"type": "string"}, "scope": {"type": "PROJECT", "project": {"id": "10001"}}},
    {"id": "field2", "key": "field2", "name": "Description", "schema": {"type": "string"}},
    {"id": "field3", "key": "field3", "name": "Summary",
     "scope": {"type": "PROJECT", "project": {"id": "10002"}}},
    {"id": "field4", "key": "field4", "name": "Priority", "schema": {"type": "priority"}}
]"#;

const PROJECTS: &str = r#"[
    {"id": "10001", "name": "Project A"},
    {"id": "10002", "name": "Project C"}
]"#;

fn jfv_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_jfv"))
}

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("fields.json"), FIELDS).expect("write fields");
        std::fs::write(dir.path().join("projects.json"), PROJECTS).expect("write projects");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn command(&self) -> Command {
        self.command_with_config(&self.path("missing.toml"))
    }

    fn command_with_config(&self, config: &Path) -> Command {
        let mut command = Command::new(jfv_bin());
        command
            .env_remove("JIRA_SITE_URL")
            .env_remove("JIRA_EMAIL")
            .arg("--config")
            .arg(config);
        command
    }

    fn offline(&self, args: &[&str]) -> Output {
        self.command()
            .arg("--fields-json")
            .arg(self.path("fields.json"))
            .arg("--projects-json")
            .arg(self.path("projects.json"))
            .args(args)
            .output()
            .expect("run jfv")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", stdout(output)))
}

#[test]
fn fields_prints_both_tabs() {
    let fixture = Fixture::new();
    let output = fixture.offline(&["fields"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("List of Jira Fields in this Jira instance"));
    assert!(out.contains("List of Duplicate Jira Fields in this Jira instance"));
    assert!(out.contains("Company Managed Fields"));
    assert!(out.contains("Project A"));
    assert!(out.contains("N/A"));

    let description = out.find("Description").expect("Description row");
    let priority = out.find("Priority").expect("Priority row");
    assert!(description < priority);
}

#[test]
fn fields_filter_and_tab() {
    let fixture = Fixture::new();
    let output = fixture.offline(&["fields", "--filter", "PRIOR", "--tab", "all"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Priority"));
    assert!(!out.contains("Summary"));
    assert!(!out.contains("Duplicate"));
}

#[test]
fn fields_json_duplicates() {
    let fixture = Fixture::new();
    let output = fixture.offline(&["fields", "--tab", "duplicates", "--json"]);

    assert!(output.status.success());
    let rows = json(&output);
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["rowNumber"], 1);
    assert_eq!(rows[0]["name"], "Summary");
    assert_eq!(rows[0]["projectName"], "Project A");
    assert_eq!(rows[1]["rowNumber"], 2);
    assert_eq!(rows[1]["type"], "N/A");
}

#[test]
fn invoke_get_all_fields() {
    let fixture = Fixture::new();
    let output = fixture.offline(&["invoke", "getAllFields"]);

    assert!(output.status.success());
    let fields = json(&output);
    assert_eq!(fields.as_array().map(Vec::len), Some(4));
    assert_eq!(fields[0]["projectName"], "Project A");
    assert_eq!(fields[1]["projectName"], serde_json::Value::Null);
    assert_eq!(fields[2]["projectName"], "Project C");
}

#[test]
fn invoke_unknown_function_fails() {
    let fixture = Fixture::new();
    let output = fixture.offline(&["invoke", "getAllProjects"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json(&output)["error"], "unknown_function");
}

#[test]
fn missing_site_is_reported() {
    let fixture = Fixture::new();
    let output = fixture.command().arg("fields").output().expect("run jfv");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("jira.site_url"));
}

#[test]
fn unreadable_saved_response_is_reported() {
    let fixture = Fixture::new();
    std::fs::write(fixture.path("fields.json"), "not json").expect("overwrite fields");
    let output = fixture.offline(&["fields"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("jira parse error"));
}

#[test]
fn malformed_saved_response_is_json_error_with_json_flag() {
    let fixture = Fixture::new();
    std::fs::write(fixture.path("fields.json"), "not json").expect("overwrite fields");
    let output = fixture.offline(&["fields", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let error = json(&output);
    assert_eq!(error["error"], "fetch_failed");
    assert!(
        error["message"]
            .as_str()
            .is_some_and(|message| message.contains("jira parse error"))
    );
}

#[test]
fn invoke_reports_malformed_saved_response_as_json() {
    let fixture = Fixture::new();
    std::fs::write(fixture.path("projects.json"), "{}").expect("overwrite projects");
    let output = fixture.offline(&["invoke", "getAllFields"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json(&output)["error"], "invoke_failed");
}

#[test]
fn missing_site_is_json_error_with_json_flag() {
    let fixture = Fixture::new();
    let output = fixture
        .command()
        .args(["fields", "--json"])
        .output()
        .expect("run jfv");

    assert_eq!(output.status.code(), Some(1));
    let error = json(&output);
    assert_eq!(error["error"], "setup_failed");
    assert!(
        error["message"]
            .as_str()
            .is_some_and(|message| message.contains("jira.site_url"))
    );
}

#[test]
fn invalid_config_is_rejected() {
    let fixture = Fixture::new();
    let config = fixture.path("jfv.toml");
    std::fs::write(&config, "[jira]\nsite_url = \"ftp://example.com\"\n").expect("write config");

    let output = fixture
        .command_with_config(&config)
        .arg("fields")
        .output()
        .expect("run jfv");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("http://"));
}
