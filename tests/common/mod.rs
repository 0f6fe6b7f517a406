//! Shared testing utilities for ocp-install integration tests.

use assert_cmd::Command;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated DAG checkout, secret directory and output directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a populated environment whose checkout belongs to `owner`.
    pub fn new(owner: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let ctx = Self { root, work_dir };
        ctx.init_repo(&format!("git@github.com:{owner}/airflow-kubernetes.git"));
        ctx.write_vars();
        ctx.write_default_secrets();
        ctx.write_config();
        ctx
    }

    fn init_repo(&self, origin: &str) {
        let repo = git2::Repository::init(&self.work_dir).expect("Failed to init repository");
        repo.remote("origin", origin).expect("Failed to add origin remote");
    }

    fn write_vars(&self) {
        self.write_json(
            &self.dags_dir().join("tasks/install/defaults.json"),
            &json!({"openshift_worker_count": 3, "openshift_network_type": "OpenShiftSDN"}),
        );
        self.write_json(
            &self.dags_dir().join("releases/4.10/aws/default/install.json"),
            &json!({"openshift_worker_count": 6}),
        );
    }

    fn write_default_secrets(&self) {
        self.write_secret(
            "ansible_orchestrator",
            &json!({"orchestration_host": "jump.example.com", "orchestration_user": "root"}),
        );
        self.write_secret(
            "openshift_install_config",
            &json!({"sshkey_token": "ssh-token", "aws_access_key_id": "from-install-secrets"}),
        );
        self.write_secret("aws_creds", &json!({"aws_access_key_id": "from-aws-creds"}));
        self.write_secret("gcp_creds", &json!({"gcp_project": "perf"}));
        self.write_secret("azure_creds", &json!({"azure_tenant": "tenant"}));
        self.write_secret(
            "elasticsearch_config",
            &json!({"url": "https://es.example.com", "username": "u", "password": "p"}),
        );
    }

    fn write_config(&self) {
        let content = format!(
            "[paths]\nroot_dag_dir = \"{}\"\nsecrets_dir = \"{}\"\noutput_dir = \"{}\"\n\n[identity]\nrepository = \"{}\"\n",
            self.dags_dir().display(),
            self.secrets_dir().display(),
            self.output_dir().display(),
            self.work_dir.display(),
        );
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn write_json(&self, path: &Path, value: &Value) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
    }

    pub fn write_secret(&self, name: &str, value: &Value) {
        self.write_json(&self.secrets_dir().join(format!("{name}.json")), value);
    }

    pub fn remove_secret(&self, name: &str) {
        fs::remove_file(self.secrets_dir().join(format!("{name}.json"))).unwrap();
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn dags_dir(&self) -> PathBuf {
        self.root.path().join("dags")
    }

    pub fn secrets_dir(&self) -> PathBuf {
        self.root.path().join("secrets")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// `ocp-install.toml` in the work directory, picked up without `--config`.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join("ocp-install.toml")
    }

    pub fn task_file(&self, operation: &str) -> PathBuf {
        self.output_dir().join(format!("4.10-aws-default-{operation}-task.json"))
    }

    pub fn read_task_file(&self, operation: &str) -> Value {
        let content = fs::read_to_string(self.task_file(operation)).expect("task file written");
        serde_json::from_str(&content).expect("task file is JSON")
    }

    /// Build a command for invoking the compiled `ocp-install` binary with a scrubbed environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ocp-install").expect("Failed to locate ocp-install binary");
        cmd.current_dir(&self.work_dir).env_clear().env("HOME", self.root.path());
        cmd
    }

    /// `task <operation>` for the 4.10/aws/default target.
    pub fn task_cmd(&self, operation: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args(["task", operation, "--ocp-version", "4.10", "--platform", "aws"]);
        cmd
    }
}
