use std::path::PathBuf;

use serde_json::json;

use crate::adapters::StatusIndexTask;
use crate::app::config::ExecutorConfig;
use crate::app::context::{AppContext, TaskSettings};
use crate::domain::{CiAwareNaming, ClusterNaming, into_config_map};
use crate::testing::{FakeEnvironment, FakeGit, MemorySecretStore, MemoryTaskFiles, StubVariableLoader};

/// Fully populated fakes for building tasks without touching the host.
pub struct TestHarness {
    pub variables: StubVariableLoader,
    pub secrets: MemorySecretStore,
    pub git: FakeGit,
    pub environment: FakeEnvironment,
    pub files: MemoryTaskFiles,
}

impl TestHarness {
    pub fn new(git_user: &str) -> Self {
        let variables = StubVariableLoader {
            vars: into_config_map(json!({
                "openshift_worker_count": 3,
                "openshift_client_location": "https://mirror.example.com/default-client.tar.gz",
                "openshift_base_domain": "perf.example.com",
                "orchestration_host": "defaults.example.com"
            }))
            .unwrap(),
        };

        let secrets = MemorySecretStore::default();
        secrets.insert(
            "ansible_orchestrator",
            json!({"orchestration_host": "jump.example.com", "orchestration_user": "root"}),
        );
        secrets.insert(
            "openshift_install_config",
            json!({
                "sshkey_token": "ssh-token",
                "openshift_worker_count": 6,
                "aws_access_key_id": "from-install-secrets",
                "openshift_install_pull_secret": "pull"
            }),
        );
        secrets.insert(
            "aws_creds",
            json!({
                "aws_access_key_id": "from-aws-creds",
                "aws_region": "us-west-2",
                "cloud_credentials_owner": "aws"
            }),
        );
        secrets.insert(
            "gcp_creds",
            json!({"gcp_project": "perf", "cloud_credentials_owner": "gcp", "cloud_tenant": "gcp"}),
        );
        secrets.insert(
            "azure_creds",
            json!({"azure_tenant": "tenant", "cloud_tenant": "azure", "openshift_install": "from-azure"}),
        );
        secrets.insert("elasticsearch_config", json!({"url": "https://es.example.com"}));

        Self {
            variables,
            secrets,
            git: FakeGit::new(git_user),
            environment: FakeEnvironment::default(),
            files: MemoryTaskFiles::default(),
        }
    }

    pub fn context(&self) -> AppContext {
        self.context_with_naming(Box::new(CiAwareNaming::default()))
    }

    pub fn context_with_naming(&self, naming: Box<dyn ClusterNaming>) -> AppContext {
        AppContext::new(
            Box::new(self.variables.clone()),
            Box::new(self.secrets.clone()),
            Box::new(self.git.clone()),
            Box::new(self.environment.clone()),
            Box::new(self.files.clone()),
            Box::new(StatusIndexTask),
            naming,
            TaskSettings {
                scripts_root: PathBuf::from("/dags/scripts"),
                output_dir: PathBuf::from("/out"),
                placement: ExecutorConfig::default().placement(),
            },
        )
    }
}
