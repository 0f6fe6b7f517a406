use std::path::PathBuf;

use crate::adapters::{
    FileSecretStore, FilesystemTaskFileStore, FilesystemVariableLoader, GitRemoteIdentity,
    OsEnvironment, StatusIndexTask,
};
use crate::app::config::AppConfig;
use crate::domain::{CiAwareNaming, ClusterNaming, ExecutorPlacement};
use crate::ports::{
    GitIdentity, ProcessEnvironment, SecretStore, StatusIndexer, TaskFileStore, VariableLoader,
};

/// Fixed settings shared by every generated task.
#[derive(Debug, Clone)]
pub struct TaskSettings {
    /// Directory containing `install/cloud.sh`.
    pub scripts_root: PathBuf,
    /// Directory receiving the JSON hand-off files.
    pub output_dir: PathBuf,
    pub placement: ExecutorPlacement,
}

impl TaskSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            scripts_root: config.paths.scripts_root(),
            output_dir: config.paths.output_dir.clone(),
            placement: config.executor.placement(),
        }
    }
}

/// Application context holding the collaborators used to build tasks.
pub struct AppContext {
    variables: Box<dyn VariableLoader>,
    secrets: Box<dyn SecretStore>,
    git: Box<dyn GitIdentity>,
    environment: Box<dyn ProcessEnvironment>,
    files: Box<dyn TaskFileStore>,
    indexer: Box<dyn StatusIndexer>,
    naming: Box<dyn ClusterNaming>,
    settings: TaskSettings,
}

impl AppContext {
    /// Create a context from explicit collaborators.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        variables: Box<dyn VariableLoader>,
        secrets: Box<dyn SecretStore>,
        git: Box<dyn GitIdentity>,
        environment: Box<dyn ProcessEnvironment>,
        files: Box<dyn TaskFileStore>,
        indexer: Box<dyn StatusIndexer>,
        naming: Box<dyn ClusterNaming>,
        settings: TaskSettings,
    ) -> Self {
        Self { variables, secrets, git, environment, files, indexer, naming, settings }
    }

    /// Context backed by the filesystem, git checkout and process environment.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Box::new(FilesystemVariableLoader::new(config.paths.vars_root().to_path_buf())),
            Box::new(FileSecretStore::new(config.paths.secrets_dir.clone())),
            Box::new(GitRemoteIdentity::new(
                config.identity.repository.clone(),
                config.identity.remote.clone(),
            )),
            Box::new(OsEnvironment),
            Box::new(FilesystemTaskFileStore),
            Box::new(StatusIndexTask),
            Box::new(CiAwareNaming::new(config.identity.ci_identity.clone())),
            TaskSettings::from_config(config),
        )
    }

    pub fn variables(&self) -> &dyn VariableLoader {
        self.variables.as_ref()
    }

    pub fn secrets(&self) -> &dyn SecretStore {
        self.secrets.as_ref()
    }

    pub fn git(&self) -> &dyn GitIdentity {
        self.git.as_ref()
    }

    pub fn environment(&self) -> &dyn ProcessEnvironment {
        self.environment.as_ref()
    }

    pub fn files(&self) -> &dyn TaskFileStore {
        self.files.as_ref()
    }

    pub fn indexer(&self) -> &dyn StatusIndexer {
        self.indexer.as_ref()
    }

    pub fn naming(&self) -> &dyn ClusterNaming {
        self.naming.as_ref()
    }

    pub fn settings(&self) -> &TaskSettings {
        &self.settings
    }
}
