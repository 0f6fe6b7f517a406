use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, ClusterTarget, ConfigMap, ConfigSource, into_config_map, merge_sources};
use crate::ports::VariableLoader;

/// Loads task variables from JSON files under a variables root.
///
/// Layout:
/// - `tasks/{task}/defaults.json` (optional)
/// - `releases/{version}/{platform}/{profile}/{task}.json` (required)
#[derive(Debug, Clone)]
pub struct FilesystemVariableLoader {
    root: PathBuf,
}

impl FilesystemVariableLoader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn defaults_path(&self, task: &str) -> PathBuf {
        self.root.join("tasks").join(task).join("defaults.json")
    }

    fn profile_path(&self, task: &str, target: &ClusterTarget) -> PathBuf {
        self.root
            .join("releases")
            .join(target.version())
            .join(target.platform())
            .join(target.profile())
            .join(format!("{task}.json"))
    }
}

fn read_vars(path: &Path) -> Result<ConfigMap, AppError> {
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    into_config_map(value).ok_or_else(|| AppError::InvalidDocument {
        path: path.display().to_string(),
        reason: "variable file must contain a JSON object".to_string(),
    })
}

impl VariableLoader for FilesystemVariableLoader {
    fn build_task_vars(&self, task: &str, target: &ClusterTarget) -> Result<ConfigMap, AppError> {
        let mut sources = Vec::new();

        let defaults = self.defaults_path(task);
        if defaults.is_file() {
            sources.push(ConfigSource::new("task defaults", read_vars(&defaults)?));
        }

        let profile = self.profile_path(task, target);
        if !profile.is_file() {
            return Err(AppError::VariablesNotFound(profile.display().to_string()));
        }
        sources.push(ConfigSource::new("profile", read_vars(&profile)?));

        debug!(task, profile = %profile.display(), layers = sources.len(), "loaded task variables");
        Ok(merge_sources(&sources))
    }
}
