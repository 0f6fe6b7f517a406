use crate::domain::{AppError, ClusterTarget, ConfigMap};

/// Loads the default variables for a task kind and cluster target.
pub trait VariableLoader {
    fn build_task_vars(&self, task: &str, target: &ClusterTarget) -> Result<ConfigMap, AppError>;
}
