use crate::domain::{AppError, ClusterTarget, ConfigMap};
use crate::ports::VariableLoader;

/// Returns the same variables for every target.
#[derive(Clone, Default)]
pub struct StubVariableLoader {
    pub vars: ConfigMap,
}

impl VariableLoader for StubVariableLoader {
    fn build_task_vars(&self, _task: &str, _target: &ClusterTarget) -> Result<ConfigMap, AppError> {
        Ok(self.vars.clone())
    }
}
