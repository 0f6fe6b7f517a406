use serde::Serialize;

use crate::domain::{ClusterTarget, TaskDescriptor};

/// Tasks generated for one cluster target, in dependency order.
#[derive(Debug, Clone, Serialize)]
pub struct DagPlan {
    pub dag_id: String,
    pub target: ClusterTarget,
    pub tasks: Vec<TaskDescriptor>,
}

impl DagPlan {
    pub fn task(&self, task_id: &str) -> Option<&TaskDescriptor> {
        self.tasks.iter().find(|t| t.task_id == task_id)
    }
}
