use crate::domain::{ClusterTarget, Operation};
use crate::ports::StatusIndexer;

/// Indexing task named `index_{operation}`, one per DAG.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusIndexTask;

impl StatusIndexer for StatusIndexTask {
    fn index_task_id(&self, _target: &ClusterTarget, operation: Operation) -> String {
        format!("index_{operation}")
    }
}
