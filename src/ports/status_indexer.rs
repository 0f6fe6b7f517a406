use crate::domain::{ClusterTarget, Operation};

/// Indexing step that records the outcome of a generated task.
pub trait StatusIndexer {
    /// Id of the indexing task that runs after `operation` for `target`.
    fn index_task_id(&self, target: &ClusterTarget, operation: Operation) -> String;
}
