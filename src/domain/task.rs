//! Task descriptors handed to the orchestrator.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Attempts the orchestrator makes before giving up on a task.
pub const TASK_RETRIES: u32 = 3;

/// When the orchestrator may start a task relative to its upstream tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerRule {
    /// Every upstream task succeeded.
    #[default]
    AllSuccess,
    /// Every upstream task finished, whatever its outcome.
    AllDone,
    AllFailed,
    OneSuccess,
    OneFailed,
}

impl TriggerRule {
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerRule::AllSuccess => "all_success",
            TriggerRule::AllDone => "all_done",
            TriggerRule::AllFailed => "all_failed",
            TriggerRule::OneSuccess => "one_success",
            TriggerRule::OneFailed => "one_failed",
        }
    }
}

impl fmt::Display for TriggerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerRule {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all_success" => Ok(TriggerRule::AllSuccess),
            "all_done" => Ok(TriggerRule::AllDone),
            "all_failed" => Ok(TriggerRule::AllFailed),
            "one_success" => Ok(TriggerRule::OneSuccess),
            "one_failed" => Ok(TriggerRule::OneFailed),
            other => Err(AppError::InvalidArgument {
                field: "trigger rule",
                value: other.to_string(),
                reason: "must be one of all_success, all_done, all_failed, one_success, one_failed"
                    .to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeMount {
    pub name: String,
    pub mount_path: String,
}

/// Pod volume backed by an `emptyDir`, shared between task containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub name: String,
    pub empty_dir: BTreeMap<String, String>,
}

impl Volume {
    pub fn empty_dir<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), empty_dir: BTreeMap::new() }
    }
}

/// Container placement for the task pod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorPlacement {
    pub container_name: String,
    pub image: String,
    pub image_pull_policy: String,
    pub volume_mounts: Vec<VolumeMount>,
    pub volumes: Vec<Volume>,
}

/// One schedulable unit of external work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub task_id: String,
    pub dag_id: String,
    pub bash_command: String,
    pub env: BTreeMap<String, String>,
    pub retries: u32,
    pub depends_on_past: bool,
    pub trigger_rule: TriggerRule,
    pub executor: ExecutorPlacement,
    /// Tasks that run after this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub downstream: Vec<String>,
}
