pub mod cluster;
pub mod config_map;
pub mod elastic;
pub mod error;
pub mod operation;
pub mod plan;
pub mod task;
pub mod task_env;

pub use cluster::{
    CiAwareNaming, ClusterNaming, ClusterPaths, ClusterTarget, DEFAULT_CI_IDENTITY,
};
pub use config_map::{
    ConfigMap, ConfigSource, into_config_map, merge_sources, provenance, require_scalar, to_task_json,
};
pub use elastic::elastic_url;
pub use error::AppError;
pub use operation::{Operation, OperationFlags};
pub use plan::DagPlan;
pub use task::{ExecutorPlacement, TASK_RETRIES, TaskDescriptor, TriggerRule, Volume, VolumeMount};
pub use task_env::{KUBERNETES_ENV_MARKER, build_task_env, kube_env};
