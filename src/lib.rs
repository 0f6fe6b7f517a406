//! ocp-install: build OpenShift install and cleanup task descriptors for a workflow orchestrator.
//!
//! Configuration from task variables, orchestrator settings, secrets, cloud
//! credentials and release metadata is merged into one JSON file consumed by
//! `cloud.sh`; the returned descriptors tell the orchestrator how to run it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{TaskOptions, build_plan, build_task};
pub use app::config::{AppConfig, load_config};
pub use app::{AppContext, InstallerRequest, OpenshiftInstaller};
pub use domain::{AppError, ClusterTarget, DagPlan, Operation, TaskDescriptor, TriggerRule};
