//! API Facade for the application.
//!
//! Glues configuration loading, context creation and task building together.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::config::load_config;
use crate::app::context::AppContext;
use crate::app::installer::{InstallerRequest, OpenshiftInstaller};
use crate::domain::{
    AppError, ClusterTarget, ConfigMap, DagPlan, Operation, TaskDescriptor, TriggerRule,
    into_config_map,
};

/// What to build tasks for, as given on the command line.
#[derive(Debug, Clone)]
pub struct TaskOptions {
    /// Configuration file; falls back to `$OCP_INSTALL_CONFIG` and `./ocp-install.toml`.
    pub config: Option<PathBuf>,
    /// DAG id; defaults to `{version}-{platform}-{profile}`.
    pub dag_id: Option<String>,
    pub version: String,
    pub release_stream: String,
    pub platform: String,
    pub profile: String,
    /// JSON file with latest-release metadata.
    pub latest_release: Option<PathBuf>,
}

fn read_latest_release(path: Option<&Path>) -> Result<ConfigMap, AppError> {
    let Some(path) = path else {
        return Ok(ConfigMap::new());
    };
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    into_config_map(value).ok_or_else(|| AppError::InvalidDocument {
        path: path.display().to_string(),
        reason: "latest release metadata must be a JSON object".to_string(),
    })
}

fn with_installer<T>(
    options: &TaskOptions,
    build: impl FnOnce(&OpenshiftInstaller<'_>) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let config = load_config(options.config.as_deref())?;
    let target = ClusterTarget::new(
        &options.version,
        &options.release_stream,
        &options.platform,
        &options.profile,
    )?;
    let request = InstallerRequest {
        dag_id: options.dag_id.clone().unwrap_or_else(|| target.slug()),
        latest_release: read_latest_release(options.latest_release.as_deref())?,
        target,
    };

    let ctx = AppContext::from_config(&config);
    let installer = OpenshiftInstaller::new(&ctx, request)?;
    build(&installer)
}

/// Build the task for `operation` and write its configuration file.
///
/// `trigger_rule` applies to cleanup only (default `all_success`); install always
/// waits on upstream success and rejects an explicit rule.
pub fn build_task(
    options: &TaskOptions,
    operation: Operation,
    trigger_rule: Option<TriggerRule>,
) -> Result<TaskDescriptor, AppError> {
    if operation == Operation::Install
        && let Some(rule) = trigger_rule
    {
        return Err(AppError::InvalidArgument {
            field: "trigger rule",
            value: rule.to_string(),
            reason: "only cleanup tasks accept a trigger rule".to_string(),
        });
    }

    with_installer(options, |installer| match operation {
        Operation::Install => installer.install_task(),
        Operation::Cleanup => installer.cleanup_task(trigger_rule.unwrap_or_default()),
    })
}

/// Build install and cleanup tasks for one target.
pub fn build_plan(options: &TaskOptions) -> Result<DagPlan, AppError> {
    with_installer(options, |installer| installer.plan())
}
