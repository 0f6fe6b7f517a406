//! Environment passed to the install script.

use std::collections::BTreeMap;

use crate::domain::{AppError, ClusterPaths, ClusterTarget, ConfigMap, require_scalar};

/// Substring selecting orchestrator variables that are forwarded to the task.
pub const KUBERNETES_ENV_MARKER: &str = "KUBERNETES";

/// Process variables whose name contains `KUBERNETES`.
///
/// These carry the in-cluster connection details of the hosting Kubernetes
/// cluster, which the task needs to reach it.
pub fn kube_env<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter().filter(|(key, _)| key.contains(KUBERNETES_ENV_MARKER)).collect()
}

/// Environment for the install script: fixed entries plus forwarded Kubernetes variables.
pub fn build_task_env<I>(
    config: &ConfigMap,
    target: &ClusterTarget,
    paths: &ClusterPaths,
    process_vars: I,
) -> Result<BTreeMap<String, String>, AppError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut env = BTreeMap::new();
    env.insert("SSHKEY_TOKEN".to_string(), require_scalar(config, "sshkey_token")?);
    env.insert("ORCHESTRATION_HOST".to_string(), require_scalar(config, "orchestration_host")?);
    env.insert("ORCHESTRATION_USER".to_string(), require_scalar(config, "orchestration_user")?);
    env.insert("OPENSHIFT_CLUSTER_NAME".to_string(), paths.cluster_name.clone());
    env.insert("DEPLOY_PATH".to_string(), paths.deploy_path.clone());
    env.insert("KUBECONFIG_NAME".to_string(), target.kubeconfig_name());
    env.insert("KUBEADMIN_NAME".to_string(), target.kubeadmin_name());
    env.extend(kube_env(process_vars));
    Ok(env)
}
