//! Builds install and cleanup tasks for one OpenShift cluster target.

use serde_json::Value;
use tracing::{debug, info};

use crate::app::context::AppContext;
use crate::domain::{
    AppError, ClusterPaths, ClusterTarget, ConfigMap, ConfigSource, DagPlan, Operation,
    TASK_RETRIES, TaskDescriptor, TriggerRule, build_task_env, elastic_url, merge_sources,
    provenance, to_task_json,
};

/// Variable-loader task kind shared by install and cleanup.
const VARS_TASK: &str = "install";

/// Secret bundle names.
pub const ORCHESTRATOR_BUNDLE: &str = "ansible_orchestrator";
pub const INSTALL_SECRETS_BUNDLE: &str = "openshift_install_config";
pub const AWS_CREDS_BUNDLE: &str = "aws_creds";
pub const GCP_CREDS_BUNDLE: &str = "gcp_creds";
pub const AZURE_CREDS_BUNDLE: &str = "azure_creds";
pub const ELASTICSEARCH_BUNDLE: &str = "elasticsearch_config";

/// Inputs identifying what the caller wants tasks for.
#[derive(Debug, Clone)]
pub struct InstallerRequest {
    pub dag_id: String,
    pub target: ClusterTarget,
    /// Metadata about the newest build on the release stream.
    pub latest_release: ConfigMap,
}

/// Task builder holding every configuration source for one target.
pub struct OpenshiftInstaller<'a> {
    ctx: &'a AppContext,
    dag_id: String,
    target: ClusterTarget,
    latest_release: ConfigMap,
    vars: ConfigMap,
    ansible_orchestrator: ConfigMap,
    install_secrets: ConfigMap,
    aws_creds: ConfigMap,
    gcp_creds: ConfigMap,
    azure_creds: ConfigMap,
    es_server: String,
}

impl<'a> OpenshiftInstaller<'a> {
    /// Load task variables and secret bundles. Any absent bundle is fatal.
    pub fn new(ctx: &'a AppContext, request: InstallerRequest) -> Result<Self, AppError> {
        let InstallerRequest { dag_id, target, latest_release } = request;
        let vars = ctx.variables().build_task_vars(VARS_TASK, &target)?;

        let secrets = ctx.secrets();
        let ansible_orchestrator = secrets.get_json(ORCHESTRATOR_BUNDLE)?;
        let install_secrets = secrets.get_json(INSTALL_SECRETS_BUNDLE)?;
        let aws_creds = secrets.get_json(AWS_CREDS_BUNDLE)?;
        let gcp_creds = secrets.get_json(GCP_CREDS_BUNDLE)?;
        let azure_creds = secrets.get_json(AZURE_CREDS_BUNDLE)?;
        let es_server = elastic_url(&secrets.get_json(ELASTICSEARCH_BUNDLE)?)?;

        Ok(Self {
            ctx,
            dag_id,
            target,
            latest_release,
            vars,
            ansible_orchestrator,
            install_secrets,
            aws_creds,
            gcp_creds,
            azure_creds,
            es_server,
        })
    }

    pub fn target(&self) -> &ClusterTarget {
        &self.target
    }

    /// Install task, followed by the status indexer.
    pub fn install_task(&self) -> Result<TaskDescriptor, AppError> {
        let mut task = self.build_task(Operation::Install, TriggerRule::AllSuccess)?;
        task.downstream.push(self.ctx.indexer().index_task_id(&self.target, Operation::Install));
        Ok(task)
    }

    /// Cleanup task. Callers wiring it at the end of a DAG pass `AllDone`.
    pub fn cleanup_task(&self, trigger_rule: TriggerRule) -> Result<TaskDescriptor, AppError> {
        self.build_task(Operation::Cleanup, trigger_rule)
    }

    /// Install and cleanup tasks for the whole DAG; cleanup runs whatever happened before it.
    pub fn plan(&self) -> Result<DagPlan, AppError> {
        let install = self.install_task()?;
        let cleanup = self.cleanup_task(TriggerRule::AllDone)?;
        Ok(DagPlan {
            dag_id: self.dag_id.clone(),
            target: self.target.clone(),
            tasks: vec![install, cleanup],
        })
    }

    /// Configuration layers in precedence order, lowest first.
    pub fn sources(&self, operation: Operation) -> Vec<ConfigSource> {
        vec![
            ConfigSource::new("task defaults", self.vars.clone()),
            ConfigSource::new(ORCHESTRATOR_BUNDLE, self.ansible_orchestrator.clone()),
            ConfigSource::new(INSTALL_SECRETS_BUNDLE, self.install_secrets.clone()),
            ConfigSource::new(AWS_CREDS_BUNDLE, self.aws_creds.clone()),
            ConfigSource::new(GCP_CREDS_BUNDLE, self.gcp_creds.clone()),
            ConfigSource::new(AZURE_CREDS_BUNDLE, self.azure_creds.clone()),
            ConfigSource::new("operation flags", operation.flags().to_config()),
            ConfigSource::new("latest release", self.latest_release.clone()),
            ConfigSource::single("elasticsearch", "es_server", Value::String(self.es_server.clone())),
        ]
    }

    /// Merged configuration for `operation`, including the derived cluster keys.
    pub fn task_config(&self, operation: Operation) -> Result<(ConfigMap, ClusterPaths), AppError> {
        let sources = self.sources(operation);
        let mut config = merge_sources(&sources);
        for key in ["sshkey_token", "orchestration_host", "orchestration_user"] {
            debug!(key, source = provenance(&sources, key).unwrap_or("<missing>"), "resolved key");
        }

        let identity = self.ctx.git().git_user()?;
        let paths = ClusterPaths::for_cluster(self.ctx.naming().cluster_name(&identity, &self.target));
        debug!(%identity, cluster = %paths.cluster_name, "named cluster");

        config.insert("openshift_cluster_name".to_string(), Value::String(paths.cluster_name.clone()));
        config.insert("dynamic_deploy_path".to_string(), Value::String(paths.deploy_path.clone()));
        config.insert("kubeconfig_path".to_string(), Value::String(paths.kubeconfig_path.clone()));
        Ok((config, paths))
    }

    fn build_task(
        &self,
        operation: Operation,
        trigger_rule: TriggerRule,
    ) -> Result<TaskDescriptor, AppError> {
        let (config, paths) = self.task_config(operation)?;
        let env = build_task_env(&config, &self.target, &paths, self.ctx.environment().vars())?;

        let settings = self.ctx.settings();
        let json_path = self.target.task_file(&settings.output_dir, operation);
        self.ctx.files().write_task_file(&json_path, &to_task_json(&config)?)?;
        info!(path = %json_path.display(), %operation, keys = config.len(), "wrote task configuration");

        let bash_command = format!(
            "{}/install/cloud.sh -p {} -v {} -j {} -o {}",
            settings.scripts_root.display(),
            self.target.platform(),
            self.target.version(),
            json_path.display(),
            operation
        );

        Ok(TaskDescriptor {
            task_id: operation.to_string(),
            dag_id: self.dag_id.clone(),
            bash_command,
            env,
            retries: TASK_RETRIES,
            depends_on_past: false,
            trigger_rule,
            executor: settings.placement.clone(),
            downstream: Vec::new(),
        })
    }
}
