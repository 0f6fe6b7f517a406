//! Application configuration loaded from `ocp-install.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AppError, DEFAULT_CI_IDENTITY, ExecutorPlacement, Volume, VolumeMount};

/// Default configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "ocp-install.toml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "OCP_INSTALL_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub executor: ExecutorConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.paths.validate()?;
        self.executor.validate()?;
        self.identity.validate()?;
        Ok(())
    }
}

/// Where inputs are read from and task files are written to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Root of the DAG checkout; `cloud.sh` lives under `{root_dag_dir}/scripts`.
    #[serde(default = "default_root_dag_dir")]
    pub root_dag_dir: PathBuf,
    /// Root of the task variable files. Defaults to `root_dag_dir`.
    #[serde(default)]
    pub vars_root: Option<PathBuf>,
    /// Directory holding `{bundle}.json` secret files.
    #[serde(default = "default_secrets_dir")]
    pub secrets_dir: PathBuf,
    /// Directory receiving the JSON hand-off files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root_dag_dir: default_root_dag_dir(),
            vars_root: None,
            secrets_dir: default_secrets_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl PathsConfig {
    pub fn scripts_root(&self) -> PathBuf {
        self.root_dag_dir.join("scripts")
    }

    pub fn vars_root(&self) -> &Path {
        self.vars_root.as_deref().unwrap_or(&self.root_dag_dir)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.root_dag_dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("paths.root_dag_dir must not be empty".to_string()));
        }
        if !self.output_dir.is_absolute() {
            return Err(AppError::InvalidConfig(format!(
                "paths.output_dir must be absolute: {}",
                self.output_dir.display()
            )));
        }
        Ok(())
    }
}

fn default_root_dag_dir() -> PathBuf {
    PathBuf::from("/opt/airflow/dags/repo/dags/openshift_nightlies")
}

fn default_secrets_dir() -> PathBuf {
    PathBuf::from("/opt/airflow/secrets")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

/// Pod placement of generated tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutorConfig {
    #[serde(default = "default_container_name")]
    pub container_name: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default = "default_image_pull_policy")]
    pub image_pull_policy: String,
    /// Shared `emptyDir` volume used to pass the kubeconfig between steps.
    #[serde(default = "default_volume_name")]
    pub volume_name: String,
    #[serde(default = "default_mount_path")]
    pub mount_path: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            container_name: default_container_name(),
            image: default_image(),
            image_pull_policy: default_image_pull_policy(),
            volume_name: default_volume_name(),
            mount_path: default_mount_path(),
        }
    }
}

impl ExecutorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("executor.container_name", &self.container_name),
            ("executor.image", &self.image),
            ("executor.image_pull_policy", &self.image_pull_policy),
            ("executor.volume_name", &self.volume_name),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::InvalidConfig(format!("{name} must not be empty")));
            }
        }
        if !self.mount_path.starts_with('/') {
            return Err(AppError::InvalidConfig(format!(
                "executor.mount_path must be absolute: {}",
                self.mount_path
            )));
        }
        Ok(())
    }

    pub fn placement(&self) -> ExecutorPlacement {
        ExecutorPlacement {
            container_name: self.container_name.clone(),
            image: self.image.clone(),
            image_pull_policy: self.image_pull_policy.clone(),
            volume_mounts: vec![VolumeMount {
                name: self.volume_name.clone(),
                mount_path: self.mount_path.clone(),
            }],
            volumes: vec![Volume::empty_dir(self.volume_name.clone())],
        }
    }
}

fn default_container_name() -> String {
    "base".to_string()
}

fn default_image() -> String {
    "quay.io/keithwhitley4/airflow-ansible:2.0.0".to_string()
}

fn default_image_pull_policy() -> String {
    "Always".to_string()
}

fn default_volume_name() -> String {
    "kubeconfig".to_string()
}

fn default_mount_path() -> String {
    "/home/airflow/auth".to_string()
}

/// How the generating user is identified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    /// Checkout whose remote owner names developer clusters.
    #[serde(default = "default_repository")]
    pub repository: PathBuf,
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Identity whose clusters get the `ci-` prefix.
    #[serde(default = "default_ci_identity")]
    pub ci_identity: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            remote: default_remote(),
            ci_identity: default_ci_identity(),
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.remote.trim().is_empty() {
            return Err(AppError::InvalidConfig("identity.remote must not be empty".to_string()));
        }
        if self.ci_identity.trim().is_empty() {
            return Err(AppError::InvalidConfig("identity.ci_identity must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_repository() -> PathBuf {
    PathBuf::from(".")
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_ci_identity() -> String {
    DEFAULT_CI_IDENTITY.to_string()
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Resolve and load the configuration.
///
/// Order: `explicit` path, then `$OCP_INSTALL_CONFIG`, then `./ocp-install.toml`,
/// then built-in defaults. Explicitly named files must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let path = match named {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigFileMissing(path.display().to_string()));
            }
            path
        }
        None => {
            let local = PathBuf::from(CONFIG_FILE);
            if !local.is_file() {
                debug!("no configuration file found, using defaults");
                return Ok(AppConfig::default());
            }
            local
        }
    };

    debug!(path = %path.display(), "loading configuration");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config_content("").unwrap();

        assert_eq!(config.paths.output_dir, PathBuf::from("/tmp"));
        assert_eq!(
            config.paths.scripts_root(),
            PathBuf::from("/opt/airflow/dags/repo/dags/openshift_nightlies/scripts")
        );
        assert_eq!(config.paths.vars_root(), config.paths.root_dag_dir.as_path());
        assert_eq!(config.identity.ci_identity, "cloud-bulldozer");
        assert_eq!(config.executor.image, "quay.io/keithwhitley4/airflow-ansible:2.0.0");
    }

    #[test]
    fn sections_override_defaults() {
        let toml = r#"
[paths]
root_dag_dir = "/srv/dags"
vars_root = "/srv/vars"
output_dir = "/var/tmp/tasks"

[executor]
image = "registry.example.com/ansible:3"

[identity]
ci_identity = "ci-bot"
"#;
        let config = parse_config_content(toml).unwrap();

        assert_eq!(config.paths.scripts_root(), PathBuf::from("/srv/dags/scripts"));
        assert_eq!(config.paths.vars_root(), Path::new("/srv/vars"));
        assert_eq!(config.executor.image, "registry.example.com/ansible:3");
        assert_eq!(config.executor.image_pull_policy, "Always");
        assert_eq!(config.identity.ci_identity, "ci-bot");
    }

    #[test]
    fn placement_shares_one_empty_dir_volume() {
        let placement = ExecutorConfig::default().placement();

        assert_eq!(placement.container_name, "base");
        assert_eq!(placement.volume_mounts.len(), 1);
        assert_eq!(placement.volumes.len(), 1);
        assert_eq!(placement.volume_mounts[0].name, placement.volumes[0].name);
        assert_eq!(placement.volume_mounts[0].mount_path, "/home/airflow/auth");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = parse_config_content("[paths]\nretries = 5\n");
        assert!(matches!(result, Err(AppError::TomlParseError(_))));
    }

    #[test]
    fn validation_fails_on_relative_output_dir() {
        let result = parse_config_content("[paths]\noutput_dir = \"tmp\"\n");
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn validation_fails_on_empty_image() {
        let result = parse_config_content("[executor]\nimage = \" \"\n");
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    #[serial]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let result = load_config(Some(&missing));
        assert!(matches!(result, Err(AppError::ConfigFileMissing(_))));
    }

    #[test]
    #[serial]
    fn env_variable_names_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[identity]\nremote = \"upstream\"\n").unwrap();

        unsafe {
            std::env::set_var(CONFIG_ENV, &path);
        }
        let result = load_config(None);
        unsafe {
            std::env::remove_var(CONFIG_ENV);
        }

        assert_eq!(result.unwrap().identity.remote, "upstream");
    }
}
