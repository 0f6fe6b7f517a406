use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::{AppError, ConfigMap, into_config_map};
use crate::ports::SecretStore;

/// Prefix of environment variables that override file-backed bundles.
pub const SECRET_ENV_PREFIX: &str = "AIRFLOW_VAR_";

/// Secret bundles read from `AIRFLOW_VAR_{NAME}` or `{dir}/{name}.json`.
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    dir: PathBuf,
    read_env: bool,
}

impl FileSecretStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir, read_env: true }
    }

    /// Ignore environment overrides; only the directory is consulted.
    pub fn files_only(dir: PathBuf) -> Self {
        Self { dir, read_env: false }
    }

    fn env_key(name: &str) -> String {
        format!("{}{}", SECRET_ENV_PREFIX, name.to_uppercase())
    }

    fn raw(&self, name: &str) -> Result<String, AppError> {
        if self.read_env
            && let Ok(value) = std::env::var(Self::env_key(name))
        {
            return Ok(value);
        }

        let path = self.dir.join(format!("{name}.json"));
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::SecretBundleMissing(name.to_string()))
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

impl SecretStore for FileSecretStore {
    fn get_json(&self, name: &str) -> Result<ConfigMap, AppError> {
        let raw = self.raw(name)?;
        let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            AppError::InvalidSecretBundle { name: name.to_string(), details: e.to_string() }
        })?;
        into_config_map(value).ok_or_else(|| AppError::InvalidSecretBundle {
            name: name.to_string(),
            details: "expected a JSON object".to_string(),
        })
    }
}
