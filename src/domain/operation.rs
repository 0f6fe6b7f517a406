use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{AppError, ConfigMap};

/// Kind of work a generated task performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Install,
    Cleanup,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Install => "install",
            Operation::Cleanup => "cleanup",
        }
    }

    /// Phase switches read by the install script.
    pub fn flags(self) -> OperationFlags {
        match self {
            Operation::Install => OperationFlags {
                cleanup: true,
                debug_config: false,
                install: true,
                post_config: true,
                post_install: true,
            },
            Operation::Cleanup => OperationFlags {
                cleanup: true,
                debug_config: false,
                install: false,
                post_config: false,
                post_install: false,
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "install" => Ok(Operation::Install),
            "cleanup" => Ok(Operation::Cleanup),
            other => Err(AppError::InvalidArgument {
                field: "operation",
                value: other.to_string(),
                reason: "must be one of install, cleanup".to_string(),
            }),
        }
    }
}

/// Phase switches merged into the task configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationFlags {
    pub cleanup: bool,
    pub debug_config: bool,
    pub install: bool,
    pub post_config: bool,
    pub post_install: bool,
}

impl OperationFlags {
    pub fn to_config(self) -> ConfigMap {
        [
            ("openshift_cleanup", self.cleanup),
            ("openshift_debug_config", self.debug_config),
            ("openshift_install", self.install),
            ("openshift_post_config", self.post_config),
            ("openshift_post_install", self.post_install),
        ]
        .into_iter()
        .map(|(key, flag)| (key.to_string(), Value::Bool(flag)))
        .collect()
    }
}
