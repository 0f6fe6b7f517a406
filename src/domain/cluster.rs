//! Cluster target identity, naming and derived paths.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{AppError, Operation};

/// Identity used by the upstream CI account.
pub const DEFAULT_CI_IDENTITY: &str = "cloud-bulldozer";

/// What is being installed: an OpenShift `major.minor` on a platform/profile pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterTarget {
    version: String,
    release_stream: String,
    platform: String,
    profile: String,
}

impl ClusterTarget {
    pub fn new(
        version: &str,
        release_stream: &str,
        platform: &str,
        profile: &str,
    ) -> Result<Self, AppError> {
        validate_version(version)?;
        validate_segment("platform", platform)?;
        validate_segment("profile", profile)?;
        validate_segment("release stream", release_stream)?;
        Ok(Self {
            version: version.to_string(),
            release_stream: release_stream.to_string(),
            platform: platform.to_string(),
            profile: profile.to_string(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn release_stream(&self) -> &str {
        &self.release_stream
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// `{version}-{platform}-{profile}`, shared by file names and labels.
    pub fn slug(&self) -> String {
        format!("{}-{}-{}", self.version, self.platform, self.profile)
    }

    pub fn kubeconfig_name(&self) -> String {
        format!("{}-kubeconfig", self.slug())
    }

    pub fn kubeadmin_name(&self) -> String {
        format!("{}-kubeadmin", self.slug())
    }

    /// Location of the JSON hand-off file for `operation`.
    pub fn task_file(&self, output_dir: &std::path::Path, operation: Operation) -> PathBuf {
        output_dir.join(format!("{}-{}-task.json", self.slug(), operation))
    }
}

fn validate_version(version: &str) -> Result<(), AppError> {
    let mut parts = version.split('.');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(major), Some(minor), None) => is_number(major) && is_number(minor),
        _ => false,
    };
    if valid { Ok(()) } else { Err(AppError::InvalidVersion(version.to_string())) }
}

fn is_number(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
}

fn validate_segment(field: &'static str, value: &str) -> Result<(), AppError> {
    let reason = if value.trim().is_empty() {
        Some("must not be empty")
    } else if value.chars().any(|c| c == '/' || c == '\\' || c.is_whitespace()) {
        Some("must not contain path separators or whitespace")
    } else if value == "." || value == ".." {
        Some("must not be a relative path component")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(AppError::InvalidTarget {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Strategy turning a user identity into a cluster name.
pub trait ClusterNaming {
    fn cluster_name(&self, identity: &str, target: &ClusterTarget) -> String;
}

/// CI runs get a `ci-` prefix, everyone else is prefixed by their own identity.
///
/// Keeps developer clusters from colliding with CI clusters in a shared cloud account.
#[derive(Debug, Clone)]
pub struct CiAwareNaming {
    ci_identity: String,
}

impl CiAwareNaming {
    pub fn new<S: Into<String>>(ci_identity: S) -> Self {
        Self { ci_identity: ci_identity.into() }
    }
}

impl Default for CiAwareNaming {
    fn default() -> Self {
        Self::new(DEFAULT_CI_IDENTITY)
    }
}

impl ClusterNaming for CiAwareNaming {
    fn cluster_name(&self, identity: &str, target: &ClusterTarget) -> String {
        let prefix = if identity == self.ci_identity { "ci" } else { identity };
        format!("{}-{}", prefix, target.slug())
    }
}

impl<F> ClusterNaming for F
where
    F: Fn(&str, &ClusterTarget) -> String,
{
    fn cluster_name(&self, identity: &str, target: &ClusterTarget) -> String {
        self(identity, target)
    }
}

/// Paths derived from the cluster name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterPaths {
    pub cluster_name: String,
    pub deploy_path: String,
    pub kubeconfig_path: String,
}

impl ClusterPaths {
    pub fn for_cluster(cluster_name: String) -> Self {
        let deploy_path = cluster_name.clone();
        let kubeconfig_path = format!("/root/{}/auth/kubeconfig", deploy_path);
        Self { cluster_name, deploy_path, kubeconfig_path }
    }
}
