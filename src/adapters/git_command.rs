use std::path::PathBuf;

use git2::Repository;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::GitIdentity;

/// Reads the owner of a remote from the local checkout.
#[derive(Debug, Clone)]
pub struct GitRemoteIdentity {
    root: PathBuf,
    remote: String,
}

impl GitRemoteIdentity {
    pub fn new<S: Into<String>>(root: PathBuf, remote: S) -> Self {
        Self { root, remote: remote.into() }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(&self.root).map_err(|e| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: e.to_string(),
        })
    }
}

impl GitIdentity for GitRemoteIdentity {
    fn git_user(&self) -> Result<String, AppError> {
        let repo = self.repo()?;
        let remote = repo.find_remote(&self.remote).map_err(|e| AppError::GitError {
            command: format!("git2::Repository::find_remote({})", self.remote),
            details: e.to_string(),
        })?;
        let url = remote.url().ok_or_else(|| AppError::GitError {
            command: "git2::Remote::url".to_string(),
            details: format!("remote '{}' has no UTF-8 URL", self.remote),
        })?;

        let owner = parse_remote_owner(url).ok_or_else(|| AppError::GitError {
            command: "parse_remote_owner".to_string(),
            details: format!("cannot determine owner from remote URL '{}'", url),
        })?;
        debug!(remote = %self.remote, %url, %owner, "resolved git identity");
        Ok(owner)
    }
}

/// Extract the owner segment from a remote URL.
///
/// Supports SCP-like SSH (`git@github.com:owner/repo.git`) and
/// URL forms (`https://github.com/owner/repo.git`, `ssh://git@host/owner/repo`).
pub fn parse_remote_owner(url: &str) -> Option<String> {
    let path = if let Some((_, rest)) = url.split_once("://") {
        rest.split_once('/')?.1
    } else {
        url.split_once(':')?.1
    };

    let mut segments = path.trim_end_matches('/').split('/').filter(|s| !s.is_empty());
    let owner = segments.next()?;
    segments.next()?;
    Some(owner.to_string())
}
