use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::TaskFileStore;

/// Writes task files to the local filesystem, creating parent directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemTaskFileStore;

impl TaskFileStore for FilesystemTaskFileStore {
    fn write_task_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
