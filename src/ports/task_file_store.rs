use std::path::Path;

use crate::domain::AppError;

/// Destination for the JSON hand-off files read by the install script.
pub trait TaskFileStore {
    fn write_task_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
