use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::domain::AppError;
use crate::ports::TaskFileStore;

/// Records task files instead of writing them.
#[derive(Clone, Default)]
pub struct MemoryTaskFiles {
    files: Rc<RefCell<BTreeMap<PathBuf, String>>>,
}

impl MemoryTaskFiles {
    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl TaskFileStore for MemoryTaskFiles {
    fn write_task_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
