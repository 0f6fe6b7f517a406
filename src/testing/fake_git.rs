use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::AppError;
use crate::ports::GitIdentity;

/// Git identity returning a configured user, or a configured failure.
#[derive(Clone)]
pub struct FakeGit {
    user: Rc<RefCell<Result<String, String>>>,
}

impl FakeGit {
    pub fn new(user: &str) -> Self {
        Self { user: Rc::new(RefCell::new(Ok(user.to_string()))) }
    }

    pub fn fail_with(&self, details: &str) {
        *self.user.borrow_mut() = Err(details.to_string());
    }
}

impl GitIdentity for FakeGit {
    fn git_user(&self) -> Result<String, AppError> {
        self.user.borrow().clone().map_err(|details| AppError::GitError {
            command: "fake git_user".to_string(),
            details,
        })
    }
}
