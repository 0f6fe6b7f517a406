use std::cell::RefCell;
use std::rc::Rc;

use crate::ports::ProcessEnvironment;

#[derive(Clone, Default)]
pub struct FakeEnvironment {
    vars: Rc<RefCell<Vec<(String, String)>>>,
}

impl FakeEnvironment {
    pub fn set(&self, key: &str, value: &str) {
        self.vars.borrow_mut().push((key.to_string(), value.to_string()));
    }
}

impl ProcessEnvironment for FakeEnvironment {
    fn vars(&self) -> Vec<(String, String)> {
        self.vars.borrow().clone()
    }
}
