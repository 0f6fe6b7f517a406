use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

use crate::domain::{AppError, ConfigMap, into_config_map};
use crate::ports::SecretStore;

/// In-memory secret bundles.
#[derive(Clone, Default)]
pub struct MemorySecretStore {
    bundles: Rc<RefCell<BTreeMap<String, ConfigMap>>>,
}

impl MemorySecretStore {
    pub fn insert(&self, name: &str, bundle: Value) {
        let bundle = into_config_map(bundle).expect("bundle must be a JSON object");
        self.bundles.borrow_mut().insert(name.to_string(), bundle);
    }

    pub fn remove(&self, name: &str) {
        self.bundles.borrow_mut().remove(name);
    }

    pub fn remove_key(&self, name: &str, key: &str) {
        if let Some(bundle) = self.bundles.borrow_mut().get_mut(name) {
            bundle.remove(key);
        }
    }
}

impl SecretStore for MemorySecretStore {
    fn get_json(&self, name: &str) -> Result<ConfigMap, AppError> {
        self.bundles
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::SecretBundleMissing(name.to_string()))
    }
}
