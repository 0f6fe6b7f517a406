use crate::domain::{AppError, ConfigMap};

/// Named JSON bundles of settings and credentials.
pub trait SecretStore {
    /// Fetch bundle `name` as a mapping.
    ///
    /// Fails with `SecretBundleMissing` when absent and `InvalidSecretBundle`
    /// when the stored document is not a JSON object.
    fn get_json(&self, name: &str) -> Result<ConfigMap, AppError>;
}
