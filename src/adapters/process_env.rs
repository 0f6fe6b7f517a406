use crate::ports::ProcessEnvironment;

/// Environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnvironment;

impl ProcessEnvironment for OsEnvironment {
    fn vars(&self) -> Vec<(String, String)> {
        // Non-UTF-8 entries cannot be forwarded as task env and are skipped.
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}
