/// Read-only view of the current process environment.
pub trait ProcessEnvironment {
    fn vars(&self) -> Vec<(String, String)>;
}
