use crate::domain::AppError;

/// Resolves who is generating the tasks.
pub trait GitIdentity {
    /// Identity of the checkout owner (e.g. the GitHub account of the `origin` remote).
    fn git_user(&self) -> Result<String, AppError>;
}
