mod git;
mod process_env;
mod secret_store;
mod status_indexer;
mod task_file_store;
mod variable_loader;

pub use git::GitIdentity;
pub use process_env::ProcessEnvironment;
pub use secret_store::SecretStore;
pub use status_indexer::StatusIndexer;
pub use task_file_store::TaskFileStore;
pub use variable_loader::VariableLoader;
