pub mod git_command;
pub mod process_env;
pub mod secret_files;
pub mod status_index;
pub mod task_file_filesystem;
pub mod variable_files;

pub use git_command::GitRemoteIdentity;
pub use process_env::OsEnvironment;
pub use secret_files::FileSecretStore;
pub use status_index::StatusIndexTask;
pub use task_file_filesystem::FilesystemTaskFileStore;
pub use variable_files::FilesystemVariableLoader;
