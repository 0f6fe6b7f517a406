mod fake_environment;
mod fake_git;
mod harness;
mod memory_secret_store;
mod memory_task_files;
mod stub_variable_loader;

pub use fake_environment::FakeEnvironment;
pub use fake_git::FakeGit;
pub use harness::TestHarness;
pub use memory_secret_store::MemorySecretStore;
pub use memory_task_files::MemoryTaskFiles;
pub use stub_variable_loader::StubVariableLoader;
