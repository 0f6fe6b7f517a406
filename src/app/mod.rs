pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod installer;
pub mod logging;

pub use context::{AppContext, TaskSettings};
pub use installer::{InstallerRequest, OpenshiftInstaller};
