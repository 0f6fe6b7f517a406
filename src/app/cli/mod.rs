//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::app::api::{self, TaskOptions};
use crate::app::logging;
use crate::domain::{AppError, Operation, TriggerRule};

#[derive(Parser)]
#[command(name = "ocp-install")]
#[command(version)]
#[command(
    about = "Generate OpenShift install and cleanup task descriptors",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file (defaults to $OCP_INSTALL_CONFIG or ./ocp-install.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one task, write its configuration file and print the descriptor
    #[clap(visible_alias = "t")]
    Task {
        /// Operation: install or cleanup
        operation: Operation,
        #[command(flatten)]
        target: TargetArgs,
        /// Trigger rule for cleanup tasks (all_success, all_done, ...); defaults to all_success
        #[arg(long)]
        trigger_rule: Option<TriggerRule>,
    },
    /// Build install and cleanup tasks for one target and print the plan
    #[clap(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// OpenShift version as major.minor (e.g. 4.10)
    #[arg(long = "ocp-version")]
    version: String,
    /// Cloud platform (aws, gcp, azure)
    #[arg(short, long)]
    platform: String,
    /// Install profile
    #[arg(short = 'P', long, default_value = "default")]
    profile: String,
    /// Release stream the version is built from
    #[arg(short, long, default_value = "nightly")]
    release_stream: String,
    /// JSON file with latest-release metadata
    #[arg(short, long)]
    latest_release: Option<PathBuf>,
    /// DAG id recorded on generated tasks
    #[arg(long)]
    dag_id: Option<String>,
}

impl TargetArgs {
    fn into_options(self, config: Option<PathBuf>) -> TaskOptions {
        TaskOptions {
            config,
            dag_id: self.dag_id,
            version: self.version,
            release_stream: self.release_stream,
            platform: self.platform,
            profile: self.profile,
            latest_release: self.latest_release,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Task { operation, target, trigger_rule } => {
            api::build_task(&target.into_options(cli.config), operation, trigger_rule)
                .and_then(|task| print_json(&task))
        }
        Commands::Plan { target } => {
            api::build_plan(&target.into_options(cli.config)).and_then(|plan| print_json(&plan))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
