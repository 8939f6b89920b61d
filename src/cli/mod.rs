pub mod run;

pub use run::run;

use clap::{Parser, Subcommand};
use eyre::{Context, Result};

use crate::config::{Configuration, load_configuration, lookup_config_path};

#[derive(Debug, Parser)]
#[command(
    name = "taskboard",
    version,
    about,
    long_about = r#"A task-board client for a remote task service.

Default configuration file location looks up in the following order:
    * $XDG_CONFIG_HOME/taskboard/config.toml
    * $HOME/.config/taskboard/config.toml
    * $HOME/.taskboard.toml
"#
)]
pub struct Command {
    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Task service endpoint, overriding the configured one
    #[arg(short, long, value_name = "URL")]
    endpoint: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// List all tasks on the board
    List,
    /// Add a new task
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
        /// Mark the task completed right away
        #[arg(long)]
        completed: bool,
    },
    /// Edit an existing task
    Edit {
        id: u64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Toggle a task's completion flag
    Done { id: u64 },
    /// Delete a task
    Rm { id: u64 },
}

impl Command {
    pub fn new() -> Command {
        Self::parse()
    }

    pub fn get_config(&self) -> Result<Configuration> {
        let config_path = self
            .config
            .clone()
            .unwrap_or_else(|| lookup_config_path().unwrap_or_default());

        let mut config = if config_path.is_empty() {
            // No config file around, the defaults are enough
            Configuration::default()
        } else {
            load_configuration(config_path.as_str()).wrap_err("loading configuration")?
        };

        if let Some(endpoint) = &self.endpoint {
            config.remote.endpoint = endpoint.clone();
        }
        Ok(config)
    }

    pub fn action(self) -> Action {
        self.action
    }
}
