//! CLI entry and dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use signin_core::config::{self, Config};

mod commands;

#[derive(Parser)]
#[command(name = "signin")]
#[command(version)]
#[command(about = "Terminal sign-in form with a greeting banner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Submit credentials once without the form and print the result
    Exec {
        /// Value for the User ID field
        #[arg(short, long = "user-id", value_name = "ID", default_value = "")]
        user_id: String,

        /// Value for the Password field
        #[arg(
            short,
            long,
            env = "SIGNIN_PASSWORD",
            hide_env_values = true,
            default_value = ""
        )]
        password: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, config } = cli;
    let config_path = config.unwrap_or_else(config::paths::config_path);

    // default to the interactive form
    let Some(command) = command else {
        let config = load_config(&config_path)?;
        return commands::form::run(&config);
    };

    match command {
        Commands::Exec { user_id, password } => {
            let config = load_config(&config_path)?;
            commands::exec::run(&user_id, &password, &config)
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        },
    }
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load_from(path).context("load config")
}
