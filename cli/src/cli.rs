// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use daylist_core::{APP_NAME, Daylist};
use futures::{FutureExt, future::LocalBoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_day::{CmdDelete, CmdList, CmdNew, CmdShow};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_task::{CmdAdd, CmdComplete, CmdModify, CmdRedo, CmdRemove};
use crate::config::parse_config;

/// Run the daylist command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Keep a to-do list for every day")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to show today
            .arg_required_else_help(false)
            .arg(
                arg!(--config <CONFIG> "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $DAYLIST_CONFIG, then $XDG_CONFIG_HOME/daylist/config.toml \
on Linux and MacOS, %LOCALAPPDATA%/daylist/config.toml on Windows.",
                    )
                    .global(true)
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdNew::command())
            .subcommand(CmdShow::command())
            .subcommand(CmdAdd::command())
            .subcommand(CmdModify::command())
            .subcommand(CmdComplete::command())
            .subcommand(CmdRedo::command())
            .subcommand(CmdRemove::command())
            .subcommand(CmdDelete::command())
            .subcommand(CmdList::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdNew::NAME, matches)) => New(CmdNew::from(matches)),
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)),
            Some((CmdAdd::NAME, matches)) => Add(CmdAdd::from(matches)),
            Some((CmdModify::NAME, matches)) => Modify(CmdModify::from(matches)),
            Some((CmdComplete::NAME, matches)) => Complete(CmdComplete::from(matches)),
            Some((CmdRedo::NAME, matches)) => Redo(CmdRedo::from(matches)),
            Some((CmdRemove::NAME, matches)) => Remove(CmdRemove::from(matches)),
            Some((CmdDelete::NAME, matches)) => Delete(CmdDelete::from(matches)),
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Show(CmdShow::today()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Create the list of a day
    New(CmdNew),

    /// Show the list of a day
    Show(CmdShow),

    /// Add a task
    Add(CmdAdd),

    /// Rewrite a task
    Modify(CmdModify),

    /// Mark a task as completed
    Complete(CmdComplete),

    /// Mark a task as uncompleted
    Redo(CmdRedo),

    /// Remove a task
    Remove(CmdRemove),

    /// Delete the list of a day
    Delete(CmdDelete),

    /// List the days with a list
    List(CmdList),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            New(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Show(a)     => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Add(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Modify(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Complete(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Redo(a)     => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Remove(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Delete(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            List(a)     => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Daylist) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let daylist = Daylist::new(core_config)?;

        f(&daylist).await
    }
}
