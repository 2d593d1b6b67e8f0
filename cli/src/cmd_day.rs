// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use daylist_core::{DayKey, Daylist};

use crate::arg::{CommonArgs, DayArgs};
use crate::day_formatter::DayFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdNew {
    pub date: Option<DayKey>,
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .visible_alias("create")
            .alias("c")
            .about("Create the daily list of a day")
            .arg(DayArgs::date())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: DayArgs::get_date(matches),
        }
    }

    pub async fn run(self, daylist: &Daylist) -> Result<(), Box<dyn Error>> {
        let day = self.date.unwrap_or_else(|| daylist.today());
        tracing::debug!(%day, "creating daily list...");
        let record = daylist.create(day).await?;
        println!("{} {}", "Created".green(), record.time);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdShow {
    pub date: Option<DayKey>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("s")
            .about("Show the daily list of a day")
            .arg(DayArgs::date())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: DayArgs::get_date(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    /// Shows today, in the default table format.
    pub fn today() -> Self {
        Self {
            date: None,
            output_format: OutputFormat::Table,
            verbose: false,
        }
    }

    pub async fn run(self, daylist: &Daylist) -> Result<(), Box<dyn Error>> {
        let day = self.date.unwrap_or_else(|| daylist.today());
        tracing::debug!(%day, "showing daily list...");
        let record = daylist.show(day).await?;

        let formatter = DayFormatter::new(self.verbose).with_output_format(self.output_format);
        println!("{}", formatter.format(&record));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdDelete {
    pub day: DayKey,
}

impl CmdDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .aliases(["del", "d"])
            .about("Delete the daily list of a day")
            .arg(DayArgs::day())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: DayArgs::get_day(matches),
        }
    }

    pub async fn run(self, daylist: &Daylist) -> Result<(), Box<dyn Error>> {
        tracing::debug!(day = %self.day, "deleting daily list...");
        daylist.delete(self.day).await?;
        println!("{} {}", "Deleted".red(), self.day);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdList;

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the days that have a daily list")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, daylist: &Daylist) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing days...");
        let today = daylist.today();
        for day in daylist.days().await? {
            match day == today {
                true => println!("{} {}", day.to_string().bold(), "(today)".dimmed()),
                false => println!("{day}"),
            }
        }
        Ok(())
    }
}
