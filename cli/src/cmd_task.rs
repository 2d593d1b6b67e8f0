// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use daylist_core::{DayKey, Daylist, Section, Task};

use crate::arg::{DayArgs, TaskArgs};
use crate::day_formatter::DayFormatter;

#[derive(Debug, Clone)]
pub struct CmdAdd {
    pub date: Option<DayKey>,
    pub content: String,
    pub priority: Option<usize>,
}

impl CmdAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("a")
            .about("Add a task to the daily list")
            .arg(TaskArgs::content())
            .arg(TaskArgs::priority())
            .arg(DayArgs::date())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: DayArgs::get_date(matches),
            content: TaskArgs::get_content(matches),
            priority: TaskArgs::get_priority(matches),
        }
    }

    pub async fn run(self, daylist: &Daylist) -> Result<(), Box<dyn Error>> {
        let day = self.date.unwrap_or_else(|| daylist.today());
        tracing::debug!(%day, "adding task...");
        let task = daylist.add(day, &self.content, self.priority).await?;
        print_task("Added", &task, Section::Uncompleted, day);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdModify {
    pub date: Option<DayKey>,
    pub index: usize,
    pub content: String,
}

impl CmdModify {
    pub const NAME: &str = "modify";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .visible_alias("edit")
            .alias("mod")
            .about("Rewrite the content of an uncompleted task")
            .arg(TaskArgs::index())
            .arg(TaskArgs::content())
            .arg(DayArgs::date())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: DayArgs::get_date(matches),
            index: TaskArgs::get_index(matches),
            content: TaskArgs::get_content(matches),
        }
    }

    pub async fn run(self, daylist: &Daylist) -> Result<(), Box<dyn Error>> {
        let day = self.date.unwrap_or_else(|| daylist.today());
        tracing::debug!(%day, index = self.index, "modifying task...");
        let task = daylist.modify(day, self.index, &self.content).await?;
        print_task("Modified", &task, Section::Uncompleted, day);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdComplete {
    pub date: Option<DayKey>,
    pub index: usize,
}

impl CmdComplete {
    pub const NAME: &str = "complete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .visible_alias("done")
            .about("Mark an uncompleted task as completed")
            .arg(TaskArgs::index())
            .arg(DayArgs::date())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: DayArgs::get_date(matches),
            index: TaskArgs::get_index(matches),
        }
    }

    pub async fn run(self, daylist: &Daylist) -> Result<(), Box<dyn Error>> {
        let day = self.date.unwrap_or_else(|| daylist.today());
        tracing::debug!(%day, index = self.index, "completing task...");
        let task = daylist.complete(day, self.index).await?;
        print_task("Completed", &task, Section::Completed, day);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRedo {
    pub date: Option<DayKey>,
    pub index: usize,
}

impl CmdRedo {
    pub const NAME: &str = "redo";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .visible_alias("undo")
            .alias("r")
            .about("Move a completed task back to the uncompleted list")
            .arg(TaskArgs::index())
            .arg(DayArgs::date())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: DayArgs::get_date(matches),
            index: TaskArgs::get_index(matches),
        }
    }

    pub async fn run(self, daylist: &Daylist) -> Result<(), Box<dyn Error>> {
        let day = self.date.unwrap_or_else(|| daylist.today());
        tracing::debug!(%day, index = self.index, "reopening task...");
        let task = daylist.redo(day, self.index).await?;
        print_task("Reopened", &task, Section::Uncompleted, day);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRemove {
    pub date: Option<DayKey>,
    pub index: usize,
    pub completed: bool,
}

impl CmdRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .visible_alias("rm")
            .alias("m")
            .about("Remove a task from the daily list")
            .arg(TaskArgs::index())
            .arg(TaskArgs::completed())
            .arg(DayArgs::date())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: DayArgs::get_date(matches),
            index: TaskArgs::get_index(matches),
            completed: TaskArgs::get_completed(matches),
        }
    }

    pub fn section(&self) -> Section {
        match self.completed {
            true => Section::Completed,
            false => Section::Uncompleted,
        }
    }

    pub async fn run(self, daylist: &Daylist) -> Result<(), Box<dyn Error>> {
        let day = self.date.unwrap_or_else(|| daylist.today());
        let section = self.section();
        tracing::debug!(%day, index = self.index, %section, "removing task...");
        let task = daylist.remove(day, self.index, section).await?;
        print_task("Removed", &task, section, day);
        Ok(())
    }
}

fn print_task(action: &str, task: &Task, section: Section, day: DayKey) {
    let formatter = DayFormatter::new(false);
    println!("{} {}", action.green(), formatter.format_task(task, section, day));
}
