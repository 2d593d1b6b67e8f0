// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use clap_num::number_range;
use daylist_core::DayKey;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show timestamps of each task")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DayArgs;

impl DayArgs {
    /// The optional `-d` flag selecting a day other than today.
    pub fn date() -> Arg {
        arg!(-d --date <DATE> "Date of the daily list (YYYY_MM_DD), defaults to today")
            .value_parser(parse_day_key)
    }

    pub fn get_date(matches: &ArgMatches) -> Option<DayKey> {
        matches.get_one("date").copied()
    }

    /// A required positional date.
    pub fn day() -> Arg {
        arg!(day: <DATE> "Date of the daily list (YYYY_MM_DD)").value_parser(parse_day_key)
    }

    pub fn get_day(matches: &ArgMatches) -> DayKey {
        matches
            .get_one::<DayKey>("day")
            .copied()
            .expect("date is required")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TaskArgs;

impl TaskArgs {
    pub fn index() -> Arg {
        arg!(index: <INDEX> "Index of the task, starting from 1").value_parser(parse_positive)
    }

    pub fn get_index(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("index")
            .copied()
            .expect("index is required")
    }

    pub fn content() -> Arg {
        arg!(content: <CONTENT> "Content of the task").num_args(1..)
    }

    /// Words of the content joined by single spaces.
    pub fn get_content(matches: &ArgMatches) -> String {
        matches
            .get_many::<String>("content")
            .expect("content is required")
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn priority() -> Arg {
        arg!(-p --priority <N> "Position to insert the task at, starting from 1")
            .value_parser(parse_positive)
    }

    pub fn get_priority(matches: &ArgMatches) -> Option<usize> {
        matches.get_one("priority").copied()
    }

    pub fn completed() -> Arg {
        arg!(-c --completed "Pick the task from the completed list")
    }

    pub fn get_completed(matches: &ArgMatches) -> bool {
        matches.get_flag("completed")
    }
}

fn parse_day_key(s: &str) -> Result<DayKey, String> {
    s.parse().map_err(|e: daylist_core::Error| e.to_string())
}

fn parse_positive(s: &str) -> Result<usize, String> {
    number_range(s, 1, usize::MAX)
}
