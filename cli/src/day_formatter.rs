// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use chrono::NaiveDate;
use colored::{Color, Colorize};
use daylist_core::{DayKey, DayRecord, Section, Task};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, format_timestamp};

#[derive(Debug)]
pub struct DayFormatter {
    columns: Vec<TaskColumn>,
    format: OutputFormat,
    verbose: bool,
}

impl DayFormatter {
    pub fn new(verbose: bool) -> Self {
        let columns = if verbose {
            vec![
                TaskColumn::Marker,
                TaskColumn::Index,
                TaskColumn::CreateTime,
                TaskColumn::ModifyTime,
                TaskColumn::CompleteTime,
                TaskColumn::Content,
            ]
        } else {
            vec![TaskColumn::Marker, TaskColumn::Index, TaskColumn::Content]
        };

        Self {
            columns,
            format: OutputFormat::Table,
            verbose,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Formats a whole day: open tasks first, then completed ones.
    pub fn format<'a>(&'a self, record: &'a DayRecord) -> DayDisplay<'a> {
        DayDisplay {
            record,
            formatter: self,
        }
    }

    /// Formats a single task of `day` held in `section`, without its index.
    pub fn format_task<'a>(
        &'a self,
        task: &'a Task,
        section: Section,
        day: DayKey,
    ) -> TaskDisplay<'a> {
        TaskDisplay {
            row: TaskRow {
                index: None,
                section,
                task,
                day: day.date(),
            },
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct DayDisplay<'a> {
    record: &'a DayRecord,
    formatter: &'a DayFormatter,
}

impl fmt::Display for DayDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.formatter.format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(self.record).map_err(|_| fmt::Error)?;
            return write!(f, "{json}");
        }

        let record = self.record;
        writeln!(f, "{} {}", record.title.bold(), record.time.to_string().dimmed())?;
        if record.is_empty() {
            return write!(f, "{}", "No tasks yet".italic());
        }

        let day = record.time.date();
        let rows: Vec<TaskRow> = [Section::Uncompleted, Section::Completed]
            .into_iter()
            .flat_map(|section| {
                record
                    .tasks(section)
                    .iter()
                    .enumerate()
                    .map(move |(i, task)| TaskRow {
                        index: Some(i + 1),
                        section,
                        task,
                        day,
                    })
            })
            .collect();

        let table = Table::new(&self.formatter.columns, &rows).with_header(self.formatter.verbose);
        write!(f, "{table}")
    }
}

#[derive(Debug)]
pub struct TaskDisplay<'a> {
    row: TaskRow<'a>,
    formatter: &'a DayFormatter,
}

impl fmt::Display for TaskDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<TaskColumn> = self
            .formatter
            .columns
            .iter()
            .copied()
            .filter(|c| *c != TaskColumn::Index)
            .collect();
        let rows = [self.row];
        write!(f, "{}", Table::new(&columns, &rows))
    }
}

/// A task with its 1-based position in its section.
#[derive(Debug, Clone, Copy)]
pub struct TaskRow<'a> {
    pub index: Option<usize>,
    pub section: Section,
    pub task: &'a Task,
    pub day: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskColumn {
    Marker,
    Index,
    Content,
    CreateTime,
    ModifyTime,
    CompleteTime,
}

impl<'r> TableColumn<TaskRow<'r>> for TaskColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            TaskColumn::Marker => "",
            TaskColumn::Index => "#",
            TaskColumn::Content => "Content",
            TaskColumn::CreateTime => "Created",
            TaskColumn::ModifyTime => "Modified",
            TaskColumn::CompleteTime => "Completed",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a TaskRow<'r>) -> Cow<'a, str> {
        let task = data.task;
        match self {
            TaskColumn::Marker => match data.section {
                Section::Completed => "[x]",
                Section::Uncompleted => "[ ]",
            }
            .into(),
            TaskColumn::Index => data.index.map_or(String::new(), |i| i.to_string()).into(),
            TaskColumn::Content => task.content.as_str().into(),
            TaskColumn::CreateTime => format_timestamp(Some(task.create_time), data.day).into(),
            TaskColumn::ModifyTime => {
                format_timestamp(Some(task.last_modify_time), data.day).into()
            }
            TaskColumn::CompleteTime => format_timestamp(task.complete_time, data.day).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TaskColumn::Index => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &TaskRow<'r>) -> Option<Color> {
        match (self, data.section) {
            (TaskColumn::Marker, Section::Completed) => Some(Color::Green),
            (TaskColumn::Marker, Section::Uncompleted) => Some(Color::Yellow),
            (TaskColumn::Content, Section::Completed) => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
