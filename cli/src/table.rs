// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain text table, one row per item, columns separated by a space.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
    header: bool,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: " ",
            header: false,
        }
    }

    /// Prints the column names above the rows.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|item| self.columns.iter().map(|col| col.format(item)).collect())
            .collect();

        let names: Vec<Cow<'_, str>> = self.columns.iter().map(|col| col.name()).collect();
        let mut widths = get_column_max_width(self.columns.len(), &rows);
        if self.header && !rows.is_empty() {
            for (w, name) in widths.iter_mut().zip(&names) {
                *w = (*w).max(name.width());
            }

            for (j, name) in names.iter().enumerate() {
                if j == self.columns.len() - 1 {
                    writeln!(f, "{}", name.bold())?;
                } else {
                    write!(f, "{}{}", pad(name, widths[j], false).bold(), self.separator)?;
                }
            }
        }

        for (i, (cells, item)) in rows.iter().zip(self.data).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for (j, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let last = j == self.columns.len() - 1;
                let padded = match col.padding_direction() {
                    // last column does not need padding if it's left-aligned
                    PaddingDirection::Left if last => cell.to_string(),
                    PaddingDirection::Left => pad(cell, widths[j], false),
                    PaddingDirection::Right => pad(cell, widths[j], true),
                };

                match col.get_color(item) {
                    Some(color) => write!(f, "{}", padded.color(color))?,
                    None => write!(f, "{padded}")?,
                }

                if !last {
                    write!(f, "{}", self.separator)?;
                }
            }
        }
        Ok(())
    }
}

/// Pads by display width, so wide characters line up.
fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right_align {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}

fn get_column_max_width(columns: usize, rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut max_width = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}
