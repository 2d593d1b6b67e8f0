// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use daylist_core::{DayRecord, Section};

/// Asserts the task contents of a section, in order.
///
/// # Panics
///
/// Panics if the contents differ.
pub fn assert_contents(record: &DayRecord, section: Section, expected: &[&str]) {
    let actual: Vec<&str> = record
        .tasks(section)
        .iter()
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(actual, expected, "{section} tasks mismatch");
}

/// Asserts that every completed task has a completion time and no open one does.
///
/// # Panics
///
/// Panics if a task sits in the wrong section for its completion time.
pub fn assert_sections_consistent(record: &DayRecord) {
    for task in record.tasks(Section::Completed) {
        assert!(task.is_completed(), "completed task without complete_time");
    }
    for task in record.tasks(Section::Uncompleted) {
        assert!(!task.is_completed(), "open task with complete_time");
    }
}

/// Asserts that a file exists at the given path.
///
/// # Panics
///
/// Panics if the file doesn't exist.
pub fn assert_file_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(path.exists(), "File does not exist: {}", path.display());
}

/// Asserts that a file does NOT exist at the given path.
///
/// # Panics
///
/// Panics if the file exists.
pub fn assert_file_not_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(!path.exists(), "File should not exist: {}", path.display());
}
