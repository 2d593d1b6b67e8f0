// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Task operations: add, modify, complete, redo, remove.

use daylist_core::{DayKey, Daylist, Error, Section};

use crate::common::{
    TempDataDir, assert_contents, assert_sections_consistent, day, setup_temp_data_dir,
    test_daylist,
};

async fn with_day(tasks: &[&str]) -> (TempDataDir, Daylist, DayKey) {
    let dirs = setup_temp_data_dir();
    let daylist = test_daylist(&dirs);
    let d = day("2024_01_01");
    daylist.create(d).await.unwrap();
    for t in tasks {
        daylist.add(d, t, None).await.unwrap();
    }
    (dirs, daylist, d)
}

#[tokio::test]
async fn add_keeps_insertion_order() {
    let (_dirs, daylist, d) = with_day(&["one", "two", "three"]).await;

    let record = daylist.show(d).await.unwrap();

    assert_contents(&record, Section::Uncompleted, &["one", "two", "three"]);
    assert_contents(&record, Section::Completed, &[]);
}

#[tokio::test]
async fn add_returns_fresh_open_task() {
    let (_dirs, daylist, d) = with_day(&[]).await;

    let task = daylist.add(d, "buy milk", None).await.unwrap();

    assert_eq!(task.content, "buy milk");
    assert_eq!(task.create_time, task.last_modify_time);
    assert_eq!(task.complete_time, None);
}

#[tokio::test]
async fn add_with_priority_then_complete() {
    let (_dirs, daylist, d) = with_day(&[]).await;

    daylist.add(d, "buy milk", None).await.unwrap();
    daylist.add(d, "call mom", Some(1)).await.unwrap();
    let record = daylist.show(d).await.unwrap();
    assert_contents(&record, Section::Uncompleted, &["call mom", "buy milk"]);

    daylist.complete(d, 1).await.unwrap();
    let record = daylist.show(d).await.unwrap();
    assert_contents(&record, Section::Completed, &["call mom"]);
    assert_contents(&record, Section::Uncompleted, &["buy milk"]);
    assert_sections_consistent(&record);
}

#[tokio::test]
async fn add_rejects_blank_content() {
    let (_dirs, daylist, d) = with_day(&["a"]).await;

    assert!(matches!(
        daylist.add(d, " \t", None).await,
        Err(Error::EmptyContent)
    ));
    assert_contents(&daylist.show(d).await.unwrap(), Section::Uncompleted, &["a"]);
}

#[tokio::test]
async fn modify_rewrites_content_only_of_target() {
    let (_dirs, daylist, d) = with_day(&["a", "b"]).await;

    let task = daylist.modify(d, 2, "c").await.unwrap();

    assert_eq!(task.content, "c");
    let record = daylist.show(d).await.unwrap();
    assert_contents(&record, Section::Uncompleted, &["a", "c"]);
}

#[tokio::test]
async fn modify_with_blank_content_leaves_state_unchanged() {
    let (dirs, daylist, d) = with_day(&["a"]).await;
    let before = std::fs::read_to_string(dirs.day_file("2024_01_01")).unwrap();

    let err = daylist.modify(d, 1, "   ").await.unwrap_err();

    assert!(matches!(err, Error::EmptyContent));
    let after = std::fs::read_to_string(dirs.day_file("2024_01_01")).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn modify_out_of_range_is_invalid_index() {
    let (_dirs, daylist, d) = with_day(&["a"]).await;

    assert!(matches!(
        daylist.modify(d, 2, "b").await,
        Err(Error::InvalidIndex {
            section: Section::Uncompleted,
            index: 2,
            len: 1
        })
    ));
}

#[tokio::test]
async fn complete_then_redo_restores_task() {
    let (_dirs, daylist, d) = with_day(&["a", "b", "c"]).await;

    let completed = daylist.complete(d, 2).await.unwrap();
    assert_eq!(completed.content, "b");
    assert!(completed.complete_time.is_some());

    let reopened = daylist.redo(d, 1).await.unwrap();
    assert_eq!(reopened.content, "b");
    assert_eq!(reopened.complete_time, None);
    assert_eq!(reopened.create_time, completed.create_time);

    let record = daylist.show(d).await.unwrap();
    assert_contents(&record, Section::Uncompleted, &["a", "c", "b"]);
    assert_contents(&record, Section::Completed, &[]);
    assert_sections_consistent(&record);
}

#[tokio::test]
async fn zero_index_is_rejected_everywhere() {
    let (_dirs, daylist, d) = with_day(&["a"]).await;
    daylist.complete(d, 1).await.unwrap();
    daylist.add(d, "b", None).await.unwrap();

    assert!(matches!(
        daylist.modify(d, 0, "x").await,
        Err(Error::InvalidIndex { index: 0, .. })
    ));
    assert!(matches!(
        daylist.complete(d, 0).await,
        Err(Error::InvalidIndex { index: 0, .. })
    ));
    assert!(matches!(
        daylist.redo(d, 0).await,
        Err(Error::InvalidIndex { index: 0, .. })
    ));
    assert!(matches!(
        daylist.remove(d, 0, Section::Completed).await,
        Err(Error::InvalidIndex { index: 0, .. })
    ));
    assert!(matches!(
        daylist.add(d, "c", Some(0)).await,
        Err(Error::InvalidIndex { index: 0, .. })
    ));

    let record = daylist.show(d).await.unwrap();
    assert_contents(&record, Section::Uncompleted, &["b"]);
    assert_contents(&record, Section::Completed, &["a"]);
}

#[tokio::test]
async fn remove_shrinks_only_target_section() {
    let (_dirs, daylist, d) = with_day(&["a", "b", "c", "d"]).await;
    daylist.complete(d, 4).await.unwrap();
    daylist.complete(d, 1).await.unwrap();

    let removed = daylist.remove(d, 2, Section::Uncompleted).await.unwrap();
    assert_eq!(removed.content, "c");
    let record = daylist.show(d).await.unwrap();
    assert_contents(&record, Section::Uncompleted, &["b"]);
    assert_contents(&record, Section::Completed, &["d", "a"]);

    let removed = daylist.remove(d, 1, Section::Completed).await.unwrap();
    assert_eq!(removed.content, "d");
    let record = daylist.show(d).await.unwrap();
    assert_contents(&record, Section::Uncompleted, &["b"]);
    assert_contents(&record, Section::Completed, &["a"]);
}

#[tokio::test]
async fn remove_out_of_range_is_invalid_index() {
    let (_dirs, daylist, d) = with_day(&["a"]).await;

    assert!(matches!(
        daylist.remove(d, 1, Section::Completed).await,
        Err(Error::InvalidIndex {
            section: Section::Completed,
            len: 0,
            ..
        })
    ));
    assert_contents(&daylist.show(d).await.unwrap(), Section::Uncompleted, &["a"]);
}
