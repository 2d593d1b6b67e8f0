// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Day file format compatibility.

use daylist_core::{Error, Section, Timestamp};

use crate::common::{
    LEGACY_DAY_FILE, assert_contents, assert_sections_consistent, day, setup_temp_data_dir,
    test_daylist,
};

#[tokio::test]
async fn reads_existing_day_file() {
    let dirs = setup_temp_data_dir();
    dirs.write_day_file("2024_01_01", LEGACY_DAY_FILE)
        .await
        .unwrap();
    let daylist = test_daylist(&dirs);

    let record = daylist.show(day("2024_01_01")).await.unwrap();

    assert_eq!(record.title, "Daily List");
    assert_contents(&record, Section::Completed, &["water plants"]);
    assert_contents(&record, Section::Uncompleted, &["buy milk"]);
    assert_sections_consistent(&record);
    assert_eq!(
        record.content.completed[0].complete_time,
        Some("2024/01/01 08:30:00".parse::<Timestamp>().unwrap())
    );
}

#[tokio::test]
async fn rewrites_day_file_in_same_layout() {
    let dirs = setup_temp_data_dir();
    dirs.write_day_file("2024_01_01", LEGACY_DAY_FILE)
        .await
        .unwrap();
    let daylist = test_daylist(&dirs);

    daylist.redo(day("2024_01_01"), 1).await.unwrap();

    let content = std::fs::read_to_string(dirs.day_file("2024_01_01")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["time"], "2024_01_01");
    assert_eq!(json["content"]["completed"], serde_json::json!([]));
    assert_eq!(json["content"]["uncompleted"][1]["content"], "water plants");
    assert_eq!(json["content"]["uncompleted"][1]["complete_time"], "");
    assert!(content.contains("\n  \"content\": {\n    \"completed\": []"));
}

#[tokio::test]
async fn malformed_day_file_is_reported_and_kept() {
    let dirs = setup_temp_data_dir();
    dirs.write_day_file("2024_01_01", "{\"title\": 1}")
        .await
        .unwrap();
    let daylist = test_daylist(&dirs);

    let err = daylist
        .add(day("2024_01_01"), "buy milk", None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Json { .. }));
    let content = std::fs::read_to_string(dirs.day_file("2024_01_01")).unwrap();
    assert_eq!(content, "{\"title\": 1}");
}

#[tokio::test]
async fn day_files_have_no_extension() {
    let dirs = setup_temp_data_dir();
    let daylist = test_daylist(&dirs);

    daylist.create(day("2024_12_31")).await.unwrap();

    assert_eq!(dirs.entries().await.unwrap(), vec!["2024_12_31"]);
}
