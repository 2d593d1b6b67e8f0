// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Temporary data directories with auto-cleanup

mod assertions;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{
    assert_contents, assert_file_exists, assert_file_not_exists, assert_sections_consistent,
};
#[allow(unused_imports)]
pub use fixtures::{LEGACY_DAY_FILE, day, test_config, test_daylist};
pub use temp_dir::{TempDataDir, setup_temp_data_dir};
