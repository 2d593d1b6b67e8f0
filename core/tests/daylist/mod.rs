// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the `Daylist` application interface.
//!
//! Every test runs against a fresh temporary data directory.

mod files;
mod tasks;
