/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Header carrying the shared secret on worker pushes.
pub const SECRET_HEADER: &str = "SECRET";
