// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for service verdicts.

pub mod json;
pub mod text;
