// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the zone editor.

pub mod canvas;
pub mod prompt;
pub mod toolbar;
pub mod zone_list;
