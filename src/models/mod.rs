// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for zones and the zone store.

pub mod store;
pub mod zone;
