// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for frame sources, stream resolution and zone files.

#[cfg(feature = "video-opencv")]
pub mod capture;
pub mod media;
pub mod serialization;
#[cfg_attr(not(feature = "video-opencv"), allow(dead_code))]
pub mod stream;
