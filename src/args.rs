// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line arguments.

use crate::io::stream::DEFAULT_FORMAT;
use clap::Parser;
use std::path::PathBuf;

/// Draw, name and save rectangular zones over a live video feed.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Local camera index.
    #[arg(long, default_value_t = 0, conflicts_with_all = ["url", "image"])]
    pub camera: i32,
    /// Video page URL, resolved to a stream before playback. Loops at the end.
    #[arg(long, conflicts_with = "image")]
    pub url: Option<String>,
    /// Still image to draw zones on.
    #[arg(long)]
    pub image: Option<PathBuf>,
    /// Zone file. `.yaml`/`.yml` paths are written as YAML, anything else as JSON.
    #[arg(long, short, default_value = "zones.json")]
    pub zones: PathBuf,
    /// Format selector passed to the stream resolver.
    #[arg(long, default_value = DEFAULT_FORMAT)]
    pub format: String,
    /// Stream resolver executable.
    #[arg(long, default_value = "yt-dlp")]
    pub resolver: String,
    /// Window title. Defaults to the source title.
    #[arg(long)]
    pub title: Option<String>,
}

/// Where frames come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    Camera(i32),
    Stream(String),
    Image(PathBuf),
}

impl Args {
    pub fn source(&self) -> SourceSpec {
        if let Some(url) = &self.url {
            SourceSpec::Stream(url.clone())
        } else if let Some(path) = &self.image {
            SourceSpec::Image(path.clone())
        } else {
            SourceSpec::Camera(self.camera)
        }
    }
}
