// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! OpenCV backed frame sources (local cameras and network streams).

use super::media::{Frame, FrameSource};
use anyhow::{bail, Context, Result};
use opencv::{
    core::Mat,
    imgproc,
    prelude::*,
    videoio::{self, VideoCapture},
};

/// A `VideoCapture` opened on a device index or a URL.
pub struct VideoSource {
    cap: VideoCapture,
    title: Option<String>,
    mat: Mat,
}

impl VideoSource {
    /// Open a local camera by index.
    pub fn camera(index: i32) -> Result<Self> {
        log::info!("Opening camera {}", index);
        let cap = VideoCapture::new(index, videoio::CAP_ANY)
            .with_context(|| format!("Failed to open camera {}", index))?;
        Self::from_capture(cap, None)
    }

    /// Open a direct media URL (as produced by stream resolution).
    pub fn url(url: &str, title: Option<String>) -> Result<Self> {
        log::info!("Opening stream {}", url);
        let cap = VideoCapture::from_file(url, videoio::CAP_ANY)
            .context("Failed to open stream")?;
        Self::from_capture(cap, title)
    }

    fn from_capture(cap: VideoCapture, title: Option<String>) -> Result<Self> {
        if !cap.is_opened()? {
            bail!("Video capture is not opened");
        }
        Ok(Self {
            cap,
            title,
            mat: Mat::default(),
        })
    }
}

impl FrameSource for VideoSource {
    fn read(&mut self) -> Result<Option<Frame>> {
        if !self.cap.read(&mut self.mat)? || self.mat.empty() {
            return Ok(None);
        }

        let mut rgb = Mat::default();
        imgproc::cvt_color(&self.mat, &mut rgb, imgproc::COLOR_BGR2RGB, 0)?;
        let size = rgb.size()?;
        let pixels = rgb.data_bytes()?.to_vec();

        Ok(Some(Frame::new(size.width as u32, size.height as u32, pixels)))
    }

    fn rewind(&mut self) -> Result<()> {
        self.cap.set(videoio::CAP_PROP_POS_FRAMES, 0.0)?;
        Ok(())
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
