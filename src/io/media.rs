// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame sources and playback.
//!
//! Every video input (camera, remote stream, still image) implements
//! [`FrameSource`]. The [`Player`] wraps a source and adds the behavior the
//! annotation loop needs on top of it: pause/resume and a per-source policy
//! for what happens when the stream runs out.

use anyhow::{Context, Result};
use std::path::Path;

/// A decoded RGB frame, 3 bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// True when the pixel buffer holds exactly `width * height` RGB pixels.
    pub fn is_complete(&self) -> bool {
        self.pixels.len() == self.width as usize * self.height as usize * 3
    }
}

/// Anything that can hand out frames one at a time.
pub trait FrameSource {
    /// Read the next frame. `Ok(None)` means the source has no more frames.
    fn read(&mut self) -> Result<Option<Frame>>;

    /// Seek back to the first frame.
    fn rewind(&mut self) -> Result<()>;

    /// Human readable title of the source, if it has one.
    fn title(&self) -> Option<&str> {
        None
    }
}

/// What the player does once its source stops producing frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfStream {
    /// Finish playback. Used for local cameras, where a failed read means
    /// the device is gone.
    Stop,
    /// Rewind the source and keep playing.
    Loop,
    /// Keep showing the last frame forever.
    Hold,
}

/// Result of a single [`Player::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A new frame replaced the current one.
    NewFrame,
    /// The current frame stays on screen.
    Unchanged,
    /// Playback is over.
    Finished,
}

/// Drives a [`FrameSource`] once per repaint.
pub struct Player {
    source: Box<dyn FrameSource>,
    on_end: EndOfStream,
    paused: bool,
    finished: bool,
    current: Option<Frame>,
}

impl Player {
    pub fn new(source: Box<dyn FrameSource>, on_end: EndOfStream) -> Self {
        Self {
            source,
            on_end,
            paused: false,
            finished: false,
            current: None,
        }
    }

    /// Fetch the next frame unless paused.
    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Finished;
        }
        if self.paused {
            return Tick::Unchanged;
        }

        match self.source.read() {
            Ok(Some(frame)) => {
                self.current = Some(frame);
                return Tick::NewFrame;
            }
            Ok(None) => log::debug!("End of stream"),
            Err(e) => log::warn!("Failed to read frame: {:#}", e),
        }

        match self.on_end {
            EndOfStream::Stop => {
                log::info!("Frame source ended, stopping playback");
                self.finished = true;
                Tick::Finished
            }
            EndOfStream::Loop => {
                if let Err(e) = self.source.rewind() {
                    log::error!("Failed to rewind frame source: {:#}", e);
                    self.finished = true;
                    return Tick::Finished;
                }
                Tick::Unchanged
            }
            EndOfStream::Hold => Tick::Unchanged,
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The frame currently on screen.
    pub fn frame(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.source.title()
    }
}

/// A single image shown as a one-frame stream.
pub struct StillImage {
    frame: Frame,
    title: String,
    delivered: bool,
}

impl StillImage {
    /// Decode an image file into an RGB frame.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("Failed to open image {}", path.display()))?
            .to_rgb8();
        let (width, height) = img.dimensions();
        log::info!("Loaded image: {} ({}x{})", path.display(), width, height);

        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::from_frame(Frame::new(width, height, img.into_raw()), title))
    }

    pub fn from_frame(frame: Frame, title: impl Into<String>) -> Self {
        Self {
            frame,
            title: title.into(),
            delivered: false,
        }
    }
}

impl FrameSource for StillImage {
    fn read(&mut self) -> Result<Option<Frame>> {
        if self.delivered {
            return Ok(None);
        }
        self.delivered = true;
        Ok(Some(self.frame.clone()))
    }

    fn rewind(&mut self) -> Result<()> {
        self.delivered = false;
        Ok(())
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Plays back a fixed list of reads; `None` entries are end-of-stream.
    struct Scripted {
        reads: VecDeque<Option<Frame>>,
        rewinds: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl FrameSource for Scripted {
        fn read(&mut self) -> Result<Option<Frame>> {
            Ok(self.reads.pop_front().flatten())
        }

        fn rewind(&mut self) -> Result<()> {
            self.rewinds.set(self.rewinds.get() + 1);
            Ok(())
        }
    }

    fn frame(shade: u8) -> Frame {
        Frame::new(2, 1, vec![shade; 6])
    }

    fn scripted(reads: Vec<Option<Frame>>) -> (Box<dyn FrameSource>, std::rc::Rc<std::cell::Cell<usize>>) {
        let rewinds = std::rc::Rc::new(std::cell::Cell::new(0));
        let source = Scripted {
            reads: reads.into(),
            rewinds: rewinds.clone(),
        };
        (Box::new(source), rewinds)
    }

    #[test]
    fn test_stop_policy_finishes_on_end() {
        let (source, rewinds) = scripted(vec![Some(frame(1)), None, Some(frame(2))]);
        let mut player = Player::new(source, EndOfStream::Stop);

        assert_eq!(player.tick(), Tick::NewFrame);
        assert_eq!(player.tick(), Tick::Finished);
        assert_eq!(player.tick(), Tick::Finished);
        assert_eq!(player.frame(), Some(&frame(1)));
        assert_eq!(rewinds.get(), 0);
    }

    #[test]
    fn test_loop_policy_rewinds_and_keeps_last_frame() {
        let (source, rewinds) = scripted(vec![Some(frame(1)), None, Some(frame(2))]);
        let mut player = Player::new(source, EndOfStream::Loop);

        assert_eq!(player.tick(), Tick::NewFrame);
        assert_eq!(player.tick(), Tick::Unchanged);
        assert_eq!(rewinds.get(), 1);
        assert_eq!(player.frame(), Some(&frame(1)));
        assert_eq!(player.tick(), Tick::NewFrame);
        assert_eq!(player.frame(), Some(&frame(2)));
    }

    #[test]
    fn test_pause_freezes_frame() {
        let (source, _) = scripted(vec![Some(frame(1)), Some(frame(2)), Some(frame(3))]);
        let mut player = Player::new(source, EndOfStream::Loop);

        player.tick();
        player.set_paused(true);
        assert_eq!(player.tick(), Tick::Unchanged);
        assert_eq!(player.tick(), Tick::Unchanged);
        assert_eq!(player.frame(), Some(&frame(1)));

        player.set_paused(false);
        assert_eq!(player.tick(), Tick::NewFrame);
        assert_eq!(player.frame(), Some(&frame(2)));
    }

    #[test]
    fn test_still_image_holds_single_frame() {
        let source = StillImage::from_frame(frame(9), "snapshot.png");
        let mut player = Player::new(Box::new(source), EndOfStream::Hold);

        assert_eq!(player.title(), Some("snapshot.png"));
        assert_eq!(player.tick(), Tick::NewFrame);
        for _ in 0..3 {
            assert_eq!(player.tick(), Tick::Unchanged);
        }
        assert_eq!(player.frame(), Some(&frame(9)));
    }

    #[test]
    fn test_still_image_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.png");
        image::RgbImage::from_pixel(4, 3, image::Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let mut source = StillImage::open(&path).unwrap();
        let frame = source.read().unwrap().unwrap();
        assert_eq!((frame.width, frame.height), (4, 3));
        assert!(frame.is_complete());
        assert_eq!(&frame.pixels[..3], &[10, 20, 30]);
        assert!(source.read().unwrap().is_none());
        source.rewind().unwrap();
        assert!(source.read().unwrap().is_some());
    }
}
