// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! ZONEMARK - draw named zones of interest over a live video feed.
//!
//! Zones are drawn with the mouse over a camera, a remote stream or a still
//! image, named through a prompt, and saved to a JSON (or YAML) file on
//! request.

mod app;
mod args;
mod io;
mod models;
mod session;
mod ui;
mod util;

use anyhow::Result;
use app::ZoneApp;
use args::{Args, SourceSpec};
use clap::Parser;
use io::media::{EndOfStream, FrameSource, Player, StillImage};
use models::store::ZoneStore;
use session::Session;

const CONTROLS: &str = "
Controls:
- Draw zones -> Name them -> Press 's' to save all -> Press 'q' to quit
- Press 'e' to edit a zone (enter zone name and redraw it)
- Press 'd' to delete a zone (enter zone name to delete)
- Press 'n' to return to normal drawing mode
- Press 'p' to pause/resume video
- All changes (add/edit/delete) are saved ONLY when pressing 's'";

/// Open the requested frame source together with its end-of-stream policy.
fn open_source(args: &Args) -> Result<(Box<dyn FrameSource>, EndOfStream)> {
    match args.source() {
        SourceSpec::Image(path) => Ok((Box::new(StillImage::open(&path)?), EndOfStream::Hold)),
        #[cfg(feature = "video-opencv")]
        SourceSpec::Camera(index) => Ok((
            Box::new(io::capture::VideoSource::camera(index)?),
            EndOfStream::Stop,
        )),
        #[cfg(feature = "video-opencv")]
        SourceSpec::Stream(url) => {
            let resolver = io::stream::Resolver::new(&args.resolver, &args.format);
            let stream = resolver.resolve(&url)?;
            log::info!("Playing: {}", stream.title);
            Ok((
                Box::new(io::capture::VideoSource::url(&stream.url, Some(stream.title))?),
                EndOfStream::Loop,
            ))
        }
        #[cfg(not(feature = "video-opencv"))]
        SourceSpec::Camera(_) | SourceSpec::Stream(_) => {
            anyhow::bail!("Camera and stream input need the `video-opencv` feature; use --image or rebuild with --features video-opencv")
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = ZoneStore::load(&args.zones);
    let (source, on_end) = open_source(&args)?;
    let player = Player::new(source, on_end);

    let title = args
        .title
        .clone()
        .or_else(|| player.title().map(|t| format!("ZONEMARK - {}", t)))
        .unwrap_or_else(|| "ZONEMARK".to_string());

    log::info!("{}", CONTROLS);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(title),
        ..Default::default()
    };

    let session = Session::new(store);
    eframe::run_native(
        "ZONEMARK",
        options,
        Box::new(|_cc| Ok(Box::new(ZoneApp::new(session, player)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
