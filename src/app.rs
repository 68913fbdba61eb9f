// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! Each repaint runs one pass of the annotation loop: advance the player,
//! feed the pass's keyboard, toolbar, prompt and pointer input to the
//! session, then paint the frame with the session's overlay.

use crate::io::media::{Player, Tick};
use crate::session::{Command, Event, Notice, Session};
use crate::ui::{canvas, prompt, toolbar, zone_list};

/// Main application state.
pub struct ZoneApp {
    session: Session,
    player: Player,

    /// Texture holding the current frame
    texture: Option<egui::TextureHandle>,

    /// Frame dimensions (width, height)
    frame_size: Option<(u32, u32)>,

    /// Text typed into the open prompt
    prompt_input: String,

    /// Most recent notice, shown in the status bar
    last_notice: Option<Notice>,
}

/// Sync the pause state into the player and fetch the next frame.
fn advance(player: &mut Player, session: &Session) -> Tick {
    player.set_paused(session.is_paused());
    player.tick()
}

impl ZoneApp {
    pub fn new(session: Session, player: Player) -> Self {
        Self {
            session,
            player,
            texture: None,
            frame_size: None,
            prompt_input: String::new(),
            last_notice: None,
        }
    }

    /// Hand one event to the session and close the window on quit.
    fn dispatch(&mut self, ctx: &egui::Context, event: Event) {
        if let Some(notice) = self.session.handle(event) {
            self.last_notice = Some(notice);
        }
        if self.session.should_quit() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Upload the player's current frame to the GPU.
    fn upload_frame(&mut self, ctx: &egui::Context) {
        let Some(frame) = self.player.frame() else {
            return;
        };
        if !frame.is_complete() {
            log::warn!(
                "Dropping frame with {} bytes for {}x{}",
                frame.pixels.len(),
                frame.width,
                frame.height
            );
            return;
        }

        let image = egui::ColorImage::from_rgb(
            [frame.width as usize, frame.height as usize],
            &frame.pixels,
        );
        match self.texture.as_mut() {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("frame", image, egui::TextureOptions::LINEAR))
            }
        }
        self.frame_size = Some((frame.width, frame.height));
    }

    /// Key commands typed this pass, unless a text field owns the keyboard.
    fn key_commands(ctx: &egui::Context) -> Vec<Command> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }
        ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Text(text) => Some(text.chars().filter_map(Command::from_key)),
                    _ => None,
                })
                .flatten()
                .collect()
        })
    }
}

impl eframe::App for ZoneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match advance(&mut self.player, &self.session) {
            Tick::NewFrame => self.upload_frame(ctx),
            Tick::Unchanged => {}
            Tick::Finished => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }

        // A prompt opened by this pass's keys is shown from the next pass on,
        // so the key that opened it is not typed into it.
        let prompt_was_open = self.session.prompt().is_some();

        for command in Self::key_commands(ctx) {
            self.dispatch(ctx, Event::Command(command));
        }

        let toolbar_command = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(ui, self.session.mode(), self.session.is_paused())
            })
            .inner;
        if let Some(command) = toolbar_command {
            self.dispatch(ctx, Event::Command(command));
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.last_notice {
                    Some(notice) => ui.label(notice.to_string()),
                    None => ui.label("Ready"),
                };
                if self.player.is_paused() {
                    ui.separator();
                    ui.label("Paused");
                }
            });
        });

        egui::SidePanel::right("zones")
            .default_width(250.0)
            .show(ctx, |ui| {
                zone_list::show(ui, self.session.store(), self.session.selected())
            });

        if prompt_was_open {
            if let Some(open) = self.session.prompt().cloned() {
                if let Some(event) = prompt::show(ctx, &open, &mut self.prompt_input) {
                    self.prompt_input.clear();
                    self.dispatch(ctx, event);
                }
            }
        }

        let overlay = self.session.overlay(self.player.title());
        let pointer_events = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(ui, self.texture.as_ref(), self.frame_size, &overlay)
            })
            .inner;
        for event in pointer_events {
            self.dispatch(ctx, event);
        }

        ctx.request_repaint();
    }
}
