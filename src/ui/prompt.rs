// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Modal text prompt for zone names.

use crate::session::{Event, Prompt};

/// Show the prompt window. Returns a submit or cancel event once the user
/// presses Enter/OK or Escape/Cancel.
pub fn show(ctx: &egui::Context, prompt: &Prompt, input: &mut String) -> Option<Event> {
    let title = match prompt {
        Prompt::ZoneName(_) => "New zone",
        Prompt::EditTarget => "Edit zone",
        Prompt::DeleteTarget => "Delete zone",
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(prompt.label());
            if let Prompt::ZoneName(rect) = prompt {
                ui.label(egui::RichText::new(format!("Area: {}", rect)).weak());
            }

            let response = ui.text_edit_singleline(input);
            if !response.has_focus() && !response.lost_focus() {
                response.request_focus();
            }

            let (enter, escape) =
                ui.input(|i| (i.key_pressed(egui::Key::Enter), i.key_pressed(egui::Key::Escape)));

            let mut event = None;
            if escape {
                event = Some(Event::CancelPrompt);
            } else if response.lost_focus() && enter {
                event = Some(Event::SubmitPrompt(input.clone()));
            }

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    event = Some(Event::SubmitPrompt(input.clone()));
                }
                if ui.button("Cancel").clicked() {
                    event = Some(Event::CancelPrompt);
                }
            });

            event
        })
        .and_then(|response| response.inner)
        .flatten()
}
