// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and command buttons.
//!
//! Every keyboard command has a button here as well, labelled with its key.

use crate::session::{Command, Mode};

const BUTTONS: [(Command, &str); 6] = [
    (Command::Save, "💾 Save"),
    (Command::Edit, "✏ Edit"),
    (Command::Delete, "🗑 Delete"),
    (Command::Normal, "⬆ Draw"),
    (Command::TogglePause, "⏯ Pause"),
    (Command::Quit, "✖ Quit"),
];

/// Display the toolbar. Returns the command whose button was clicked.
pub fn show(ui: &mut egui::Ui, mode: Mode, paused: bool) -> Option<Command> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for (command, label) in BUTTONS {
            let text = format!("{} [{}]", label, command.key());
            let selected = match command {
                Command::Normal => mode == Mode::Draw,
                Command::Edit => mode == Mode::Edit,
                Command::TogglePause => paused,
                _ => false,
            };
            if ui.selectable_label(selected, text).clicked() {
                clicked = Some(command);
            }
        }

        ui.separator();

        let hint = match mode {
            Mode::Draw => "Drag to draw a zone, then name it",
            Mode::Edit => "Drag to redraw the selected zone",
            Mode::Delete => "Type the name of the zone to delete",
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });

    clicked
}
