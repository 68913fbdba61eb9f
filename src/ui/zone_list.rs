// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Zone list panel showing every zone in memory and its coordinates.

use crate::models::store::ZoneStore;

pub fn show(ui: &mut egui::Ui, store: &ZoneStore, selected: Option<&str>) {
    ui.heading("Zones");
    ui.label(
        egui::RichText::new(store.path().display().to_string())
            .small()
            .weak(),
    );
    ui.separator();

    if store.is_empty() {
        ui.label(egui::RichText::new("No zones yet").italics().weak());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("zone_list")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (name, rect) in store.zones() {
                    let mut text = egui::RichText::new(name);
                    if selected == Some(name.as_str()) {
                        text = text.strong().color(egui::Color32::from_rgb(0, 255, 255));
                    }
                    ui.label(text);
                    ui.monospace(rect.to_string());
                    ui.end_row();
                }
            });
    });

    ui.separator();
    ui.label(format!("{} zones in memory", store.len()));
}
