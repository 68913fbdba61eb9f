// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video canvas.
//!
//! Paints the current frame letterboxed into the central panel, outlines
//! every zone from the [`Overlay`] and turns primary-button pointer input
//! into session events in frame pixel coordinates.

use crate::models::zone::{Point, Rect};
use crate::session::{overlay::Overlay, Event};
use crate::util::geometry::Viewport;

const ZONE_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);
const SELECTED_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 255);
const DRAG_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
const TEXT_COLOR: egui::Color32 = egui::Color32::WHITE;

/// Display the canvas and return the pointer events it produced.
pub fn show(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    frame_size: Option<(u32, u32)>,
    overlay: &Overlay,
) -> Vec<Event> {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let (Some(texture), Some((width, height))) = (texture, frame_size) else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Waiting for video...")
                    .size(16.0)
                    .color(egui::Color32::from_gray(200)),
            );
        });
        return Vec::new();
    };

    let available = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(available, egui::Sense::click_and_drag());
    let view = Viewport::fit(
        rect.min.x,
        rect.min.y,
        rect.width(),
        rect.height(),
        width,
        height,
    );
    let image_rect = egui::Rect::from_min_size(
        egui::pos2(view.left, view.top),
        egui::vec2(width as f32 * view.scale, height as f32 * view.scale),
    );

    let painter = ui.painter_at(rect);
    painter.image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    for zone in &overlay.zones {
        let (color, thickness) = if zone.highlighted {
            (SELECTED_COLOR, 3.0)
        } else {
            (ZONE_COLOR, 2.0)
        };
        let screen = screen_rect(&view, &zone.rect);
        painter.rect_stroke(screen, 0.0, egui::Stroke::new(thickness, color));
        painter.text(
            screen.left_top() - egui::vec2(0.0, 5.0),
            egui::Align2::LEFT_BOTTOM,
            &zone.name,
            egui::FontId::proportional(14.0),
            color,
        );
    }

    if let Some(drag) = &overlay.drag {
        painter.rect_stroke(
            screen_rect(&view, drag),
            0.0,
            egui::Stroke::new(2.0, DRAG_COLOR),
        );
    }

    painter.text(
        image_rect.left_top() + egui::vec2(10.0, 10.0),
        egui::Align2::LEFT_TOP,
        &overlay.status,
        egui::FontId::proportional(18.0),
        TEXT_COLOR,
    );

    if let Some(caption) = &overlay.caption {
        painter.text(
            image_rect.left_bottom() + egui::vec2(10.0, -10.0),
            egui::Align2::LEFT_BOTTOM,
            caption,
            egui::FontId::proportional(13.0),
            TEXT_COLOR,
        );
    }

    pointer_events(ui, &response, &view)
}

/// Collect primary-button events for this pass. A press only counts when it
/// lands on the canvas; moves and releases are reported anywhere so a drag
/// can end outside the frame.
fn pointer_events(ui: &egui::Ui, response: &egui::Response, view: &Viewport) -> Vec<Event> {
    let (pressed, released, moving, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.is_moving(),
            i.pointer.interact_pos(),
        )
    });

    let Some(pos) = pos else {
        return Vec::new();
    };
    let point = view.to_frame(pos.x, pos.y);

    let mut events = Vec::new();
    if pressed && response.hovered() {
        events.push(Event::PointerDown(point));
    }
    if moving {
        events.push(Event::PointerMove(point));
    }
    if released {
        events.push(Event::PointerUp(point));
    }
    events
}

fn screen_rect(view: &Viewport, rect: &Rect) -> egui::Rect {
    let to_pos = |p: Point| {
        let (x, y) = view.to_screen(p);
        egui::pos2(x, y)
    };
    egui::Rect::from_min_max(to_pos(rect.top_left()), to_pos(rect.bottom_right()))
}
