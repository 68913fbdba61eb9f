// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! What to draw on top of each frame.

use super::Session;
use crate::models::zone::Rect;

/// Longest title shown in the caption before it is cut off.
const CAPTION_TITLE_CHARS: usize = 50;

/// One stored zone to outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneOutline {
    pub name: String,
    pub rect: Rect,
    /// Set for the zone selected for editing.
    pub highlighted: bool,
}

/// Everything the canvas paints over a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub zones: Vec<ZoneOutline>,
    /// Rectangle of the drag in progress.
    pub drag: Option<Rect>,
    pub status: String,
    pub caption: Option<String>,
}

impl Session {
    /// Derive the overlay for the current state. `title` is the frame
    /// source's title, if any.
    pub fn overlay(&self, title: Option<&str>) -> Overlay {
        let zones = self
            .store
            .zones()
            .iter()
            .map(|(name, rect)| ZoneOutline {
                name: name.clone(),
                rect: *rect,
                highlighted: self.selected.as_deref() == Some(name.as_str()),
            })
            .collect();

        Overlay {
            zones,
            drag: self.drag_rect(),
            status: self.status_line(),
            caption: title.map(caption),
        }
    }

    fn status_line(&self) -> String {
        let mut status = format!("Mode: {}", self.mode.label());
        if let Some(name) = &self.selected {
            status.push_str(&format!(" | Editing: {}", name));
            if self.can_draw() {
                status.push_str(" | DRAW NEW AREA");
            }
        }
        if self.paused {
            status.push_str(" | PAUSED");
        }
        status
    }
}

fn caption(title: &str) -> String {
    let short: String = title.chars().take(CAPTION_TITLE_CHARS).collect();
    format!("Video: {}...", short)
}

#[cfg(test)]
mod tests {
    use crate::models::{store::ZoneStore, zone::Point};
    use crate::session::{Command, Event, Session};

    fn session_with(names: &[&str]) -> Session {
        let mut s = Session::new(ZoneStore::new("zones.json"));
        for (i, name) in names.iter().enumerate() {
            let offset = i as i32 * 10;
            s.handle(Event::PointerDown(Point::new(offset, offset)));
            s.handle(Event::PointerUp(Point::new(offset + 5, offset + 5)));
            s.handle(Event::SubmitPrompt(name.to_string()));
        }
        s
    }

    #[test]
    fn test_default_overlay() {
        let s = session_with(&["b", "a"]);
        let overlay = s.overlay(None);

        let names: Vec<_> = overlay.zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert!(overlay.zones.iter().all(|z| !z.highlighted));
        assert_eq!(overlay.drag, None);
        assert_eq!(overlay.status, "Mode: DRAW");
        assert_eq!(overlay.caption, None);
    }

    #[test]
    fn test_selected_zone_is_highlighted() {
        let mut s = session_with(&["a", "b"]);
        s.handle(Event::Command(Command::Edit));
        s.handle(Event::SubmitPrompt("b".into()));
        s.handle(Event::Command(Command::TogglePause));

        let overlay = s.overlay(None);
        let highlighted: Vec<_> = overlay
            .zones
            .iter()
            .filter(|z| z.highlighted)
            .map(|z| z.name.as_str())
            .collect();
        assert_eq!(highlighted, ["b"]);
        assert_eq!(
            overlay.status,
            "Mode: EDIT | Editing: b | DRAW NEW AREA | PAUSED"
        );
    }

    #[test]
    fn test_status_while_prompting_delete() {
        let mut s = session_with(&[]);
        s.handle(Event::Command(Command::Delete));
        assert_eq!(s.overlay(None).status, "Mode: DELETE");
    }

    #[test]
    fn test_no_draw_hint_while_prompt_blocks_drawing() {
        let mut s = session_with(&["x"]);
        s.handle(Event::Command(Command::Edit));
        s.handle(Event::SubmitPrompt("x".into()));
        assert_eq!(s.overlay(None).status, "Mode: EDIT | Editing: x | DRAW NEW AREA");

        s.handle(Event::Command(Command::Delete));
        assert_eq!(s.overlay(None).status, "Mode: DELETE | Editing: x");
    }

    #[test]
    fn test_drag_in_progress_is_drawn() {
        let mut s = session_with(&[]);
        s.handle(Event::PointerDown(Point::new(30, 30)));
        s.handle(Event::PointerMove(Point::new(10, 40)));

        let drag = s.overlay(None).drag.unwrap();
        assert_eq!(drag.to_array(), [10, 30, 30, 40]);
    }

    #[test]
    fn test_caption_truncates_title() {
        let s = session_with(&[]);
        let long = "x".repeat(80);
        let caption = s.overlay(Some(&long)).caption.unwrap();
        assert_eq!(caption, format!("Video: {}...", "x".repeat(50)));

        let short = s.overlay(Some("Harbor cam")).caption.unwrap();
        assert_eq!(short, "Video: Harbor cam...");
    }
}
