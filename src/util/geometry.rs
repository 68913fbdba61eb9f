// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module maps between frame pixel coordinates and screen coordinates
//! when a frame is letterboxed into the canvas.

use crate::models::zone::Point;

/// Placement of a frame on screen: top-left corner and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    /// Screen points per frame pixel.
    pub scale: f32,
}

impl Viewport {
    /// Fit a `frame_width` x `frame_height` frame inside the given area,
    /// preserving aspect ratio and centering it.
    pub fn fit(
        area_left: f32,
        area_top: f32,
        area_width: f32,
        area_height: f32,
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        if frame_width == 0 || frame_height == 0 {
            return Self {
                left: area_left,
                top: area_top,
                scale: 1.0,
            };
        }

        let scale = (area_width / frame_width as f32).min(area_height / frame_height as f32);
        let display_width = frame_width as f32 * scale;
        let display_height = frame_height as f32 * scale;

        Self {
            left: area_left + (area_width - display_width) / 2.0,
            top: area_top + (area_height - display_height) / 2.0,
            scale,
        }
    }

    /// Convert a screen position to the nearest frame pixel. Positions
    /// outside the frame map to out-of-range pixels.
    pub fn to_frame(&self, screen_x: f32, screen_y: f32) -> Point {
        Point::new(
            ((screen_x - self.left) / self.scale).round() as i32,
            ((screen_y - self.top) / self.scale).round() as i32,
        )
    }

    /// Convert a frame pixel to a screen position.
    pub fn to_screen(&self, point: Point) -> (f32, f32) {
        (
            self.left + point.x as f32 * self.scale,
            self.top + point.y as f32 * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_area_centers_horizontally() {
        // 640x480 frame in a 1000x480 area: scale 1, 180px bars on each side.
        let view = Viewport::fit(0.0, 0.0, 1000.0, 480.0, 640, 480);
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.left, 180.0);
        assert_eq!(view.top, 0.0);
    }

    #[test]
    fn test_fit_tall_area_centers_vertically() {
        let view = Viewport::fit(10.0, 20.0, 320.0, 600.0, 640, 480);
        assert_eq!(view.scale, 0.5);
        assert_eq!(view.left, 10.0);
        assert_eq!(view.top, 20.0 + (600.0 - 240.0) / 2.0);
    }

    #[test]
    fn test_screen_frame_roundtrip() {
        let view = Viewport::fit(0.0, 0.0, 1920.0, 1080.0, 1280, 720);
        let point = Point::new(640, 360);
        let (sx, sy) = view.to_screen(point);
        assert_eq!(view.to_frame(sx, sy), point);
    }

    #[test]
    fn test_outside_frame_is_not_clamped() {
        let view = Viewport::fit(0.0, 0.0, 640.0, 480.0, 640, 480);
        assert_eq!(view.to_frame(-10.0, 500.0), Point::new(-10, 500));
    }

    #[test]
    fn test_empty_frame_uses_unit_scale() {
        let view = Viewport::fit(5.0, 5.0, 100.0, 100.0, 0, 0);
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.to_frame(15.0, 25.0), Point::new(10, 20));
    }
}
