// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline Input: pointer, wheel, and keyboard glue over the viewport.
//!
//! The core crates expose pure mutation methods; this crate is the thin
//! layer a host event loop calls with already-extracted values (pixel
//! positions, wheel direction signs, key intents). It owns no event
//! dispatch and no window: the host listens for events and forwards them.
//!
//! - [`PointerTracker`] turns press/move/release callbacks into
//!   (previous, current) pixel position pairs while the pointer is held.
//! - [`drag_pan`] converts such a pair into a graph-space pan.
//! - [`zoom_at_pixel`] zooms the view around the pixel under the cursor
//!   from a wheel direction sign.
//! - [`ViewCommand`] and [`apply_command`] cover the keyboard
//!   adjustments: per-axis narrowing/widening and the home reset.
//!
//! ## Usage
//!
//! ```rust
//! use plotline_input::{PointerTracker, drag_pan, zoom_at_pixel};
//! use plotline_vector::Vector2;
//! use plotline_view2d::{GraphView, PixelMap};
//!
//! let mut view = GraphView::new(Vector2::new(-10.0, -10.0), Vector2::new(10.0, 10.0)).unwrap();
//! let map = PixelMap::new(800, 600);
//! let mut pointer = PointerTracker::default();
//!
//! // Host's mousedown handler:
//! pointer.press(Vector2::new(400.0, 300.0));
//! // Host's mousemove handler:
//! if let Some((prev, current)) = pointer.motion(Vector2::new(410.0, 300.0)) {
//!     drag_pan(&mut view, &map, prev, current);
//! }
//! // Host's wheel handler, scrolling up over the center:
//! zoom_at_pixel(&mut view, &map, Vector2::new(400.0, 300.0), -1.0);
//! // Host's mouseup handler:
//! pointer.release();
//! ```

#![no_std]

use plotline_vector::Vector2;
use plotline_view2d::{GraphView, PixelMap};

/// Zoom step applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Per-axis scale step applied per key press; widening uses its inverse.
pub const KEY_SCALE_STEP: f64 = 0.99;

/// Tracks pointer state between press, motion, and release events.
///
/// Positions are in pixel space. Motion is only reported while the
/// pointer is pressed, which is exactly when the plot should pan.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    /// Current pointer position, updated on press and tracked motion.
    pub position: Vector2,
    /// Position before the most recent update.
    pub previous_position: Vector2,
    /// `true` between a press and the matching release.
    pub is_pressed: bool,
}

impl PointerTracker {
    /// Records a press at `pos` and begins reporting motion.
    pub fn press(&mut self, pos: Vector2) {
        self.is_pressed = true;
        self.previous_position = self.position;
        self.position = pos;
    }

    /// Records pointer motion to `pos`.
    ///
    /// Returns the `(previous, current)` position pair while pressed, and
    /// `None` otherwise (hover motion is not the plot's concern).
    pub fn motion(&mut self, pos: Vector2) -> Option<(Vector2, Vector2)> {
        if !self.is_pressed {
            return None;
        }
        self.previous_position = self.position;
        self.position = pos;
        Some((self.previous_position, self.position))
    }

    /// Records the release of the pointer.
    pub fn release(&mut self) {
        self.is_pressed = false;
    }

    /// Returns `true` between a press and the matching release.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }
}

/// Pans `view` so the graph point under the pointer follows the drag.
///
/// `prev_pixel` and `current_pixel` are consecutive pointer positions in
/// pixel space; the view moves by their graph-space difference, in the
/// direction that keeps content glued to the cursor.
pub fn drag_pan(view: &mut GraphView, map: &PixelMap, prev_pixel: Vector2, current_pixel: Vector2) {
    let delta = Vector2::diff(
        map.pixel_to_graph(view, prev_pixel),
        map.pixel_to_graph(view, current_pixel),
    );
    view.pan(delta);
}

/// Derives a zoom factor from a wheel direction sign.
///
/// `direction_sign` follows the wheel-delta convention: positive means
/// scrolling down/away. Scrolling up yields a positive factor (zoom in),
/// scrolling down a negative one (zoom out), one [`WHEEL_ZOOM_STEP`] per
/// notch. A zero or non-finite sign yields `0.0`.
#[must_use]
pub fn wheel_zoom_factor(direction_sign: f64) -> f64 {
    if !direction_sign.is_finite() {
        log::warn!("wheel_zoom_factor: non-finite direction sign {direction_sign}");
        return 0.0;
    }
    -direction_sign.signum() * WHEEL_ZOOM_STEP
}

/// Zooms `view` around the graph point under `anchor_pixel`.
///
/// This is the wheel handler's whole job: map the cursor into graph
/// space, derive the factor from the wheel sign, zoom.
pub fn zoom_at_pixel(
    view: &mut GraphView,
    map: &PixelMap,
    anchor_pixel: Vector2,
    direction_sign: f64,
) {
    let factor = wheel_zoom_factor(direction_sign);
    if factor == 0.0 {
        return;
    }
    let anchor = map.pixel_to_graph(view, anchor_pixel);
    view.zoom(anchor, factor);
}

/// Keyboard-driven view adjustment intents.
///
/// The host maps key codes to these; the core never sees raw keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewCommand {
    /// Narrow the x range toward the origin.
    ScaleNarrowX,
    /// Widen the x range away from the origin.
    ScaleWidenX,
    /// Narrow the y range toward the origin.
    ScaleNarrowY,
    /// Widen the y range away from the origin.
    ScaleWidenY,
    /// Restore the home rectangle.
    ResetView,
}

/// Applies a [`ViewCommand`] to `view`.
///
/// `home` is the rectangle [`ViewCommand::ResetView`] restores, captured
/// by the host at session start. Scale commands apply [`KEY_SCALE_STEP`]
/// (or its inverse) to one axis, anchored at the graph-space origin.
pub fn apply_command(view: &mut GraphView, command: ViewCommand, home: GraphView) {
    let widen = 1.0 / KEY_SCALE_STEP;
    match command {
        ViewCommand::ScaleNarrowX => view.scale(Vector2::new(KEY_SCALE_STEP, 1.0)),
        ViewCommand::ScaleWidenX => view.scale(Vector2::new(widen, 1.0)),
        ViewCommand::ScaleNarrowY => view.scale(Vector2::new(1.0, KEY_SCALE_STEP)),
        ViewCommand::ScaleWidenY => view.scale(Vector2::new(1.0, widen)),
        ViewCommand::ResetView => view.restore(home),
    }
}

#[cfg(test)]
mod tests {
    use plotline_vector::Vector2;
    use plotline_view2d::{GraphView, PixelMap};

    use super::{
        PointerTracker, ViewCommand, apply_command, drag_pan, wheel_zoom_factor, zoom_at_pixel,
    };

    fn view() -> GraphView {
        GraphView::new(Vector2::new(-10.0, -10.0), Vector2::new(10.0, 10.0)).unwrap()
    }

    #[test]
    fn motion_reports_only_while_pressed() {
        let mut pointer = PointerTracker::default();
        assert!(pointer.motion(Vector2::new(5.0, 5.0)).is_none());

        pointer.press(Vector2::new(10.0, 10.0));
        let (prev, current) = pointer.motion(Vector2::new(12.0, 9.0)).unwrap();
        assert_eq!(prev, Vector2::new(10.0, 10.0));
        assert_eq!(current, Vector2::new(12.0, 9.0));

        pointer.release();
        assert!(!pointer.is_pressed());
        assert!(pointer.motion(Vector2::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn drag_keeps_content_under_cursor() {
        let mut v = view();
        let map = PixelMap::new(800, 600);

        // Drag 80px to the right: content follows the cursor, so the
        // visible window moves left by 2 graph units (80px = 2 units).
        drag_pan(&mut v, &map, Vector2::new(400.0, 300.0), Vector2::new(480.0, 300.0));
        assert!((v.min().x - -12.0).abs() < 1e-9);
        assert!((v.max().x - 8.0).abs() < 1e-9);
        assert_eq!(v.min().y, -10.0);
    }

    #[test]
    fn drag_then_reverse_drag_is_identity() {
        let mut v = view();
        let map = PixelMap::new(800, 600);
        let a = Vector2::new(100.0, 100.0);
        let b = Vector2::new(250.0, 420.0);

        drag_pan(&mut v, &map, a, b);
        drag_pan(&mut v, &map, b, a);
        assert!((v.min().x - -10.0).abs() < 1e-9);
        assert!((v.min().y - -10.0).abs() < 1e-9);
        assert!((v.max().x - 10.0).abs() < 1e-9);
        assert!((v.max().y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn wheel_sign_convention() {
        // Scrolling up (negative delta) zooms in.
        assert_eq!(wheel_zoom_factor(-1.0), 0.1);
        assert_eq!(wheel_zoom_factor(1.0), -0.1);
        assert_eq!(wheel_zoom_factor(0.0), 0.0);
        assert_eq!(wheel_zoom_factor(f64::NAN), 0.0);
    }

    #[test]
    fn zoom_at_center_pixel_shrinks_symmetrically() {
        let mut v = view();
        let map = PixelMap::new(800, 600);

        zoom_at_pixel(&mut v, &map, Vector2::new(400.0, 300.0), -1.0);
        assert!((v.min().x - -9.0).abs() < 1e-9);
        assert!((v.max().x - 9.0).abs() < 1e-9);
        assert!((v.min().y - -9.0).abs() < 1e-9);
        assert!((v.max().y - 9.0).abs() < 1e-9);

        // Zero sign is a no-op.
        let before = v;
        zoom_at_pixel(&mut v, &map, Vector2::new(0.0, 0.0), 0.0);
        assert_eq!(v, before);
    }

    #[test]
    fn scale_commands_touch_one_axis() {
        let home = view();
        let mut v = home;

        apply_command(&mut v, ViewCommand::ScaleNarrowX, home);
        assert!((v.min().x - -9.9).abs() < 1e-9);
        assert_eq!(v.min().y, -10.0);

        apply_command(&mut v, ViewCommand::ScaleWidenX, home);
        assert!((v.min().x - -10.0).abs() < 1e-9);

        apply_command(&mut v, ViewCommand::ScaleNarrowY, home);
        assert!((v.max().y - 9.9).abs() < 1e-9);
        assert!((v.max().x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn reset_restores_home() {
        let home = view();
        let mut v = home;
        v.pan(Vector2::new(3.0, -2.0));
        apply_command(&mut v, ViewCommand::ScaleNarrowX, home);

        apply_command(&mut v, ViewCommand::ResetView, home);
        assert_eq!(v, home);
    }
}
