// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use plotline_vector::Vector2;

use crate::pixel_map::PixelSize;

/// Error produced when constructing or resetting a [`GraphView`] with a
/// degenerate or inverted rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewError {
    /// Requested minimum corner.
    pub min: Vector2,
    /// Requested maximum corner.
    pub max: Vector2,
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "degenerate view rectangle: min {:?} must be strictly below max {:?} on both axes",
            self.min, self.max
        )
    }
}

impl core::error::Error for ViewError {}

/// The visible rectangular window into graph space.
///
/// `GraphView` tracks the `min`/`max` corners of the rectangle that the
/// plot surface currently shows. All mutation operations preserve the
/// invariant `min.x < max.x && min.y < max.y`; a transform that would
/// violate it is logged and dropped.
///
/// The view is typically created once at startup and mutated in place by
/// input-driven operations for the lifetime of the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphView {
    min: Vector2,
    max: Vector2,
}

impl GraphView {
    /// Creates a view over the given graph-space rectangle.
    ///
    /// Fails if the rectangle is degenerate or inverted on either axis.
    pub fn new(min: Vector2, max: Vector2) -> Result<Self, ViewError> {
        if !rect_is_valid(min, max) {
            return Err(ViewError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the minimum (bottom-left in graph space) corner.
    #[must_use]
    pub fn min(&self) -> Vector2 {
        self.min
    }

    /// Returns the maximum (top-right in graph space) corner.
    #[must_use]
    pub fn max(&self) -> Vector2 {
        self.max
    }

    /// Returns the width of the visible rectangle in graph units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the height of the visible rectangle in graph units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the center of the visible rectangle.
    #[must_use]
    pub fn center(&self) -> Vector2 {
        Vector2::lerp(self.min, self.max, 0.5)
    }

    /// Returns `true` if `v` lies inside the visible rectangle, bounds
    /// included.
    #[must_use]
    pub fn contains(&self, v: Vector2) -> bool {
        v.x >= self.min.x && v.x <= self.max.x && v.y >= self.min.y && v.y <= self.max.y
    }

    /// Translates the view by `delta` in graph units without changing its
    /// size.
    pub fn pan(&mut self, delta: Vector2) {
        self.min.add(delta);
        self.max.add(delta);
    }

    /// Zooms the view around `anchor`, a point in graph space.
    ///
    /// Both corners move toward the anchor proportionally to `factor`:
    /// positive values zoom in, negative values zoom out, and `0.0` leaves
    /// the view unchanged. A factor that would collapse or invert the
    /// rectangle (for example `1.0`, which would pull both corners onto
    /// the anchor) is logged and dropped.
    pub fn zoom(&mut self, anchor: Vector2, factor: f64) {
        if !factor.is_finite() {
            log::warn!("GraphView::zoom: skipped non-finite factor {factor}");
            return;
        }
        let new_min = Vector2::sum(self.min, Vector2::diff(anchor, self.min).scaled(factor));
        let new_max = Vector2::sum(self.max, Vector2::diff(anchor, self.max).scaled(factor));
        if !rect_is_valid(new_min, new_max) {
            log::warn!("GraphView::zoom: factor {factor} would collapse the view; skipped");
            return;
        }
        self.min = new_min;
        self.max = new_max;
    }

    /// Scales each axis of the view independently, anchored at the
    /// graph-space origin.
    ///
    /// `factor.x` multiplies both `min.x` and `max.x`; likewise for y.
    /// This is the keyboard-driven fine adjustment: a factor of
    /// `(0.99, 1.0)` narrows the x range slightly toward 0. Zero or
    /// negative components would collapse or mirror the view and are
    /// logged and dropped.
    pub fn scale(&mut self, factor: Vector2) {
        let new_min = Vector2::new(self.min.x * factor.x, self.min.y * factor.y);
        let new_max = Vector2::new(self.max.x * factor.x, self.max.y * factor.y);
        if !rect_is_valid(new_min, new_max) {
            log::warn!("GraphView::scale: factor {factor:?} would collapse the view; skipped");
            return;
        }
        self.min = new_min;
        self.max = new_max;
    }

    /// Unconditionally replaces the view rectangle (the "home" command).
    ///
    /// Fails without modifying the view if the new rectangle is
    /// degenerate or inverted.
    pub fn reset(&mut self, min: Vector2, max: Vector2) -> Result<(), ViewError> {
        if !rect_is_valid(min, max) {
            return Err(ViewError { min, max });
        }
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Copies the rectangle of `other` into this view.
    ///
    /// Infallible counterpart of [`GraphView::reset`] for restoring a
    /// previously captured view (the "home" rectangle): `other` already
    /// upholds the invariant.
    pub fn restore(&mut self, other: Self) {
        *self = other;
    }

    /// Rescales the x range so plotted content keeps its apparent aspect
    /// across a surface resize.
    ///
    /// `min.x` and `max.x` are multiplied by
    /// `(new.width · old.height) / (old.width · new.height)`. The caller
    /// updates its [`crate::PixelMap`] afterwards; the view itself stores
    /// no pixel state. Sizes with a zero dimension are logged and
    /// skipped.
    pub fn remap_aspect(&mut self, old_size: PixelSize, new_size: PixelSize) {
        let denominator = f64::from(old_size.width) * f64::from(new_size.height);
        if denominator == 0.0 || old_size.height == 0 || new_size.width == 0 {
            log::warn!(
                "GraphView::remap_aspect: zero-sized surface {old_size:?} -> {new_size:?}; skipped"
            );
            return;
        }
        let ratio = f64::from(new_size.width) * f64::from(old_size.height) / denominator;
        self.min.x *= ratio;
        self.max.x *= ratio;
    }
}

fn rect_is_valid(min: Vector2, max: Vector2) -> bool {
    min.is_finite() && max.is_finite() && min.x < max.x && min.y < max.y
}

#[cfg(test)]
mod tests {
    use plotline_vector::Vector2;

    use super::GraphView;
    use crate::pixel_map::PixelSize;

    fn view(min: (f64, f64), max: (f64, f64)) -> GraphView {
        GraphView::new(min.into(), max.into()).unwrap()
    }

    #[test]
    fn new_rejects_degenerate_rectangles() {
        assert!(GraphView::new(Vector2::ZERO, Vector2::ZERO).is_err());
        assert!(GraphView::new(Vector2::new(1.0, -1.0), Vector2::new(1.0, 1.0)).is_err());
        assert!(GraphView::new(Vector2::new(2.0, 0.0), Vector2::new(-2.0, 1.0)).is_err());
        assert!(GraphView::new(Vector2::new(-1.0, -1.0), Vector2::new(1.0, 1.0)).is_ok());
    }

    #[test]
    fn pan_then_inverse_pan_restores_corners() {
        let mut v = view((-20.0, -10.0), (20.0, 10.0));
        let original = v;

        let delta = Vector2::new(3.25, -7.5);
        v.pan(delta);
        assert_eq!(v.min(), Vector2::new(-16.75, -17.5));
        v.pan(-delta);

        assert!((v.min().x - original.min().x).abs() < 1e-12);
        assert!((v.min().y - original.min().y).abs() < 1e-12);
        assert!((v.max().x - original.max().x).abs() < 1e-12);
        assert!((v.max().y - original.max().y).abs() < 1e-12);
    }

    #[test]
    fn zoom_with_zero_factor_is_identity() {
        let mut v = view((-8.0, -8.0), (8.0, 8.0));
        let original = v;

        for anchor in [
            Vector2::ZERO,
            Vector2::new(5.0, -3.0),
            Vector2::new(-100.0, 42.0),
        ] {
            v.zoom(anchor, 0.0);
            assert_eq!(v, original);
        }
    }

    #[test]
    fn zoom_moves_corners_toward_anchor() {
        let mut v = view((-10.0, -10.0), (10.0, 10.0));
        v.zoom(Vector2::ZERO, 0.1);

        assert!((v.min().x - -9.0).abs() < 1e-12);
        assert!((v.max().x - 9.0).abs() < 1e-12);
        assert!((v.min().y - -9.0).abs() < 1e-12);
        assert!((v.max().y - 9.0).abs() < 1e-12);

        // Negative factor zooms back out.
        v.zoom(Vector2::ZERO, -0.1);
        assert!((v.max().x - 9.9).abs() < 1e-12);
    }

    #[test]
    fn zoom_anchor_keeps_relative_position() {
        let mut v = view((-10.0, -10.0), (10.0, 10.0));
        let anchor = Vector2::new(4.0, -2.0);

        // The anchor's relative position inside the rect is unchanged by a zoom.
        let before = (anchor.x - v.min().x) / v.width();
        v.zoom(anchor, 0.25);
        let after = (anchor.x - v.min().x) / v.width();
        assert!((before - after).abs() < 1e-12);
    }

    #[test]
    fn zoom_rejects_collapsing_factor() {
        let mut v = view((-10.0, -10.0), (10.0, 10.0));
        let original = v;

        // Factor 1.0 would pull both corners onto the anchor.
        v.zoom(Vector2::ZERO, 1.0);
        assert_eq!(v, original);

        // A factor past 1.0 would invert the rectangle.
        v.zoom(Vector2::ZERO, 1.5);
        assert_eq!(v, original);

        v.zoom(Vector2::new(3.0, 3.0), f64::NAN);
        assert_eq!(v, original);
    }

    #[test]
    fn scale_shrinks_monotonically_without_crossing_zero() {
        let mut v = view((-10.0, -10.0), (10.0, 10.0));
        let factor = Vector2::new(0.99, 1.0);

        let mut prev_width = v.width();
        for _ in 0..1000 {
            v.scale(factor);
            assert!(v.min().x < 0.0, "min.x crossed zero");
            assert!(v.max().x > 0.0, "max.x crossed zero");
            assert!(v.width() < prev_width, "width must shrink monotonically");
            prev_width = v.width();
        }
        // The y axis is untouched.
        assert_eq!(v.min().y, -10.0);
        assert_eq!(v.max().y, 10.0);
    }

    #[test]
    fn scale_rejects_collapsing_factor() {
        let mut v = view((-10.0, -10.0), (10.0, 10.0));
        let original = v;

        v.scale(Vector2::new(0.0, 1.0));
        assert_eq!(v, original);
        v.scale(Vector2::new(-1.0, 1.0));
        assert_eq!(v, original);
    }

    #[test]
    fn reset_overwrites_or_fails() {
        let mut v = view((-10.0, -10.0), (10.0, 10.0));

        v.reset(Vector2::new(-1.0, -2.0), Vector2::new(3.0, 4.0))
            .unwrap();
        assert_eq!(v.min(), Vector2::new(-1.0, -2.0));
        assert_eq!(v.max(), Vector2::new(3.0, 4.0));

        let err = v.reset(Vector2::new(5.0, 0.0), Vector2::new(-5.0, 1.0));
        assert!(err.is_err());
        assert_eq!(v.min(), Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn remap_aspect_rescales_x_only() {
        let mut v = view((-20.0, -10.0), (20.0, 10.0));

        // Doubling the width at constant height doubles the x range.
        v.remap_aspect(PixelSize::new(400, 300), PixelSize::new(800, 300));
        assert!((v.min().x - -40.0).abs() < 1e-12);
        assert!((v.max().x - 40.0).abs() < 1e-12);
        assert_eq!(v.min().y, -10.0);
        assert_eq!(v.max().y, 10.0);

        // A zero-sized surface is skipped.
        v.remap_aspect(PixelSize::new(0, 300), PixelSize::new(800, 300));
        assert!((v.max().x - 40.0).abs() < 1e-12);
    }

    #[test]
    fn contains_is_inclusive() {
        let v = view((-1.0, -1.0), (1.0, 1.0));
        assert!(v.contains(Vector2::ZERO));
        assert!(v.contains(Vector2::new(1.0, -1.0)));
        assert!(!v.contains(Vector2::new(1.0 + 1e-9, 0.0)));
    }

    #[test]
    fn center_and_dimensions() {
        let v = view((-8.0, -2.0), (4.0, 6.0));
        assert_eq!(v.width(), 12.0);
        assert_eq!(v.height(), 8.0);
        assert_eq!(v.center(), Vector2::new(-2.0, 2.0));
    }
}
