// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use plotline_vector::Vector2;

use crate::graph_view::GraphView;

/// Drawable surface size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSize {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
}

impl PixelSize {
    /// Creates a size value.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Maps a value from one range onto another.
///
/// This is the affine primitive behind both mapping directions of
/// [`PixelMap`]: `out_min + (x − in_min) / (in_max − in_min) · (out_max −
/// out_min)`. When `clamp` is set the result is constrained to the output
/// range (in either order). A degenerate input domain (`in_min ==
/// in_max`) is a warning-class condition: it is logged and `out_min` is
/// returned.
#[must_use]
pub fn map_range(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64, clamp: bool) -> f64 {
    if in_min == in_max {
        log::warn!("map_range: degenerate input domain at {in_min}");
        return out_min;
    }
    let y = out_min + (x - in_min) / (in_max - in_min) * (out_max - out_min);
    if clamp {
        if out_min <= out_max {
            y.clamp(out_min, out_max)
        } else {
            y.clamp(out_max, out_min)
        }
    } else {
        y
    }
}

/// Bidirectional affine mapping between graph space and pixel space.
///
/// `PixelMap` owns only the surface size; the graph-space rectangle is
/// read from the [`GraphView`] passed to each conversion, so a single map
/// can serve any number of views. Pixel space has its origin at the top
/// left with y growing downward, so the y axis is inverted in both
/// directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelMap {
    size: PixelSize,
}

impl PixelMap {
    /// Creates a map for a surface of the given pixel dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            size: PixelSize::new(width, height),
        }
    }

    /// Returns the current surface size.
    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Returns the surface width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Returns the surface height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Updates the stored surface size after a resize event.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.size = PixelSize::new(width, height);
    }

    /// Returns the full surface rectangle in pixel coordinates.
    #[must_use]
    pub fn pixel_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.size.width),
            f64::from(self.size.height),
        )
    }

    /// Converts a graph-space point into pixel coordinates.
    #[must_use]
    pub fn graph_to_pixel(&self, view: &GraphView, v: Vector2) -> Vector2 {
        let (min, max) = (view.min(), view.max());
        Vector2::new(
            map_range(v.x, min.x, max.x, 0.0, f64::from(self.size.width), false),
            // Graph y grows upward, pixel y downward.
            map_range(v.y, max.y, min.y, 0.0, f64::from(self.size.height), false),
        )
    }

    /// Converts a pixel-space point into graph coordinates.
    #[must_use]
    pub fn pixel_to_graph(&self, view: &GraphView, p: Vector2) -> Vector2 {
        let (min, max) = (view.min(), view.max());
        Vector2::new(
            map_range(p.x, 0.0, f64::from(self.size.width), min.x, max.x, false),
            map_range(p.y, 0.0, f64::from(self.size.height), max.y, min.y, false),
        )
    }
}
