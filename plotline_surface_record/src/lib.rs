// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline Recording Surface.
//!
//! This crate provides [`RecordingSurface`], a small, stateful
//! implementation of [`RenderSurface`] for **draw-call recording**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It does **not** establish "golden" rendering behavior for backends.
//! - It is intended primarily for tests and debugging that want to assert
//!   on the exact sequence of draw calls a frame produced.
//!
//! Every call is captured as a [`SurfaceOp`] value in order;
//! [`RecordingSurface::stroked_paths`] reconstructs the stroked polylines
//! with their subpath boundaries intact, which is what sampling tests
//! care about.
//!
//! ## Minimal example
//!
//! ```rust
//! use plotline_render::RenderSurface;
//! use plotline_surface_record::{RecordingSurface, SurfaceOp};
//! use plotline_vector::Vector2;
//!
//! let mut surface = RecordingSurface::default();
//! surface.begin_path();
//! surface.move_to(Vector2::new(0.0, 0.0));
//! surface.line_to(Vector2::new(10.0, 10.0));
//! surface.stroke_path(peniko::Color::WHITE, 2.0);
//!
//! assert_eq!(surface.ops().len(), 4);
//! let paths = surface.stroked_paths();
//! assert_eq!(paths[0].subpaths[0].len(), 2);
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use plotline_render::RenderSurface;
use plotline_vector::Vector2;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Surface cleared over the given pixel rectangle.
    Clear(Rect),
    /// Solid fill over the given pixel rectangle.
    FillRect {
        /// Filled rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Single stroked line segment.
    StrokeLine {
        /// Segment start in pixel space.
        from: Vector2,
        /// Segment end in pixel space.
        to: Vector2,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f64,
    },
    /// A new path was started.
    BeginPath,
    /// A new subpath was started at the given point.
    MoveTo(Vector2),
    /// The current subpath was extended to the given point.
    LineTo(Vector2),
    /// The accumulated path was stroked.
    StrokePath {
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f64,
    },
}

/// A stroked polyline reconstructed from the recorded ops.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokedPath {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
    /// Point runs; each inner vector is one connected subpath.
    pub subpaths: Vec<Vec<Vector2>>,
}

impl StrokedPath {
    /// Total number of points across all subpaths.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.subpaths.iter().map(Vec::len).sum()
    }
}

/// Render surface that records every draw call for later inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded ops in call order.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Clears the recording (for reuse across frames).
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Reconstructs every stroked path, in stroke order.
    ///
    /// Subpath boundaries follow the `MoveTo` ops, so a polyline with
    /// gaps comes back as multiple point runs. Paths that were begun but
    /// never stroked are not reported.
    #[must_use]
    pub fn stroked_paths(&self) -> Vec<StrokedPath> {
        let mut paths = Vec::new();
        let mut subpaths: Vec<Vec<Vector2>> = Vec::new();
        for op in &self.ops {
            match op {
                SurfaceOp::BeginPath => subpaths.clear(),
                SurfaceOp::MoveTo(p) => subpaths.push(alloc::vec![*p]),
                SurfaceOp::LineTo(p) => {
                    if let Some(run) = subpaths.last_mut() {
                        run.push(*p);
                    }
                }
                SurfaceOp::StrokePath { color, width } => {
                    paths.push(StrokedPath {
                        color: *color,
                        width: *width,
                        subpaths: core::mem::take(&mut subpaths),
                    });
                }
                _ => {}
            }
        }
        paths
    }

    /// Returns the recorded `StrokeLine` ops with the given color.
    #[must_use]
    pub fn lines_with_color(&self, color: Color) -> Vec<&SurfaceOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::StrokeLine { color: c, .. } if *c == color))
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(SurfaceOp::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: Vector2, to: Vector2, color: Color, width: f64) {
        self.ops.push(SurfaceOp::StrokeLine {
            from,
            to,
            color,
            width,
        });
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, p: Vector2) {
        self.ops.push(SurfaceOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Vector2) {
        self.ops.push(SurfaceOp::LineTo(p));
    }

    fn stroke_path(&mut self, color: Color, width: f64) {
        self.ops.push(SurfaceOp::StrokePath { color, width });
    }
}
