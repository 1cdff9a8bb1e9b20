// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use peniko::Color;
use plotline_vector::Vector2;

/// Abstract 2D drawing target the renderer draws into.
///
/// This is the complete capability set the pipeline needs; backends over
/// a real canvas, an SVG document, or a test recorder implement it and
/// nothing more. All coordinates are in pixel space (origin top left, y
/// downward); the renderer has already mapped everything out of graph
/// space by the time a surface sees it.
///
/// Path protocol: [`RenderSurface::begin_path`] starts a fresh path,
/// [`RenderSurface::move_to`] starts a subpath, [`RenderSurface::line_to`]
/// extends the current subpath, and [`RenderSurface::stroke_path`] strokes
/// everything accumulated since `begin_path`. The renderer always issues
/// these in that order and never nests paths.
pub trait RenderSurface {
    /// Clears the given pixel rectangle to transparent/empty.
    fn clear(&mut self, rect: Rect);

    /// Fills the given pixel rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes a single line segment between two pixel positions.
    fn stroke_line(&mut self, from: Vector2, to: Vector2, color: Color, width: f64);

    /// Starts a new (empty) path, discarding any unstroked one.
    fn begin_path(&mut self);

    /// Starts a new subpath at `p` without drawing.
    fn move_to(&mut self, p: Vector2);

    /// Extends the current subpath with a line to `p`.
    fn line_to(&mut self, p: Vector2);

    /// Strokes the accumulated path.
    fn stroke_path(&mut self, color: Color, width: f64);
}
