// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline Render: the per-frame sampling and rendering pipeline.
//!
//! This crate turns a [`GraphView`](plotline_view2d::GraphView), a
//! [`PixelMap`](plotline_view2d::PixelMap), and a
//! [`FunctionRegistry`](plotline_functions::FunctionRegistry) into draw
//! calls against a [`RenderSurface`] — the small capability trait that is
//! the only thing the core ever knows about a concrete drawing API.
//!
//! A frame is one call to [`Renderer::render_frame`]:
//!
//! 1. Clear the surface.
//! 2. Fill the background.
//! 3. Optionally stroke integer-aligned grid lines (every 5th emphasized).
//! 4. Stroke the two axis lines through graph-space `x = 0` and `y = 0`.
//! 5. For each registered function, in registry order: sample at a fixed
//!    graph-space step, skip non-finite and out-of-view samples, and
//!    stroke the surviving points as a polyline. A skipped sample breaks
//!    the polyline, so discontinuities render as gaps rather than chords.
//!
//! The host owns the frame loop and calls `render_frame` once per tick;
//! nothing here blocks, suspends, or fails. Per-sample evaluation
//! failures — non-finite results, out-of-view points, and (with the `std`
//! feature) panics inside an evaluation closure — only ever cost the
//! sample they occur at.
//!
//! ## Minimal example
//!
//! ```rust
//! use plotline_functions::FunctionRegistry;
//! use plotline_render::{PlotStyle, RenderSurface, Renderer};
//! use plotline_vector::Vector2;
//! use plotline_view2d::{GraphView, PixelMap};
//!
//! # struct NullSurface;
//! # impl RenderSurface for NullSurface {
//! #     fn clear(&mut self, _: kurbo::Rect) {}
//! #     fn fill_rect(&mut self, _: kurbo::Rect, _: peniko::Color) {}
//! #     fn stroke_line(&mut self, _: Vector2, _: Vector2, _: peniko::Color, _: f64) {}
//! #     fn begin_path(&mut self) {}
//! #     fn move_to(&mut self, _: Vector2) {}
//! #     fn line_to(&mut self, _: Vector2) {}
//! #     fn stroke_path(&mut self, _: peniko::Color, _: f64) {}
//! # }
//! let view = GraphView::new(Vector2::new(-8.0, -8.0), Vector2::new(8.0, 8.0)).unwrap();
//! let map = PixelMap::new(800, 600);
//! let mut registry = FunctionRegistry::new();
//! registry.register("sin", f64::sin);
//!
//! let renderer = Renderer::new(PlotStyle::default());
//! let mut surface = NullSurface;
//! renderer.render_frame(&mut surface, &map, &view, &registry);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod renderer;
mod style;
mod surface;

pub use renderer::Renderer;
pub use style::PlotStyle;
pub use surface::RenderSurface;
