// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline View 2D: graph-space viewport state and pixel mapping.
//!
//! This crate provides the two headless models at the heart of Plotline:
//! - [`GraphView`]: the visible rectangle in graph space, with pan,
//!   zoom-around-anchor, per-axis scale, reset, and aspect-preserving
//!   remap operations. The rectangle is never degenerate: `min.x < max.x`
//!   and `min.y < max.y` hold after every operation.
//! - [`PixelMap`]: the bidirectional affine mapping between graph-space
//!   coordinates and device-pixel coordinates, parameterized by the
//!   current [`GraphView`] and the surface size in pixels.
//!
//! It does **not** own any rendering backend or event loop. Callers are
//! expected to:
//! - Own a [`GraphView`] instance and pass it by reference to renderers
//!   and input handlers; no ambient global state is involved.
//! - Feed already-extracted input values (pixel deltas, wheel signs) into
//!   the mutation operations from a host event loop.
//! - Keep [`PixelMap`] up to date from surface resize events.
//!
//! ## Minimal example
//!
//! ```rust
//! use plotline_vector::Vector2;
//! use plotline_view2d::{GraphView, PixelMap};
//!
//! let mut view = GraphView::new(Vector2::new(-10.0, -10.0), Vector2::new(10.0, 10.0)).unwrap();
//! let map = PixelMap::new(800, 600);
//!
//! // The graph origin lands in the middle of the surface.
//! let px = map.graph_to_pixel(&view, Vector2::ZERO);
//! assert_eq!(px, Vector2::new(400.0, 300.0));
//!
//! // Drag the view one unit to the right and up.
//! view.pan(Vector2::new(1.0, 1.0));
//! let back = map.pixel_to_graph(&view, px);
//! assert_eq!(back, Vector2::new(1.0, 1.0));
//! ```
//!
//! ## Design notes
//!
//! - Pixel space has its origin at the top left with y increasing
//!   downward, so the y axis is inverted on the way through the map.
//! - Operations that would collapse or invert the view rectangle are
//!   rejected with a logged warning rather than clamped; the view never
//!   enters a state the caller did not ask for.
//! - [`PixelMap`] alone stores pixel dimensions; [`GraphView`] never sees
//!   them except as plain arguments to [`GraphView::remap_aspect`].

#![no_std]

mod graph_view;
mod pixel_map;

pub use graph_view::{GraphView, ViewError};
pub use pixel_map::{PixelMap, PixelSize, map_range};
