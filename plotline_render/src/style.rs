// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Visual configuration for the render pipeline.
///
/// All plain values; there is no file format. The defaults reproduce the
/// classic dark plotter look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotStyle {
    /// Background fill color.
    pub background: Color,
    /// Fallback stroke color for decoration a host draws itself.
    ///
    /// Registered functions always carry their own color (assigned from
    /// the palette when not given), so the pipeline itself never falls
    /// back to this.
    pub default_stroke: Color,
    /// Color of the two axis lines.
    pub axis: Color,
    /// Whether to draw integer-aligned grid lines.
    pub grid: bool,
    /// Color of ordinary grid lines.
    pub grid_minor: Color,
    /// Color of every 5th grid line.
    pub grid_major: Color,
    /// Stroke width of axis lines, in pixels.
    pub axis_width: f64,
    /// Stroke width of grid lines, in pixels.
    pub grid_width: f64,
    /// Stroke width of function polylines, in pixels.
    pub function_width: f64,
    /// Default sampling step constant.
    ///
    /// The per-function graph-space step is `view width × this`, unless
    /// the function carries its own constant. The default of `1e-3`
    /// yields 1001 samples across the visible range.
    pub sample_step: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x04, 0x0A, 0x18),
            default_stroke: Color::from_rgb8(0x18, 0xA5, 0x58),
            axis: Color::from_rgb8(0xD9, 0xE4, 0xE8),
            // The grid is opt-in decoration; the axes alone match the
            // classic look.
            grid: false,
            grid_minor: Color::from_rgba8(0xD9, 0xE4, 0xE8, 0x22),
            grid_major: Color::from_rgba8(0xD9, 0xE4, 0xE8, 0x55),
            axis_width: 1.0,
            grid_width: 1.0,
            function_width: 2.0,
            sample_step: 1e-3,
        }
    }
}
