// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use plotline_functions::{FunctionRegistry, PlotFunction};
use plotline_vector::Vector2;
use plotline_view2d::{GraphView, PixelMap};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`, `ceil`

use crate::style::PlotStyle;
use crate::surface::RenderSurface;

/// Grid lines per axis beyond which the grid is suppressed for a frame.
///
/// When the visible range is wide enough that integer lines would be
/// sub-pixel noise, drawing them is pure cost.
const MAX_GRID_LINES: f64 = 4096.0;

/// The per-frame pipeline.
///
/// A `Renderer` holds only style configuration; view, mapping, and
/// function state are borrowed per call, so one renderer can serve any
/// number of plots. [`Renderer::render_frame`] is expected to be called
/// at most once at a time (one invocation per animation tick) and never
/// fails: per-sample problems are skipped, frame-level problems are
/// logged, and the next tick proceeds regardless.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    style: PlotStyle,
}

impl Renderer {
    /// Creates a renderer with the given style.
    #[must_use]
    pub fn new(style: PlotStyle) -> Self {
        Self { style }
    }

    /// Returns the current style.
    #[must_use]
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Returns the style for mutation between frames.
    pub fn style_mut(&mut self) -> &mut PlotStyle {
        &mut self.style
    }

    /// Renders one frame: clear, background, grid, axes, functions.
    pub fn render_frame<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        map: &PixelMap,
        view: &GraphView,
        registry: &FunctionRegistry,
    ) {
        let frame = map.pixel_rect();
        surface.clear(frame);
        surface.fill_rect(frame, self.style.background);

        if self.style.grid {
            self.draw_grid(surface, map, view);
        }
        self.draw_axes(surface, map, view);

        for func in registry.iter() {
            self.plot_function(surface, map, view, func);
        }
    }

    /// Strokes the two axis lines through graph-space `x = 0` and `y = 0`.
    ///
    /// Axes are drawn even when the origin is off screen; the mapped
    /// segment simply falls outside the surface.
    fn draw_axes<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        map: &PixelMap,
        view: &GraphView,
    ) {
        let (min, max) = (view.min(), view.max());
        surface.stroke_line(
            map.graph_to_pixel(view, Vector2::new(min.x, 0.0)),
            map.graph_to_pixel(view, Vector2::new(max.x, 0.0)),
            self.style.axis,
            self.style.axis_width,
        );
        surface.stroke_line(
            map.graph_to_pixel(view, Vector2::new(0.0, min.y)),
            map.graph_to_pixel(view, Vector2::new(0.0, max.y)),
            self.style.axis,
            self.style.axis_width,
        );
    }

    /// Strokes integer-aligned grid lines across the visible range.
    ///
    /// Lines at multiples of 5 use the major color. The line through the
    /// origin is skipped on each axis; the axis stroke covers it.
    fn draw_grid<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        map: &PixelMap,
        view: &GraphView,
    ) {
        let (min, max) = (view.min(), view.max());

        if max.x.floor() - min.x.ceil() <= MAX_GRID_LINES {
            let mut x = min.x.ceil();
            while x <= max.x.floor() {
                if x != 0.0 {
                    surface.stroke_line(
                        map.graph_to_pixel(view, Vector2::new(x, min.y)),
                        map.graph_to_pixel(view, Vector2::new(x, max.y)),
                        self.grid_color(x),
                        self.style.grid_width,
                    );
                }
                x += 1.0;
            }
        } else {
            log::debug!("grid suppressed: x range {} too wide", view.width());
        }

        if max.y.floor() - min.y.ceil() <= MAX_GRID_LINES {
            let mut y = min.y.ceil();
            while y <= max.y.floor() {
                if y != 0.0 {
                    surface.stroke_line(
                        map.graph_to_pixel(view, Vector2::new(min.x, y)),
                        map.graph_to_pixel(view, Vector2::new(max.x, y)),
                        self.grid_color(y),
                        self.style.grid_width,
                    );
                }
                y += 1.0;
            }
        } else {
            log::debug!("grid suppressed: y range {} too wide", view.height());
        }
    }

    fn grid_color(&self, line: f64) -> peniko::Color {
        if line % 5.0 == 0.0 {
            self.style.grid_major
        } else {
            self.style.grid_minor
        }
    }

    /// Samples one function across the visible x range and strokes the
    /// surviving points as a polyline.
    ///
    /// Sample positions are `min.x + i·dx` for `i` in `0..=n` with
    /// `n = floor(width / dx)`; the last position is clamped to `max.x`
    /// so rounding cannot push the inclusive endpoint out of range. A
    /// sample that evaluates non-finite (or panics, under `std`) or
    /// falls outside the view breaks the polyline; the next surviving
    /// sample starts a new subpath. A function with no surviving samples
    /// draws nothing at all.
    fn plot_function<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        map: &PixelMap,
        view: &GraphView,
        func: &PlotFunction,
    ) {
        let step_const = func.sample_step().unwrap_or(self.style.sample_step);
        let dx = view.width() * step_const;
        if !dx.is_finite() || dx <= 0.0 {
            log::warn!("plot '{}': invalid sample step {dx}; skipped", func.id());
            return;
        }

        let count = view.width() / dx;
        if !count.is_finite() {
            log::warn!("plot '{}': unusable sample count; skipped", func.id());
            return;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "non-negative and capped before the cast"
        )]
        let count = count.floor().clamp(0.0, 1e7) as u64;

        let mut started = false;
        let mut pen_down = false;
        for i in 0..=count {
            let x = (view.min().x + i as f64 * dx).min(view.max().x);
            let y = eval_sample(func, x);
            if !y.is_finite() {
                pen_down = false;
                continue;
            }
            let vertex = Vector2::new(x, y);
            if !view.contains(vertex) {
                pen_down = false;
                continue;
            }
            let pixel = map.graph_to_pixel(view, vertex);
            if !started {
                surface.begin_path();
                started = true;
            }
            if pen_down {
                surface.line_to(pixel);
            } else {
                surface.move_to(pixel);
                pen_down = true;
            }
        }
        if started {
            surface.stroke_path(func.color(), self.style.function_width);
        }
    }
}

/// Evaluates `func` at `x`, treating a panicking closure as a non-finite
/// sample so a single bad function cannot abort the frame.
#[cfg(feature = "std")]
fn eval_sample(func: &PlotFunction, x: f64) -> f64 {
    std::panic::catch_unwind(core::panic::AssertUnwindSafe(|| func.eval(x)))
        .unwrap_or(f64::NAN)
}

#[cfg(not(feature = "std"))]
fn eval_sample(func: &PlotFunction, x: f64) -> f64 {
    func.eval(x)
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use peniko::Color;
    use plotline_functions::FunctionRegistry;
    use plotline_vector::Vector2;
    use plotline_view2d::{GraphView, PixelMap};

    use super::{PlotStyle, RenderSurface, Renderer};

    /// Surface that only counts calls; op-level assertions live in the
    /// recording surface's integration tests.
    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        fills: usize,
        lines: usize,
        paths_begun: usize,
        moves: usize,
        line_tos: usize,
        strokes: usize,
    }

    impl RenderSurface for CountingSurface {
        fn clear(&mut self, _rect: Rect) {
            self.clears += 1;
        }

        fn fill_rect(&mut self, _rect: Rect, _color: Color) {
            self.fills += 1;
        }

        fn stroke_line(&mut self, _from: Vector2, _to: Vector2, _color: Color, _width: f64) {
            self.lines += 1;
        }

        fn begin_path(&mut self) {
            self.paths_begun += 1;
        }

        fn move_to(&mut self, _p: Vector2) {
            self.moves += 1;
        }

        fn line_to(&mut self, _p: Vector2) {
            self.line_tos += 1;
        }

        fn stroke_path(&mut self, _color: Color, _width: f64) {
            self.strokes += 1;
        }
    }

    fn view() -> GraphView {
        GraphView::new(Vector2::new(-8.0, -8.0), Vector2::new(8.0, 8.0)).unwrap()
    }

    #[test]
    fn frame_without_functions_draws_decoration_only() {
        let renderer = Renderer::new(PlotStyle::default());
        let mut surface = CountingSurface::default();

        renderer.render_frame(&mut surface, &PixelMap::new(800, 600), &view(), &FunctionRegistry::new());

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.fills, 1);
        assert_eq!(surface.lines, 2, "just the two axes");
        assert_eq!(surface.paths_begun, 0);
        assert_eq!(surface.strokes, 0);
    }

    #[test]
    fn grid_adds_integer_lines_with_origin_skipped() {
        let style = PlotStyle {
            grid: true,
            ..PlotStyle::default()
        };
        let renderer = Renderer::new(style);
        let mut surface = CountingSurface::default();

        renderer.render_frame(&mut surface, &PixelMap::new(800, 600), &view(), &FunctionRegistry::new());

        // Integers in [-8, 8] per axis, minus the origin line: 16 each,
        // plus the two axes.
        assert_eq!(surface.lines, 16 + 16 + 2);
    }

    #[test]
    fn sample_count_matches_fixed_step() {
        let renderer = Renderer::new(PlotStyle::default());
        let mut surface = CountingSurface::default();
        let mut registry = FunctionRegistry::new();
        registry.register("sin", f64::sin);

        renderer.render_frame(&mut surface, &PixelMap::new(800, 600), &view(), &registry);

        // floor(16 / (16e-3)) + 1 samples, all finite and in view.
        assert_eq!(surface.moves + surface.line_tos, 1001);
        assert_eq!(surface.moves, 1, "sin is continuous: one subpath");
        assert_eq!(surface.paths_begun, 1);
        assert_eq!(surface.strokes, 1);
    }

    #[test]
    fn function_with_no_surviving_samples_draws_nothing() {
        let renderer = Renderer::new(PlotStyle::default());
        let mut surface = CountingSurface::default();
        let mut registry = FunctionRegistry::new();
        registry.register("too_high", |_| 1e6);
        registry.register("never", |_| f64::NAN);

        renderer.render_frame(&mut surface, &PixelMap::new(800, 600), &view(), &registry);

        assert_eq!(surface.paths_begun, 0);
        assert_eq!(surface.moves, 0);
        assert_eq!(surface.strokes, 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn panicking_function_costs_only_its_samples() {
        let renderer = Renderer::new(PlotStyle::default());
        let mut surface = CountingSurface::default();
        let mut registry = FunctionRegistry::new();

        // Quiet the default hook: these panics are expected.
        let hook = std::panic::take_hook();
        std::panic::set_hook(std::boxed::Box::new(|_| {}));
        registry.register("explosive", |x| {
            assert!(x >= 0.0, "negative input");
            x
        });
        registry.register("sin", f64::sin);
        renderer.render_frame(&mut surface, &PixelMap::new(800, 600), &view(), &registry);
        std::panic::set_hook(hook);

        // Both functions still stroked; the explosive one only kept its
        // non-negative half.
        assert_eq!(surface.strokes, 2);
    }
}
