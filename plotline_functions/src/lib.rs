// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline Functions: the named collection of plottable functions.
//!
//! A [`FunctionRegistry`] owns every function the renderer draws. Each
//! entry pairs an evaluation closure with a stroke color and an optional
//! per-function sampling step. Registering an existing id overwrites the
//! entry **in place**, so iteration order — and therefore draw order and
//! visual overlap — stays stable across re-registration.
//!
//! When no color is given, one is assigned from a fixed five-color
//! palette. The index source is injectable: the default cycles through
//! the palette deterministically (reproducible draw colors for tests);
//! interactive hosts that want the classic random pick can supply their
//! own source via [`FunctionRegistry::set_palette_source`].
//!
//! ## Minimal example
//!
//! ```rust
//! use plotline_functions::{FunctionOptions, FunctionRegistry};
//! use peniko::Color;
//!
//! let mut registry = FunctionRegistry::new();
//! registry.register("identity", |x| x);
//! registry.register_with(
//!     "sin",
//!     f64::sin,
//!     FunctionOptions::new().color(Color::from_rgb8(0x18, 0xA5, 0x58)),
//! );
//!
//! let ids: Vec<&str> = registry.iter().map(|f| f.id()).collect();
//! assert_eq!(ids, ["identity", "sin"]);
//! assert_eq!(registry.get("sin").unwrap().eval(0.0), 0.0);
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use peniko::Color;

/// The fixed stroke palette used when a function is registered without an
/// explicit color.
pub const PALETTE: [Color; 5] = [
    Color::from_rgb8(0x18, 0xA5, 0x58),
    Color::from_rgb8(0xDF, 0x36, 0x2D),
    Color::from_rgb8(0x01, 0x94, 0x9A),
    Color::from_rgb8(0xFE, 0xDE, 0x00),
    Color::from_rgb8(0xFD, 0xB7, 0x50),
];

/// Source of palette indices for functions registered without a color.
///
/// Indices are taken modulo the palette length, so any `usize` is valid.
pub enum PaletteSource {
    /// Walk the palette in order, wrapping around. Deterministic; this is
    /// the default.
    Cycling {
        /// Next palette index to hand out.
        next: usize,
    },
    /// Caller-provided index source, e.g. a seeded RNG.
    Custom(Box<dyn FnMut() -> usize>),
}

impl PaletteSource {
    fn next_color(&mut self) -> Color {
        let index = match self {
            Self::Cycling { next } => {
                let index = *next;
                *next = (*next + 1) % PALETTE.len();
                index
            }
            Self::Custom(source) => source() % PALETTE.len(),
        };
        PALETTE[index % PALETTE.len()]
    }
}

impl Default for PaletteSource {
    fn default() -> Self {
        Self::Cycling { next: 0 }
    }
}

impl fmt::Debug for PaletteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycling { next } => f.debug_struct("Cycling").field("next", next).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Optional settings for [`FunctionRegistry::register_with`].
#[derive(Default)]
pub struct FunctionOptions {
    color: Option<Color>,
    sample_step: Option<f64>,
}

impl FunctionOptions {
    /// Creates an empty options value (palette color, default step).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit stroke color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets a per-function sampling step constant, overriding the
    /// renderer default.
    ///
    /// Must be finite and positive; anything else is logged and ignored.
    #[must_use]
    pub fn sample_step(mut self, step: f64) -> Self {
        if step.is_finite() && step > 0.0 {
            self.sample_step = Some(step);
        } else {
            log::warn!("FunctionOptions::sample_step: ignored invalid step {step}");
        }
        self
    }
}

impl fmt::Debug for FunctionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionOptions")
            .field("color", &self.color)
            .field("sample_step", &self.sample_step)
            .finish()
    }
}

/// A registered plottable function.
pub struct PlotFunction {
    id: String,
    eval: Box<dyn Fn(f64) -> f64>,
    color: Color,
    sample_step: Option<f64>,
}

impl PlotFunction {
    /// Returns the unique id this function was registered under.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the stroke color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the per-function sampling step constant, if one was set.
    #[must_use]
    pub fn sample_step(&self) -> Option<f64> {
        self.sample_step
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.eval)(x)
    }

    /// Returns a reference to the evaluation closure.
    #[must_use]
    pub fn evaluator(&self) -> &dyn Fn(f64) -> f64 {
        &*self.eval
    }
}

impl fmt::Debug for PlotFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotFunction")
            .field("id", &self.id)
            .field("eval", &"..")
            .field("color", &self.color)
            .field("sample_step", &self.sample_step)
            .finish()
    }
}

/// Insertion-ordered collection of plottable functions, keyed by id.
///
/// There is no removal API; a plot session only ever accumulates or
/// replaces functions.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    entries: Vec<PlotFunction>,
    index: HashMap<String, usize>,
    palette: PaletteSource,
}

impl FunctionRegistry {
    /// Creates an empty registry with the deterministic cycling palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the palette-index source used for functions registered
    /// without an explicit color.
    pub fn set_palette_source(&mut self, source: PaletteSource) {
        self.palette = source;
    }

    /// Registers `eval` under `id` with a palette-assigned color and the
    /// default sampling step.
    ///
    /// If `id` is already registered the entry is overwritten in place,
    /// keeping its position in iteration order.
    pub fn register(&mut self, id: impl Into<String>, eval: impl Fn(f64) -> f64 + 'static) {
        self.register_with(id, eval, FunctionOptions::new());
    }

    /// Registers `eval` under `id` with explicit options.
    ///
    /// A missing color is assigned from the palette source at
    /// registration time, including on overwrite.
    pub fn register_with(
        &mut self,
        id: impl Into<String>,
        eval: impl Fn(f64) -> f64 + 'static,
        options: FunctionOptions,
    ) {
        let id = id.into();
        let color = options.color.unwrap_or_else(|| self.palette.next_color());
        let entry = PlotFunction {
            id: id.clone(),
            eval: Box::new(eval),
            color,
            sample_step: options.sample_step,
        };
        if let Some(&slot) = self.index.get(&id) {
            self.entries[slot] = entry;
        } else {
            self.index.insert(id, self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Returns the function registered under `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlotFunction> {
        self.index.get(id).map(|&slot| &self.entries[slot])
    }

    /// Returns the number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no functions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the functions in insertion order.
    ///
    /// This is the draw order the renderer uses, which keeps visual
    /// overlap deterministic.
    pub fn iter(&self) -> impl Iterator<Item = &PlotFunction> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec::Vec;

    use super::{FunctionOptions, FunctionRegistry, PALETTE, PaletteSource};

    #[test]
    fn cycling_palette_is_deterministic() {
        let mut registry = FunctionRegistry::new();
        for (i, id) in ["a", "b", "c", "d", "e", "f"].into_iter().enumerate() {
            registry.register(id, |x| x);
            assert_eq!(
                registry.get(id).unwrap().color(),
                PALETTE[i % PALETTE.len()],
                "palette must cycle in order"
            );
        }
    }

    #[test]
    fn explicit_color_bypasses_palette() {
        let mut registry = FunctionRegistry::new();
        let color = PALETTE[3];
        registry.register_with("f", |x| x, FunctionOptions::new().color(color));
        assert_eq!(registry.get("f").unwrap().color(), color);

        // The palette source was not consumed.
        registry.register("g", |x| x);
        assert_eq!(registry.get("g").unwrap().color(), PALETTE[0]);
    }

    #[test]
    fn custom_palette_source_is_consulted() {
        let mut registry = FunctionRegistry::new();
        registry.set_palette_source(PaletteSource::Custom(Box::new(|| 7)));
        registry.register("f", |x| x);
        assert_eq!(registry.get("f").unwrap().color(), PALETTE[7 % PALETTE.len()]);
    }

    #[test]
    fn overwrite_keeps_insertion_order() {
        let mut registry = FunctionRegistry::new();
        registry.register("first", |x| x);
        registry.register("second", |x| x + 1.0);
        registry.register("first", |x| x * 2.0);

        let ids: Vec<&str> = registry.iter().map(|f| f.id()).collect();
        assert_eq!(ids, ["first", "second"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("first").unwrap().eval(3.0), 6.0);
    }

    #[test]
    fn sample_step_validation() {
        let options = FunctionOptions::new().sample_step(1e-4);
        let mut registry = FunctionRegistry::new();
        registry.register_with("fine", |x| x, options);
        assert_eq!(registry.get("fine").unwrap().sample_step(), Some(1e-4));

        registry.register_with("bad", |x| x, FunctionOptions::new().sample_step(0.0));
        assert_eq!(registry.get("bad").unwrap().sample_step(), None);

        registry.register_with("nan", |x| x, FunctionOptions::new().sample_step(f64::NAN));
        assert_eq!(registry.get("nan").unwrap().sample_step(), None);
    }

    #[test]
    fn eval_and_evaluator_agree() {
        let mut registry = FunctionRegistry::new();
        registry.register("square", |x| x * x);
        let f = registry.get("square").unwrap();
        assert_eq!(f.eval(4.0), 16.0);
        assert_eq!((f.evaluator())(4.0), 16.0);
    }
}
