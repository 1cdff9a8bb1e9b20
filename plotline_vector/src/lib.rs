// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotline Vector: a validated 2D vector value primitive.
//!
//! This crate provides [`Vector2`], the point/vector type used throughout
//! Plotline for both graph-space and pixel-space coordinates. It differs
//! from a plain `(f64, f64)` pair in one deliberate way: **components are
//! always finite**. Constructors sanitize non-finite inputs and every
//! arithmetic operation validates its operands, logging a warning and
//! leaving the receiver unchanged rather than propagating `NaN` into view
//! state or render geometry.
//!
//! Operations come in two flavors, and both are part of the supported API:
//! - Mutating forms on the receiver ([`Vector2::add`], [`Vector2::sub`],
//!   [`Vector2::mult`], [`Vector2::div`], [`Vector2::normalize`], ...).
//! - Pure/static forms that return a new value ([`Vector2::sum`],
//!   [`Vector2::diff`], [`Vector2::lerp`], [`Vector2::from_angle`], ...).
//!
//! ## Minimal example
//!
//! ```rust
//! use plotline_vector::Vector2;
//!
//! let mut v = Vector2::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! v.add(Vector2::new(1.0, -1.0));
//! assert_eq!(v, Vector2::new(4.0, 3.0));
//!
//! // Pure form of the same operation.
//! let w = Vector2::sum(Vector2::new(4.0, 3.0), Vector2::new(-4.0, -3.0));
//! assert_eq!(w, Vector2::ZERO);
//!
//! // Non-finite operands are rejected, not propagated.
//! v.add(Vector2 { x: f64::NAN, y: 0.0 });
//! assert_eq!(v, Vector2::new(4.0, 3.0));
//! ```
//!
//! [`Vector2`] converts to and from [`kurbo::Point`] and [`kurbo::Vec2`]
//! so that callers can hand coordinates straight to kurbo-based drawing
//! code.

#![no_std]

mod vector2;

pub use vector2::Vector2;
