// Copyright 2026 the Bezarc Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc length and arc-length parameterization for Bézier segments.
//!
//! A Bézier curve's parameter `t` does not move at constant speed along the
//! curve, so placing points at equal spatial intervals — for mesh generation,
//! path following, camera rigs — needs more than evaluating the curve at
//! equal parameter steps. This crate bridges that gap for single cubic (and
//! quadratic) segments:
//!
//! - closed-form and finite-difference derivatives (tangent vectors),
//! - arc length, by naive polyline summation or Simpson's-rule integration
//!   of curve speed,
//! - inversion of "distance traveled" back into a parameter value, by
//!   Newton–Raphson iteration,
//! - rectification of a raw parameter into a true fraction of total arc
//!   length, via a cumulative-distance lookup table.
//!
//! The machinery is generic over [`VectorSpace`], so the same pipeline
//! serves planar ([`Vec2`]) and spatial ([`Vec3`]) curves.
//!
//! # Examples
//!
//! Walking a curve at equal spatial distances:
//!
//! ```
//! use bezarc::{CubicBez, ParamCurve, ParamCurveArclen, Vec3};
//!
//! let c = CubicBez::new(
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 2.0, 0.0),
//!     Vec3::new(3.0, -1.0, 1.0),
//!     Vec3::new(4.0, 0.0, 0.0),
//! );
//! let total = c.arclen(0.0, 1.0);
//! for i in 0..=4 {
//!     let d = total * (i as f64) / 4.0;
//!     let (t, p) = c.inv_arclen(d, total)?;
//!     println!("{d:.3} units in: t = {t:.3}, point = {p:?}");
//! }
//! # Ok::<_, bezarc::Error>(())
//! ```
//!
//! Correcting a raw parameter into a fraction of arc length:
//!
//! ```
//! use bezarc::{ArclenTable, CubicBez, Vec2};
//!
//! // Handles bunched toward the start: the curve crawls early, so by
//! // t = 0.5 it has covered well under half its length.
//! let c = CubicBez::new(
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(0.1, 0.0),
//!     Vec2::new(0.2, 0.0),
//!     Vec2::new(10.0, 0.0),
//! );
//! let table = ArclenTable::from_curve(&c, ArclenTable::DEFAULT_STEPS)?;
//! assert!(table.fraction(0.5) < 0.5);
//! # Ok::<_, bezarc::Error>(())
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library, and that this crate still uses the
//! `alloc` crate regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bezarc requires either the `std` or `libm` feature");

extern crate alloc;

pub mod common;
mod cubicbez;
mod error;
#[cfg(feature = "mint")]
mod interop_mint;
mod line;
mod param_curve;
mod quadbez;
mod rectify;
mod space;
mod vec2;
mod vec3;

pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::quadbez::*;
pub use crate::rectify::*;
pub use crate::space::*;
pub use crate::vec2::*;
pub use crate::vec3::*;
