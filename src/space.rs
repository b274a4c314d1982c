// Copyright 2026 the Bezarc Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The vector space curve points live in.

use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A Euclidean vector usable as a curve's point type.
///
/// Everything in this crate that measures length or distance is generic
/// over this trait, so one pipeline serves planar ([`Vec2`]) and spatial
/// ([`Vec3`]) curves alike. The element type is fixed to `f64`; the
/// provided methods derive all metric operations from [`dot`].
///
/// [`Vec2`]: crate::Vec2
/// [`Vec3`]: crate::Vec3
/// [`dot`]: VectorSpace::dot
pub trait VectorSpace:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
{
    /// Dot product.
    fn dot(self, other: Self) -> f64;

    /// Magnitude of the vector.
    #[inline]
    fn hypot(self) -> f64 {
        self.hypot2().sqrt()
    }

    /// Squared magnitude of the vector.
    #[inline]
    fn hypot2(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean distance to another point.
    #[inline]
    fn distance(self, other: Self) -> f64 {
        (self - other).hypot()
    }

    /// Linearly interpolate toward `other`.
    #[inline]
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}
