// Copyright 2026 the Bezarc Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use crate::{Line, ParamCurve, ParamCurveDeriv, VectorSpace};

/// A single quadratic Bézier segment.
///
/// `p0` and `p2` are the endpoints, `p1` the control handle. Only
/// evaluation and the closed-form derivative are provided; the arc length
/// machinery operates on cubic segments.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez<V> {
    /// The start point.
    pub p0: V,
    /// The control handle.
    pub p1: V,
    /// The end point.
    pub p2: V,
}

impl<V> QuadBez<V> {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub const fn new(p0: V, p1: V, p2: V) -> QuadBez<V> {
        QuadBez { p0, p1, p2 }
    }
}

impl<V: VectorSpace> ParamCurve for QuadBez<V> {
    type Point = V;

    #[inline]
    fn eval(&self, t: f64) -> V {
        let mt = 1.0 - t;
        self.p0 * (mt * mt) + (self.p1 * (mt * 2.0) + self.p2 * t) * t
    }

    #[inline]
    fn start(&self) -> V {
        self.p0
    }

    #[inline]
    fn end(&self) -> V {
        self.p2
    }
}

impl<V: VectorSpace> ParamCurveDeriv for QuadBez<V> {
    type DerivResult = Line<V>;

    #[inline]
    fn deriv(&self) -> Line<V> {
        Line::new((self.p1 - self.p0) * 2.0, (self.p2 - self.p1) * 2.0)
    }
}
