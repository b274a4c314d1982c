// Copyright 2026 the Bezarc Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments.

use crate::{ParamCurve, VectorSpace};

/// A single line segment.
///
/// Mostly of interest as the derivative of a quadratic Bézier segment; a
/// line traversed at this parameterization is the tangent of the quadratic.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<V> {
    /// The line's start point.
    pub p0: V,
    /// The line's end point.
    pub p1: V,
}

impl<V> Line<V> {
    /// Create a new line segment.
    #[inline]
    pub const fn new(p0: V, p1: V) -> Line<V> {
        Line { p0, p1 }
    }
}

impl<V: VectorSpace> ParamCurve for Line<V> {
    type Point = V;

    #[inline]
    fn eval(&self, t: f64) -> V {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn start(&self) -> V {
        self.p0
    }

    #[inline]
    fn end(&self) -> V {
        self.p1
    }
}

#[cfg(test)]
mod tests {
    use super::Line;
    use crate::{ParamCurve, Vec2};

    #[test]
    fn line_eval() {
        let l = Line::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 5.0));
        assert_eq!(l.eval(0.5), Vec2::new(2.0, 3.0));
        assert_eq!(l.start(), l.eval(0.0));
        assert_eq!(l.end(), l.eval(1.0));
    }
}
