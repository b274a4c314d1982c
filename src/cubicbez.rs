// Copyright 2026 the Bezarc Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::{ParamCurve, ParamCurveArclen, ParamCurveDeriv, QuadBez, VectorSpace};

/// A single cubic Bézier segment.
///
/// `p0` and `p3` are the endpoints, `p1` and `p2` the control handles.
/// This is the segment type the full arc length pipeline operates on:
/// sampling, integration, the Newton distance solver, and parameter
/// rectification.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez<V> {
    /// The start point.
    pub p0: V,
    /// The control handle pulling the curve away from the start.
    pub p1: V,
    /// The control handle pulling the curve into the end.
    pub p2: V,
    /// The end point.
    pub p3: V,
}

impl<V> CubicBez<V> {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub const fn new(p0: V, p1: V, p2: V, p3: V) -> CubicBez<V> {
        CubicBez { p0, p1, p2, p3 }
    }
}

impl<V: VectorSpace> ParamCurve for CubicBez<V> {
    type Point = V;

    #[inline]
    fn eval(&self, t: f64) -> V {
        let mt = 1.0 - t;
        self.p0 * (mt * mt * mt)
            + (self.p1 * (mt * mt * 3.0) + (self.p2 * (mt * 3.0) + self.p3 * t) * t) * t
    }

    #[inline]
    fn start(&self) -> V {
        self.p0
    }

    #[inline]
    fn end(&self) -> V {
        self.p3
    }
}

impl<V: VectorSpace> ParamCurveDeriv for CubicBez<V> {
    type DerivResult = QuadBez<V>;

    #[inline]
    fn deriv(&self) -> QuadBez<V> {
        QuadBez::new(
            (self.p1 - self.p0) * 3.0,
            (self.p2 - self.p1) * 3.0,
            (self.p3 - self.p2) * 3.0,
        )
    }
}

impl<V: VectorSpace> ParamCurveArclen for CubicBez<V> {}

#[cfg(test)]
mod tests {
    use super::CubicBez;
    use crate::{
        Error, ParamCurve, ParamCurveArclen, ParamCurveDeriv, Vec2, Vec3, CENTRAL_DIFF_STEP,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // y = x^2 over [0, 1].
    fn parabola() -> CubicBez<Vec2> {
        CubicBez::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0 / 3.0, 0.0),
            Vec2::new(2.0 / 3.0, 1.0 / 3.0),
            Vec2::new(1.0, 1.0),
        )
    }

    // Constant-speed straight segment from the origin to (10, 0, 0).
    fn straight() -> CubicBez<Vec3> {
        CubicBez::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0 / 3.0, 0.0, 0.0),
            Vec3::new(20.0 / 3.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        )
    }

    // An uneven-speed spatial curve, handles bunched toward the start.
    fn skewed() -> CubicBez<Vec3> {
        CubicBez::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.5, 1.0, 0.0),
            Vec3::new(1.0, 1.5, 2.0),
            Vec3::new(7.0, -2.0, 4.0),
        )
    }

    #[test]
    fn cubicbez_eval_endpoints() {
        let c = skewed();
        assert_eq!(c.eval(0.0), c.p0);
        assert!((c.eval(1.0) - c.p3).hypot() < 1e-12);
    }

    #[test]
    fn cubicbez_deriv() {
        let c = parabola();
        let deriv = c.deriv();

        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let delta = 1e-6;
            let p = c.eval(t);
            let p1 = c.eval(t + delta);
            let d_approx = (p1 - p) * delta.recip();
            let d = deriv.eval(t);
            assert!((d - d_approx).hypot() < delta * 2.0);
        }
    }

    #[test]
    fn cubicbez_deriv_matches_power_basis() {
        // B'(t) = -3(a - b) + 6t(a - 2b + c) + 3t²(-(a - 3(b - c) - d)),
        // with a = p0 (start), b = p1 (first handle), c = p2 (second
        // handle), d = p3 (end).
        let c = skewed();
        let (a, b, cc, d) = (c.p0, c.p1, c.p2, c.p3);
        let deriv = c.deriv();
        for i in 0..=20 {
            let t = (i as f64) / 20.0;
            let power = (a - b) * -3.0
                + (a - b * 2.0 + cc) * (6.0 * t)
                + (a - (b - cc) * 3.0 - d) * (-3.0 * t * t);
            assert!((deriv.eval(t) - power).hypot() < 1e-9);
        }
    }

    #[test]
    fn cubicbez_deriv_central_matches_closed_form() {
        // The central-difference stencil degrades once it steps outside
        // [0, 1], so compare on the interior.
        let c = skewed();
        let deriv = c.deriv();
        for i in 1..=18 {
            let t = 0.05 * (i as f64);
            let estimate = c.deriv_central(t, CENTRAL_DIFF_STEP);
            assert!((estimate - deriv.eval(t)).hypot() < 1e-3);
        }
    }

    #[test]
    fn cubicbez_sample_uniform() {
        let c = skewed();
        for steps in [1, 2, 7, 20] {
            let samples = c.sample_uniform(steps, 1.0).unwrap();
            assert_eq!(samples.len(), steps + 1);
            assert_eq!(samples[0], c.eval(0.0));
            // The accumulated parameter drifts slightly from exactly 1.0.
            assert!((samples[steps] - c.eval(1.0)).hypot() < 1e-9);
        }
        assert_eq!(
            c.sample_uniform(0, 1.0),
            Err(Error::InvalidArgument("steps must be at least 1"))
        );
    }

    #[test]
    fn cubicbez_arclen_straight_line() {
        let c = straight();
        assert!((c.arclen(0.0, 1.0) - 10.0).abs() < 1e-2);
        assert!((c.arclen(0.0, 0.5) - 5.0).abs() < 1e-2);
    }

    #[test]
    fn cubicbez_arclen() {
        let c = parabola();
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        assert!((c.arclen(0.0, 1.0) - true_arclen).abs() < 1e-4);
        // More subdivisions, tighter agreement.
        assert!((c.arclen_quadrature(0.0, 1.0, 100) - true_arclen).abs() < 1e-8);
    }

    #[test]
    fn cubicbez_arclen_polyline_converges() {
        let c = skewed();
        let simpson = c.arclen(0.0, 1.0);
        let coarse = c.arclen_polyline(10, 1.0).unwrap();
        let medium = c.arclen_polyline(100, 1.0).unwrap();
        let fine = c.arclen_polyline(1000, 1.0).unwrap();
        // Chord sums underestimate and improve monotonically.
        assert!(coarse <= medium + 1e-12);
        assert!(medium <= fine + 1e-12);
        assert!((fine - simpson).abs() < 1e-3);
    }

    #[test]
    fn cubicbez_inv_arclen_round_trip() {
        let c = skewed();
        let total = c.arclen(0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(0xBE2A);
        for _ in 0..16 {
            let t: f64 = rng.random_range(0.0..=1.0);
            let d = c.arclen(0.0, t);
            let (solved, point) = c.inv_arclen(d, total).unwrap();
            assert!(
                (solved - t).abs() < 1e-2,
                "wanted t = {t}, solved t = {solved}"
            );
            assert!((point - c.eval(solved)).hypot() < 1e-12);
        }
    }

    #[test]
    fn cubicbez_inv_arclen_endpoints() {
        let c = skewed();
        let total = c.arclen(0.0, 1.0);
        let (t0, _) = c.inv_arclen(0.0, total).unwrap();
        assert!(t0.abs() < 1e-2);
        let (t1, p1) = c.inv_arclen(total, total).unwrap();
        assert!((t1 - 1.0).abs() < 1e-2);
        assert!((p1 - c.eval(t1)).hypot() < 1e-12);
    }

    #[test]
    fn cubicbez_inv_arclen_rejects_zero_length() {
        let c = straight();
        assert_eq!(
            c.inv_arclen(0.5, 0.0),
            Err(Error::InvalidArgument("total_arclen must be positive"))
        );
    }

    #[test]
    fn cubicbez_degenerate_point() {
        let p = Vec3::new(4.0, 5.0, 6.0);
        let c = CubicBez::new(p, p, p, p);
        assert_eq!(c.arclen(0.0, 1.0), 0.0);
        let deriv = c.deriv();
        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            assert_eq!(deriv.eval(t).hypot(), 0.0);
        }
        // Total length of a point is zero, which the solver rejects up
        // front rather than dividing by a vanishing speed.
        assert!(matches!(
            c.inv_arclen(0.0, c.arclen(0.0, 1.0)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn cubicbez_planar_matches_spatial() {
        let flat = CubicBez::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.5, 1.0),
            Vec2::new(1.0, 1.5),
            Vec2::new(7.0, -2.0),
        );
        let lifted = CubicBez::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.5, 1.0, 0.0),
            Vec3::new(1.0, 1.5, 0.0),
            Vec3::new(7.0, -2.0, 0.0),
        );
        let total2 = flat.arclen(0.0, 1.0);
        let total3 = lifted.arclen(0.0, 1.0);
        assert!((total2 - total3).abs() < 1e-12);
        let (t2, _) = flat.inv_arclen(total2 * 0.3, total2).unwrap();
        let (t3, _) = lifted.inv_arclen(total3 * 0.3, total3).unwrap();
        assert!((t2 - t3).abs() < 1e-9);
    }
}
