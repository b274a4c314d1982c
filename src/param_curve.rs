// Copyright 2026 the Bezarc Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits for curves parametrized by a scalar.

use alloc::vec::Vec;

use crate::common::integrate_simpson;
use crate::rectify::ArclenTable;
use crate::space::VectorSpace;
use crate::Error;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Recommended stencil half-width for [`ParamCurve::deriv_central`].
pub const CENTRAL_DIFF_STEP: f64 = 1e-4;

/// Subdivision count of the fixed-resolution Simpson integrator,
/// [`ParamCurveArclen::arclen`].
pub const SIMPSON_INTERVALS: usize = 10;

/// Step-size tolerance at which [`ParamCurveArclen::inv_arclen`] accepts
/// the current parameter.
pub const NEWTON_TOLERANCE: f64 = 1e-3;

/// Iteration cap for [`ParamCurveArclen::inv_arclen`].
pub const MAX_NEWTON_ITERS: usize = 1000;

/// Speed below which the Newton step refuses to divide.
const MIN_SPEED: f64 = 1e-12;

/// A curve parametrized by a scalar.
///
/// If the result is interpreted as a point, this represents a curve. But
/// the result can be interpreted as a vector as well.
pub trait ParamCurve: Sized {
    /// The vector space the curve's points live in.
    type Point: VectorSpace;

    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1]. The underlying polynomial is
    /// defined for any real value, but values outside that range carry no
    /// geometric meaning for a segment; callers should clamp.
    fn eval(&self, t: f64) -> Self::Point;

    /// The start point.
    fn start(&self) -> Self::Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Self::Point {
        self.eval(1.0)
    }

    /// Sample the curve at `steps + 1` uniformly spaced parameter values
    /// from `0` through `t_end`.
    ///
    /// `steps` is the number of sections the parameter range is cut into,
    /// so the result always holds `steps + 1` positions, endpoints
    /// included. `t_end` is conventionally in `(0, 1]`; pass `1.0` to
    /// sample the whole segment.
    ///
    /// Returns [`Error::InvalidArgument`] when `steps` is zero.
    fn sample_uniform(&self, steps: usize, t_end: f64) -> Result<Vec<Self::Point>, Error> {
        if steps == 0 {
            return Err(Error::InvalidArgument("steps must be at least 1"));
        }
        let dt = t_end / steps as f64;
        // The parameter is accumulated rather than recomputed as i * dt,
        // which accrues rounding error for large step counts. The final
        // sample lands within an ulp-scale drift of t_end.
        let mut t = 0.0;
        let mut samples = Vec::with_capacity(steps + 1);
        for _ in 0..=steps {
            samples.push(self.eval(t));
            t += dt;
        }
        Ok(samples)
    }

    /// Estimate the derivative at `t` by central difference with stencil
    /// half-width `h`.
    ///
    /// This needs nothing but curve evaluation, making it usable where
    /// the closed-form derivative is inconvenient to obtain generically;
    /// [`CENTRAL_DIFF_STEP`] is a good default for `h`. The estimate
    /// degrades near `t = 0` and `t = 1`, where the stencil steps outside
    /// `[0, 1]` — accepted, since the polynomial is defined there too.
    /// Prefer [`ParamCurveDeriv::deriv`] when the exact tangent matters.
    fn deriv_central(&self, t: f64, h: f64) -> Self::Point {
        (self.eval(t + h) - self.eval(t - h)) * (0.5 / h)
    }

    /// The true fraction of total arc length reached at parameter `t`.
    ///
    /// Builds a fresh [`ArclenTable`] at [`ArclenTable::DEFAULT_STEPS`]
    /// resolution and interpolates it. When querying many parameters on
    /// the same curve, build the table once and call
    /// [`ArclenTable::fraction`] directly; the results are identical.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezarc::{CubicBez, ParamCurve, Vec2};
    ///
    /// let c = CubicBez::new(
    ///     Vec2::new(0.0, 0.0),
    ///     Vec2::new(3.0, 0.0),
    ///     Vec2::new(6.0, 0.0),
    ///     Vec2::new(9.0, 0.0),
    /// );
    /// // Constant speed: the raw parameter already is the fraction.
    /// let frac = c.arclen_fraction(0.25)?;
    /// assert!((frac - 0.25).abs() < 1e-9);
    /// # Ok::<_, bezarc::Error>(())
    /// ```
    fn arclen_fraction(&self, t: f64) -> Result<f64, Error> {
        Ok(ArclenTable::from_curve(self, ArclenTable::DEFAULT_STEPS)?.fraction(t))
    }
}

/// A differentiable parametrized curve.
pub trait ParamCurveDeriv: ParamCurve {
    /// The parametric curve obtained by taking the derivative of this one.
    type DerivResult: ParamCurve<Point = Self::Point>;

    /// The derivative of the curve.
    ///
    /// Evaluating the result at `t` yields the exact tangent vector (not
    /// normalized); its magnitude is the speed at which the curve is
    /// traversed.
    fn deriv(&self) -> Self::DerivResult;
}

/// A parametrized curve that can have its arc length measured.
pub trait ParamCurveArclen: ParamCurveDeriv {
    /// The arc length of the curve between parameters `t_start` and
    /// `t_end`.
    ///
    /// Composite Simpson's rule over the speed function at
    /// [`SIMPSON_INTERVALS`] subdivisions — far more accurate per curve
    /// evaluation than summing chords, and the integrator
    /// [`inv_arclen`](Self::inv_arclen) drives its iteration with.
    fn arclen(&self, t_start: f64, t_end: f64) -> f64 {
        self.arclen_quadrature(t_start, t_end, SIMPSON_INTERVALS)
    }

    /// The arc length between `t_start` and `t_end` with a caller-chosen
    /// Simpson subdivision count.
    ///
    /// `n` is rounded up to the nearest even value of at least 2.
    fn arclen_quadrature(&self, t_start: f64, t_end: f64, n: usize) -> f64 {
        let deriv = self.deriv();
        integrate_simpson(|t| deriv.eval(t).hypot(), t_start, t_end, n)
    }

    /// The arc length from `0` through `t_end`, measured by sampling the
    /// curve into `steps` sections and summing chord lengths.
    ///
    /// Converges as `O(1/steps)`, much more slowly than
    /// [`arclen`](Self::arclen); its virtue is needing no derivative.
    /// Returns [`Error::InvalidArgument`] when `steps` is zero.
    fn arclen_polyline(&self, steps: usize, t_end: f64) -> Result<f64, Error> {
        let samples = self.sample_uniform(steps, t_end)?;
        Ok(samples.windows(2).map(|pair| pair[0].distance(pair[1])).sum())
    }

    /// Solve for the parameter at which `arclen` units of length have
    /// been traveled from the start, and the curve point there.
    ///
    /// Newton–Raphson on `f(t) = length(0, t) − arclen`, with the speed
    /// `|B'(t)|` (by central difference) as the Jacobian and the fraction
    /// of length traveled, `arclen / total_arclen`, as the initial guess.
    /// Iteration stops once the parameter moves less than
    /// [`NEWTON_TOLERANCE`].
    ///
    /// `total_arclen` is taken as an argument since the caller typically
    /// has it already (placing `n` points means `n` solves against one
    /// total).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] when `total_arclen` is not positive.
    /// - [`Error::DegenerateInput`] when iteration lands where the curve
    ///   has vanishing speed (a point-like segment or a cusp), instead of
    ///   dividing by it.
    /// - [`Error::ConvergenceFailure`] after [`MAX_NEWTON_ITERS`]
    ///   iterations, carrying the last parameter so the caller can decide
    ///   whether to trust it.
    ///
    /// The parameter is not clamped into `[0, 1]` during iteration, so a
    /// target distance outside `[0, total_arclen]` may diverge or solve
    /// to an out-of-range parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezarc::{CubicBez, ParamCurveArclen, Vec3};
    ///
    /// let c = CubicBez::new(
    ///     Vec3::new(0.0, 0.0, 0.0),
    ///     Vec3::new(0.0, 3.0, 0.0),
    ///     Vec3::new(4.0, 3.0, 2.0),
    ///     Vec3::new(4.0, 0.0, 2.0),
    /// );
    /// let total = c.arclen(0.0, 1.0);
    /// let (t, _midpoint) = c.inv_arclen(total / 2.0, total)?;
    /// assert!((c.arclen(0.0, t) - total / 2.0).abs() < 1e-2);
    /// # Ok::<_, bezarc::Error>(())
    /// ```
    fn inv_arclen(
        &self,
        arclen: f64,
        total_arclen: f64,
    ) -> Result<(f64, Self::Point), Error> {
        if total_arclen <= 0.0 {
            return Err(Error::InvalidArgument("total_arclen must be positive"));
        }
        let mut t = arclen / total_arclen;
        let mut iterations = 0;
        loop {
            let speed = self.deriv_central(t, CENTRAL_DIFF_STEP).hypot();
            if speed < MIN_SPEED {
                return Err(Error::DegenerateInput);
            }
            let traveled = self.arclen(0.0, t);
            let t_next = t - (traveled - arclen) / speed;
            let diff = t_next - t;
            t = t_next;
            if diff.abs() < NEWTON_TOLERANCE {
                break;
            }
            iterations += 1;
            if iterations > MAX_NEWTON_ITERS {
                return Err(Error::ConvergenceFailure { t, iterations });
            }
        }
        Ok((t, self.eval(t)))
    }
}
