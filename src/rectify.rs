// Copyright 2026 the Bezarc Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectifying the curve parameter into a fraction of arc length.

use smallvec::SmallVec;

use crate::common::lerp;
use crate::param_curve::ParamCurve;
use crate::space::VectorSpace;
use crate::Error;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Inline capacity; a table at [`DEFAULT_STEPS`] resolution has 21
/// entries, so the common case never touches the heap.
///
/// [`DEFAULT_STEPS`]: ArclenTable::DEFAULT_STEPS
const TABLE_INLINE: usize = 32;

/// A cumulative arc length table over a curve's full parameter range.
///
/// Entry `i` holds the running polyline distance from the curve start
/// through sample `i` of a uniform sampling of `[0, 1]`; entries are
/// non-decreasing and the last is the total. Interpolating the table
/// converts a raw parameter — which does not advance at constant speed
/// along the curve — into the true fraction of total arc length reached,
/// which is what mesh generators and path followers need for equal
/// spatial spacing.
///
/// The table is a plain value: build it once per curve and query it
/// freely, or use [`ParamCurve::arclen_fraction`] to rebuild per query.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArclenTable {
    distances: SmallVec<[f64; TABLE_INLINE]>,
    total: f64,
}

impl ArclenTable {
    /// Sample resolution used by [`ParamCurve::arclen_fraction`]: the
    /// curve is cut into this many sections.
    pub const DEFAULT_STEPS: usize = 20;

    /// Build the table by sampling `curve` into `steps` uniform sections
    /// over the full `[0, 1]` parameter range.
    ///
    /// Returns [`Error::InvalidArgument`] when `steps` is zero.
    pub fn from_curve<C: ParamCurve>(curve: &C, steps: usize) -> Result<ArclenTable, Error> {
        let samples = curve.sample_uniform(steps, 1.0)?;
        Self::from_samples(&samples)
    }

    fn from_samples<V: VectorSpace>(samples: &[V]) -> Result<ArclenTable, Error> {
        if samples.is_empty() {
            return Err(Error::DegenerateInput);
        }
        let mut distances = SmallVec::new();
        distances.push(0.0);
        let mut total = 0.0;
        for pair in samples.windows(2) {
            total += pair[0].distance(pair[1]);
            distances.push(total);
        }
        Ok(ArclenTable { distances, total })
    }

    /// The total polyline length through the last sample.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// The true fraction of total arc length reached at parameter `t`,
    /// in `[0, 1]`.
    ///
    /// `t` is mapped onto a fractional table index and the two
    /// neighboring entries are linearly interpolated. Out-of-range `t`
    /// clamps to the first or last entry. A zero-length curve (all
    /// samples coincident) yields `0.0` for any `t` rather than dividing
    /// zero by zero.
    ///
    /// For a fixed curve this map is non-decreasing in `t`.
    pub fn fraction(&self, t: f64) -> f64 {
        if self.distances.len() == 1 {
            return self.as_fraction(self.distances[0]);
        }
        // A table of n entries spans n - 1 buckets; t = 0.65 over 4
        // buckets lands at fractional index 2.6.
        let pos = t * (self.distances.len() - 1) as f64;
        let left = pos.floor();
        let right = left + 1.0;
        if right >= self.distances.len() as f64 {
            return self.as_fraction(self.total);
        }
        if left < 0.0 {
            return self.as_fraction(self.distances[0]);
        }
        let interpolated = lerp(
            self.distances[left as usize],
            self.distances[right as usize],
            pos - left,
        );
        self.as_fraction(interpolated)
    }

    #[inline]
    fn as_fraction(&self, distance: f64) -> f64 {
        if self.total > 0.0 {
            distance / self.total
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ArclenTable;
    use crate::{CubicBez, ParamCurve, ParamCurveArclen, Vec2, Vec3};

    // Constant-speed straight segment from the origin to (10, 0, 0).
    fn straight() -> CubicBez<Vec3> {
        CubicBez::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0 / 3.0, 0.0, 0.0),
            Vec3::new(20.0 / 3.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        )
    }

    // Handles bunched toward the start; the parameter races ahead of
    // distance traveled early on.
    fn front_loaded() -> CubicBez<Vec2> {
        CubicBez::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.1, 0.0),
            Vec2::new(0.2, 0.3),
            Vec2::new(10.0, 4.0),
        )
    }

    #[test]
    fn fraction_of_constant_speed_curve_is_identity() {
        let table = ArclenTable::from_curve(&straight(), ArclenTable::DEFAULT_STEPS).unwrap();
        assert!((table.total() - 10.0).abs() < 1e-9);
        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            assert!((table.fraction(t) - t).abs() < 1e-9);
        }
    }

    #[test]
    fn fraction_clamps_out_of_range_parameters() {
        let table = ArclenTable::from_curve(&straight(), ArclenTable::DEFAULT_STEPS).unwrap();
        assert_eq!(table.fraction(1.0), 1.0);
        assert_eq!(table.fraction(1.7), 1.0);
        assert_eq!(table.fraction(-0.4), 0.0);
        assert_eq!(table.fraction(-7.0), 0.0);
    }

    #[test]
    fn fraction_is_monotonic() {
        let table = ArclenTable::from_curve(&front_loaded(), ArclenTable::DEFAULT_STEPS).unwrap();
        let mut last = 0.0;
        for i in 0..=100 {
            let frac = table.fraction((i as f64) / 100.0);
            assert!(frac >= last, "fraction regressed at i = {i}");
            last = frac;
        }
        assert!((last - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fraction_tracks_true_arc_length() {
        let c = front_loaded();
        let table = ArclenTable::from_curve(&c, ArclenTable::DEFAULT_STEPS).unwrap();
        let total = c.arclen(0.0, 1.0);
        for i in 1..10 {
            let t = (i as f64) / 10.0;
            let expected = c.arclen(0.0, t) / total;
            assert!((table.fraction(t) - expected).abs() < 2e-2);
        }
    }

    #[test]
    fn zero_length_curve_has_defined_fractions() {
        let p = Vec2::new(3.0, -1.0);
        let table =
            ArclenTable::from_curve(&CubicBez::new(p, p, p, p), ArclenTable::DEFAULT_STEPS)
                .unwrap();
        assert_eq!(table.total(), 0.0);
        for t in [-1.0, 0.0, 0.33, 0.5, 1.0, 2.0] {
            assert_eq!(table.fraction(t), 0.0);
        }
    }

    #[test]
    fn from_curve_rejects_zero_steps() {
        assert!(ArclenTable::from_curve(&straight(), 0).is_err());
    }

    #[test]
    fn arclen_fraction_matches_prebuilt_table() {
        let c = front_loaded();
        let table = ArclenTable::from_curve(&c, ArclenTable::DEFAULT_STEPS).unwrap();
        for i in 0..=20 {
            let t = (i as f64) / 20.0;
            assert_eq!(c.arclen_fraction(t).unwrap(), table.fraction(t));
        }
    }
}
