// Copyright 2026 the Bezarc Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between this crate's vector types and [`mint`] types,
//! enabled by the `mint` feature.
//!
//! [`mint`]: https://docs.rs/mint

use crate::{Vec2, Vec3};

impl From<mint::Vector2<f64>> for Vec2 {
    #[inline]
    fn from(v: mint::Vector2<f64>) -> Vec2 {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for mint::Vector2<f64> {
    #[inline]
    fn from(v: Vec2) -> mint::Vector2<f64> {
        mint::Vector2 { x: v.x, y: v.y }
    }
}

impl From<mint::Vector3<f64>> for Vec3 {
    #[inline]
    fn from(v: mint::Vector3<f64>) -> Vec3 {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for mint::Vector3<f64> {
    #[inline]
    fn from(v: Vec3) -> mint::Vector3<f64> {
        mint::Vector3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}
