// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::ops::Sub;

use num_traits::ToPrimitive;

use crate::{geometry::Point2, numeric::scalar::Scalar};

pub const EPS: f64 = 1e-10;

pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Normalize an angle into `[0, 2π)`.
#[inline(always)]
pub fn ang(a: f64) -> f64 {
    let r = a % TWO_PI;
    if r < 0.0 { r + TWO_PI } else { r }
}

/// Angle of the direction `from -> to`, in `[0, 2π)`.
///
/// Angles are cached per edge as doubles; the continuation choice in the
/// graph walk only needs a consistent ordering, not exactness.
pub fn edge_angle<T: Scalar>(from: &Point2<T>, to: &Point2<T>) -> f64
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    let dx = (&to.x - &from.x).to_f64().unwrap_or(0.0);
    let dy = (&to.y - &from.y).to_f64().unwrap_or(0.0);
    ang(dy.atan2(dx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ang_wraps_into_range() {
        assert!((ang(-std::f64::consts::PI) - std::f64::consts::PI).abs() < 1e-15);
        assert_eq!(ang(0.0), 0.0);
        assert!(ang(TWO_PI) < 1e-15);
        assert!(ang(7.0) < TWO_PI);
    }
}
