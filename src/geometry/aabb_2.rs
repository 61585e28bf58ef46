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

use crate::{geometry::Point2, numeric::scalar::Scalar, operations::Zero};

/// An axis-aligned bounding box in 2D, used to prefilter the expensive
/// point-in-polygon tests when embedding paths and loops.
#[derive(Debug, Clone)]
pub struct Aabb2<T: Scalar> {
    pub min: Point2<T>,
    pub max: Point2<T>,
}

impl<T: Scalar> Aabb2<T>
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    /// Build the smallest box containing every point. `points` must be
    /// non-empty.
    pub fn fit(points: &[Point2<T>]) -> Self {
        assert!(!points.is_empty(), "Aabb2::fit on empty point set");
        let mut min = points[0].clone();
        let mut max = points[0].clone();
        for p in &points[1..] {
            min.x = min_by_sign(&min.x, &p.x);
            min.y = min_by_sign(&min.y, &p.y);
            max.x = max_by_sign(&max.x, &p.x);
            max.y = max_by_sign(&max.y, &p.y);
        }
        Aabb2 { min, max }
    }

    /// Inclusive point membership.
    pub fn intersects_point(&self, p: &Point2<T>) -> bool {
        if (&p.x - &self.min.x).is_negative() {
            return false;
        }
        if (&self.max.x - &p.x).is_negative() {
            return false;
        }
        if (&p.y - &self.min.y).is_negative() {
            return false;
        }
        if (&self.max.y - &p.y).is_negative() {
            return false;
        }
        true
    }
}

#[inline(always)]
fn min_by_sign<T: Scalar>(a: &T, b: &T) -> T
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    if (a - b).is_negative() { a.clone() } else { b.clone() }
}

#[inline(always)]
fn max_by_sign<T: Scalar>(a: &T, b: &T) -> T
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    if (a - b).is_positive() { a.clone() } else { b.clone() }
}
