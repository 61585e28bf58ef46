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

use std::cmp::Ordering;
use std::ops::{Mul, Sub};

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClass {
    Outside,
    On,
    Inside,
}

/// Shoelace area of a closed polygon: `½·Σ(xᵢyᵢ₊₁ − xᵢ₊₁yᵢ)`.
/// Positive for counter-clockwise cycles. Every orientation decision in
/// face division is phrased against this convention.
pub fn signed_area<T: Scalar>(points: &[Point2<T>]) -> T
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    if points.len() < 3 {
        return T::zero();
    }
    let mut acc = T::zero();
    for i in 0..points.len() {
        let a = &points[i];
        let b = &points[(i + 1) % points.len()];
        let term = &(&a.x * &b.y) - &(&b.x * &a.y);
        acc += &term;
    }
    acc * T::from_num_den(1, 2)
}

/// Does p lie on the closed segment ab?
pub fn point_on_segment<T: Scalar>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    if crate::kernel::orientation::orient2d(a, b, p).sign() != 0 {
        return false;
    }
    in_closed_range(&a.x, &b.x, &p.x) && in_closed_range(&a.y, &b.y, &p.y)
}

#[inline]
fn in_closed_range<T: Scalar>(a: &T, b: &T, v: &T) -> bool {
    let (lo, hi) = if T::cmp_ref(a, b) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    };
    T::cmp_ref(v, lo) != Ordering::Less && T::cmp_ref(v, hi) != Ordering::Greater
}

/// Even-odd ray crossing, division-free. Boundary points are unspecified;
/// use `point_in_poly` when On matters.
pub fn point_in_poly_simple<T: Scalar>(poly: &[Point2<T>], p: &Point2<T>) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    for i in 0..n {
        let a = &poly[i];
        let b = &poly[(i + 1) % n];
        // half-open straddle of the horizontal line through p
        let a_below = T::cmp_ref(&a.y, &p.y) != Ordering::Greater;
        let b_below = T::cmp_ref(&b.y, &p.y) != Ordering::Greater;
        if a_below == b_below {
            continue;
        }
        let o = crate::kernel::orientation::orient2d(a, b, p).sign();
        // upward edge: crossing iff p strictly left; downward: strictly right
        if (a_below && o > 0) || (!a_below && o < 0) {
            inside = !inside;
        }
    }
    inside
}

/// Classified point-in-polygon: `On` is exact when `T` is exact.
pub fn point_in_poly<T: Scalar>(poly: &[Point2<T>], p: &Point2<T>) -> PointClass
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let n = poly.len();
    for i in 0..n {
        if point_on_segment(&poly[i], &poly[(i + 1) % n], p) {
            return PointClass::On;
        }
    }
    if point_in_poly_simple(poly, p) {
        PointClass::Inside
    } else {
        PointClass::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::refacet_f64::RefacetF64;

    fn p(x: f64, y: f64) -> Point2<RefacetF64> {
        Point2::new(RefacetF64(x), RefacetF64(y))
    }

    fn square() -> Vec<Point2<RefacetF64>> {
        vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]
    }

    #[test]
    fn area_of_unit_square_is_positive_ccw() {
        let sq = square();
        assert_eq!(signed_area(&sq).0, 4.0);
        let cw: Vec<_> = sq.iter().rev().cloned().collect();
        assert_eq!(signed_area(&cw).0, -4.0);
    }

    #[test]
    fn point_classification() {
        let sq = square();
        assert_eq!(point_in_poly(&sq, &p(1.0, 1.0)), PointClass::Inside);
        assert_eq!(point_in_poly(&sq, &p(3.0, 1.0)), PointClass::Outside);
        assert_eq!(point_in_poly(&sq, &p(2.0, 1.0)), PointClass::On);
        assert_eq!(point_in_poly(&sq, &p(0.0, 0.0)), PointClass::On);
    }

    #[test]
    fn simple_test_ignores_orientation() {
        let sq = square();
        let cw: Vec<_> = sq.iter().rev().cloned().collect();
        assert!(point_in_poly_simple(&sq, &p(0.5, 0.5)));
        assert!(point_in_poly_simple(&cw, &p(0.5, 0.5)));
        assert!(!point_in_poly_simple(&cw, &p(-0.5, 0.5)));
    }
}
