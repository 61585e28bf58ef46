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
use std::ops::{Add, Div, Mul, Sub};

use crate::geometry::Point2;
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;
use crate::operations::Abs;

/// Merge a CCW outer polygon (`loops[0]`) with CW hole polygons
/// (`loops[1..]`) into one cycle, returned as `(loop_index, vertex_index)`
/// pairs. Each hole is joined through a zero-width bridge; the two bridge
/// endpoints appear twice in the result.
///
/// Holes are processed left to right by their lexicographically smallest
/// vertex; the bridge target is found by casting a −x ray from that vertex
/// onto the merged polygon and validating the hit edge's endpoint against
/// interior vertices, bridging to the one with the shallowest angle when the
/// direct target is occluded.
pub fn incorporate_holes_into_polygon<T: Scalar>(loops: &[Vec<Point2<T>>]) -> Vec<(usize, usize)>
where
    for<'a> &'a T:
        Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T> + Div<&'a T, Output = T>,
{
    assert!(!loops.is_empty(), "incorporate_holes_into_polygon: no outer loop");
    let mut merged: Vec<(usize, usize)> = (0..loops[0].len()).map(|i| (0, i)).collect();

    // leftmost vertex of each hole, holes ordered left to right
    let mut order: Vec<(usize, usize)> = Vec::with_capacity(loops.len() - 1);
    for li in 1..loops.len() {
        let lp = &loops[li];
        let mut lm = 0;
        for v in 1..lp.len() {
            if lp[v].lex_cmp(&lp[lm]) == Ordering::Less {
                lm = v;
            }
        }
        order.push((li, lm));
    }
    order.sort_by(|a, b| loops[a.0][a.1].lex_cmp(&loops[b.0][b.1]));

    for &(li, lm) in &order {
        let hp = loops[li][lm].clone();
        let bridge = match find_hole_bridge(loops, &merged, &hp) {
            Some(b) => b,
            None => continue, // degenerate input; hole is dropped
        };
        let h_len = loops[li].len();
        let mut ins: Vec<(usize, usize)> = Vec::with_capacity(h_len + 2);
        for k in 0..h_len {
            ins.push((li, (lm + k) % h_len));
        }
        ins.push((li, lm));
        ins.push(merged[bridge]);
        merged.splice(bridge + 1..bridge + 1, ins);
    }

    merged
}

/// Index into `merged` of the vertex the hole point should bridge to.
fn find_hole_bridge<T: Scalar>(
    loops: &[Vec<Point2<T>>],
    merged: &[(usize, usize)],
    hp: &Point2<T>,
) -> Option<usize>
where
    for<'a> &'a T:
        Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T> + Div<&'a T, Output = T>,
{
    let pt = |id: (usize, usize)| -> &Point2<T> { &loops[id.0][id.1] };
    let n = merged.len();

    // cast a -x ray from hp; keep the closest crossing on the left
    let mut qx: Option<T> = None;
    let mut m: Option<usize> = None;
    for i in 0..n {
        let j = (i + 1) % n;
        let a = pt(merged[i]);
        let b = pt(merged[j]);
        let a_below = T::cmp_ref(&a.y, &hp.y) != Ordering::Greater;
        let b_below = T::cmp_ref(&b.y, &hp.y) != Ordering::Greater;
        if a_below == b_below {
            continue;
        }
        let x = &a.x + &(&(&(&hp.y - &a.y) * &(&b.x - &a.x)) / &(&b.y - &a.y));
        if T::cmp_ref(&x, &hp.x) == Ordering::Greater {
            continue;
        }
        let closer = match &qx {
            None => true,
            Some(q) => T::cmp_ref(&x, q) == Ordering::Greater,
        };
        if closer {
            qx = Some(x);
            m = Some(if T::cmp_ref(&a.x, &b.x) == Ordering::Less { i } else { j });
        }
    }

    let mut m = m?;
    let qx = qx?;
    let m0 = pt(merged[m]).clone();
    let mut mp = m0.clone();

    // the hit endpoint may be occluded; scan vertices inside the triangle
    // spanned by the hole point, the ray hit and the endpoint, and take the
    // one with the smallest angle from the ray
    let (ta, tc) = if T::cmp_ref(&hp.y, &m0.y) == Ordering::Less {
        (
            Point2::new(hp.x.clone(), hp.y.clone()),
            Point2::new(qx.clone(), hp.y.clone()),
        )
    } else {
        (
            Point2::new(qx.clone(), hp.y.clone()),
            Point2::new(hp.x.clone(), hp.y.clone()),
        )
    };
    let tb = m0.clone();

    let mut tan_min: Option<T> = None;
    for i in 0..n {
        if i == m {
            continue;
        }
        let p = pt(merged[i]);
        if T::cmp_ref(&hp.x, &p.x) == Ordering::Less {
            continue;
        }
        if T::cmp_ref(&p.x, &m0.x) == Ordering::Less {
            continue;
        }
        if T::cmp_ref(&hp.x, &p.x) == Ordering::Equal {
            continue;
        }
        if !point_in_triangle(&ta, &tb, &tc, p) {
            continue;
        }
        let tan = &(&hp.y - &p.y).abs() / &(&hp.x - &p.x);
        let better = match &tan_min {
            None => true,
            Some(t) => match T::cmp_ref(&tan, t) {
                Ordering::Less => true,
                Ordering::Equal => T::cmp_ref(&p.x, &mp.x) == Ordering::Greater,
                Ordering::Greater => false,
            },
        };
        if better {
            m = i;
            mp = p.clone();
            tan_min = Some(tan);
        }
    }

    Some(m)
}

fn point_in_triangle<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    p: &Point2<T>,
) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let s1 = orient2d(a, b, p).sign();
    let s2 = orient2d(b, c, p).sign();
    let s3 = orient2d(c, a, p).sign();
    (s1 >= 0 && s2 >= 0 && s3 >= 0) || (s1 <= 0 && s2 <= 0 && s3 <= 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::refacet_f64::RefacetF64;

    fn p(x: f64, y: f64) -> Point2<RefacetF64> {
        Point2::new(RefacetF64(x), RefacetF64(y))
    }

    #[test]
    fn single_hole_bridges_with_duplicated_endpoints() {
        let outer = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        // CW hole
        let hole = vec![p(1.0, 1.0), p(1.0, 3.0), p(3.0, 3.0), p(3.0, 1.0)];
        let merged = incorporate_holes_into_polygon(&[outer.clone(), hole.clone()]);

        // all outer and hole vertices present, two duplicates from the bridge
        assert_eq!(merged.len(), outer.len() + hole.len() + 2);
        for i in 0..outer.len() {
            assert!(merged.contains(&(0, i)));
        }
        for i in 0..hole.len() {
            assert!(merged.contains(&(1, i)));
        }

        // the merged cycle encloses area(outer) - area(hole)
        let poly: Vec<_> = merged
            .iter()
            .map(|&(l, v)| if l == 0 { outer[v].clone() } else { hole[v].clone() })
            .collect();
        let area = crate::kernel::predicates::signed_area(&poly);
        assert!((area.0 - (16.0 - 4.0)).abs() < 1e-9);
    }
}
