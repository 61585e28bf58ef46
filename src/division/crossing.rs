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

use ahash::AHashSet;

use crate::division::error::DivisionError;
use crate::division::graph::split_face;
use crate::division::holes::merge_faces_and_holes;
use crate::geometry::{Aabb2, Point2};
use crate::kernel::orientation::orient2d;
use crate::kernel::predicates::{point_in_poly, signed_area, PointClass};
use crate::mesh::basic_types::VertexId;
use crate::mesh::face::Face;
use crate::mesh::polyhedron::Polyhedron;
use crate::numeric::scalar::Scalar;

/// Does projected point p fall within the interior sector of the polygonal
/// angle a-b-c? The reflex test is symmetrized by a lexicographic compare
/// of the flanking points so that both traversal directions of the same
/// corner answer identically.
pub fn internal_to_angle<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    p: &Point2<T>,
) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let reflex = if a.lex_cmp(c) == Ordering::Less {
        orient2d(a, b, c).sign() <= 0
    } else {
        orient2d(c, b, a).sign() >= 0
    };
    if reflex {
        orient2d(a, b, p).sign() >= 0 || orient2d(b, c, p).sign() >= 0
    } else {
        orient2d(a, b, p).sign() > 0 && orient2d(b, c, p).sign() > 0
    }
}

#[derive(Debug, Clone, Copy)]
struct Crossing {
    path: usize,
    e0: usize,
    e1: usize,
}

/// Divide the base loop along every path that connects two perimeter
/// points, then embed the remaining paths and interior loops into the
/// sub-loop that contains them.
///
/// `paths` and `loops` come from `compose_edges_into_paths`; loops carry
/// their first vertex repeated at the end. Emitted loops land in
/// `face_loops_out`, counter-clockwise under the face's projector.
pub fn process_crossing_edges<T: Scalar>(
    poly: &Polyhedron<T>,
    face: &Face<T>,
    base_loop: &[VertexId],
    paths: Vec<Vec<VertexId>>,
    loops: &[Vec<VertexId>],
    face_loops_out: &mut Vec<Vec<VertexId>>,
) -> Result<(), DivisionError>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let n = base_loop.len();
    let mut pool = paths;
    let mut ends: Vec<[usize; 2]> = vec![[n, n]; pool.len()];

    // locate endpoints of paths on the base loop. when a perimeter vertex
    // carries several incident paths, angular inclusion decides which
    // occurrence of the vertex a path attaches to.
    for i in 0..n {
        for j in 0..pool.len() {
            let p = &pool[j];
            let pn = p.len();
            if p[0] == base_loop[i] {
                if ends[j][0] == n {
                    ends[j][0] = i;
                } else {
                    let a = face.project(poly, base_loop[(i + n - 1) % n]);
                    let b = face.project(poly, base_loop[i]);
                    let c = face.project(poly, base_loop[(i + 1) % n]);
                    let adj = if p[0] == base_loop[i] { p[1] } else { p[pn - 2] };
                    if internal_to_angle(&a, &b, &c, &face.project(poly, adj)) {
                        ends[j][0] = i;
                    }
                }
            }
            if p[pn - 1] == base_loop[i] {
                if ends[j][1] == n {
                    ends[j][1] = i;
                } else {
                    let a = face.project(poly, base_loop[(i + n - 1) % n]);
                    let b = face.project(poly, base_loop[i]);
                    let c = face.project(poly, base_loop[(i + 1) % n]);
                    let adj = if p[0] == base_loop[i] { p[1] } else { p[pn - 2] };
                    if internal_to_angle(&a, &b, &c, &face.project(poly, adj)) {
                        ends[j][1] = i;
                    }
                }
            }
        }
    }

    // partition into paths that connect the base loop to itself and paths
    // that do not
    let mut cross: Vec<Crossing> = Vec::with_capacity(pool.len() + 1);
    let mut noncross: Vec<Crossing> = Vec::with_capacity(pool.len());

    for j in 0..pool.len() {
        if ends[j][0] == ends[j][1] {
            // orient the path so that emitting it reversed yields a CCW loop
            let area = projected_area(poly, face, &pool[j][1..]);
            if area.sign() > 0 {
                pool[j].reverse();
            }
        } else if ends[j][0] > ends[j][1] {
            ends[j].swap(0, 1);
            pool[j].reverse();
        }

        let c = Crossing {
            path: j,
            e0: ends[j][0],
            e1: ends[j][1],
        };
        if c.e1 != n {
            cross.push(c);
        } else {
            noncross.push(c);
        }
    }

    // a synthetic crossing joining the beginning and end of the base loop
    // stands in for the boundary itself, so the leftover region after all
    // real crossings needs no special case
    pool.push(vec![base_loop[0], base_loop[n - 1]]);
    cross.push(Crossing {
        path: pool.len() - 1,
        e0: 0,
        e1: n - 1,
    });

    // sort by increasing begin index, decreasing end index
    cross.sort_by(|a, b| a.e0.cmp(&b.e0).then(b.e1.cmp(&a.e1)));
    noncross.sort_by(|a, b| a.e0.cmp(&b.e0).then(b.e1.cmp(&a.e1)));

    // paths that share both endpoints must be ordered so that each emitted
    // loop (next path forward, this path backward) turns out CCW, which
    // means ordering the group by increasing path area
    let mut i = 0;
    while i < cross.len() {
        let mut j = i + 1;
        while j < cross.len() && cross[j].e0 == cross[i].e0 && cross[j].e1 == cross[i].e1 {
            j += 1;
        }
        if j - i >= 2 {
            let mut group: Vec<(T, usize)> = (i..j)
                .map(|k| (projected_area(poly, face, &pool[cross[k].path]), cross[k].path))
                .collect();
            group.sort_by(|a, b| T::cmp_ref(&a.0, &b.0));
            for k in i..j {
                cross[k].path = group[k - i].1;
            }
        }
        i = j;
    }

    // divide the base loop along the sorted crossings
    let mut divided: Vec<Vec<VertexId>> = Vec::with_capacity(cross.len());

    for i in 0..cross.len() {
        let e1_0 = cross[i].e0;
        let e1_1 = cross[i].e1;
        let p1 = &pool[cross[i].path];
        let mut out: Vec<VertexId> = Vec::new();

        if i + 1 < cross.len() && cross[i + 1].e0 < e1_1 {
            // crossing with other crossings embedded within
            let mut pos = e1_0;
            let mut skip = i + 1;

            while pos != e1_1 {
                let (e2_0, e2_1, p2_idx) = (cross[skip].e0, cross[skip].e1, cross[skip].path);
                let p2 = &pool[p2_idx];

                // crossing intervals must nest; partially overlapping ones
                // mean the caller's paths cross each other
                if pos > e2_0 {
                    return Err(DivisionError::CrossingMismatch);
                }
                out.extend_from_slice(&base_loop[pos..e2_0]);
                if base_loop[e2_0] != p2[0] {
                    return Err(DivisionError::CrossingMismatch);
                }
                out.extend_from_slice(&p2[..p2.len() - 1]);

                pos = e2_1;

                skip += 1;
                while skip < cross.len() && cross[skip].e0 < e2_1 {
                    skip += 1;
                }
                if skip == cross.len() {
                    break;
                }
                if cross[skip].e0 >= e1_1 {
                    break;
                }
            }

            if pos > e1_1 {
                return Err(DivisionError::CrossingMismatch);
            }
            out.extend_from_slice(&base_loop[pos..e1_1]);
            if base_loop[e1_1] != *p1.last().unwrap() {
                return Err(DivisionError::CrossingMismatch);
            }
            out.extend(p1.iter().rev().take(p1.len() - 1).copied());
        } else {
            out.reserve((e1_1 - e1_0) + (p1.len() - 1));
            out.extend_from_slice(&base_loop[e1_0..e1_1]);
            out.extend(p1.iter().rev().take(p1.len() - 1).copied());
        }
        divided.push(out);
    }

    // AABBs over the projected sub-loops prefilter the point-in-poly tests
    let mut proj: Vec<Vec<Point2<T>>> = Vec::with_capacity(divided.len());
    let mut boxes: Vec<Aabb2<T>> = Vec::with_capacity(divided.len());
    for d in &divided {
        let p: Vec<Point2<T>> = d.iter().map(|&v| face.project(poly, v)).collect();
        boxes.push(Aabb2::fit(&p));
        proj.push(p);
    }

    for (i, d) in divided.iter().enumerate() {
        let mut inc: Vec<&Vec<VertexId>> = Vec::new();

        // for each noncrossing path, test an endpoint that is off the base
        // loop
        for nc in &noncross {
            let p = &pool[nc.path];
            let test_v = if nc.e0 < n {
                if p[0] == base_loop[nc.e0] {
                    p[p.len() - 1]
                } else {
                    p[0]
                }
            } else {
                p[0]
            };
            let t = face.project(poly, test_v);
            if boxes[i].intersects_point(&t) && point_in_poly(&proj[i], &t) != PointClass::Outside
            {
                inc.push(p);
            }
        }

        // interior loops never touch the base loop; any vertex will do
        for l in loops {
            let t = face.project(poly, l[0]);
            if boxes[i].intersects_point(&t) && point_in_poly(&proj[i], &t) != PointClass::Outside
            {
                inc.push(l);
            }
        }

        if inc.is_empty() {
            face_loops_out.push(d.clone());
            continue;
        }

        // this sub-loop has embedded structure: hand the directed edge set
        // to the planar-graph splitter (perimeter forward; inclusions in
        // both directions, orientation unknown)
        let mut edges: Vec<(VertexId, VertexId)> = Vec::new();
        let mut seen: AHashSet<(VertexId, VertexId)> = AHashSet::new();
        for j in 0..d.len() {
            let e = (d[j], d[(j + 1) % d.len()]);
            if seen.insert(e) {
                edges.push(e);
            }
        }
        for p in &inc {
            for k in 0..p.len() - 1 {
                let e = (p[k], p[k + 1]);
                if seen.insert(e) {
                    edges.push(e);
                }
                let r = (p[k + 1], p[k]);
                if seen.insert(r) {
                    edges.push(r);
                }
            }
        }

        let (mut floops, hloops) = split_face(poly, face, &edges)?;
        if !hloops.is_empty() {
            merge_faces_and_holes(poly, face, &mut floops, hloops)?;
        }
        face_loops_out.append(&mut floops);
    }

    Ok(())
}

pub(crate) fn projected_area<T: Scalar>(
    poly: &Polyhedron<T>,
    face: &Face<T>,
    vs: &[VertexId],
) -> T
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let pts: Vec<Point2<T>> = vs.iter().map(|&v| face.project(poly, v)).collect();
    signed_area(&pts)
}
