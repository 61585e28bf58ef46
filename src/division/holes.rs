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

use std::ops::{Add, Div, Mul, Sub};

use smallvec::SmallVec;
use tracing::warn;

use crate::division::error::DivisionError;
use crate::geometry::Point2;
use crate::kernel::hole_patch::incorporate_holes_into_polygon;
use crate::kernel::predicates::point_in_poly_simple;
use crate::mesh::basic_types::VertexId;
use crate::mesh::face::Face;
use crate::mesh::polyhedron::Polyhedron;
use crate::numeric::scalar::Scalar;

struct LoopCompare {
    f_idx: usize,
    h_idx: usize,
    unmatched_h_idx: Option<usize>,
    shares_vertex: bool,
    shares_edge: bool,
}

/// Walk two handle-sorted index views in merge order to find a shared
/// vertex, a shared edge, and a hole vertex that is not part of the face.
fn compare_face_loop_and_hole_loop(
    f: &[VertexId],
    f_sort: &[usize],
    h: &[VertexId],
    h_sort: &[usize],
) -> LoopCompare {
    let fl = f.len();
    let hl = h.len();
    let mut res = LoopCompare {
        f_idx: 0,
        h_idx: 0,
        unmatched_h_idx: None,
        shares_vertex: false,
        shares_edge: false,
    };

    let mut fi = 0;
    let mut hi = 0;
    while fi < fl && hi < hl {
        let i = f_sort[fi];
        let j = h_sort[hi];
        if f[i] == h[j] {
            res.shares_vertex = true;
            res.f_idx = i;
            res.h_idx = j;
            // the face runs CCW and the hole CW, so a shared edge pairs the
            // face's predecessor with the hole's successor
            if f[(i + fl - 1) % fl] == h[(j + 1) % hl] {
                res.shares_edge = true;
            }
            let t = f[i];
            while fi < fl && f[f_sort[fi]] == t {
                fi += 1;
            }
            while hi < hl && h[h_sort[hi]] == t {
                hi += 1;
            }
        } else if f[i] < h[j] {
            fi += 1;
        } else {
            res.unmatched_h_idx = Some(j);
            hi += 1;
        }
    }
    if hi < hl {
        res.unmatched_h_idx = Some(h_sort[hi]);
    }
    res
}

/// For each hole: which face loops contain it, and where it touches them.
#[allow(clippy::type_complexity)]
fn compute_containment<T: Scalar>(
    poly: &Polyhedron<T>,
    face: &Face<T>,
    face_loops: &[Vec<VertexId>],
    hole_loops: &[Vec<VertexId>],
) -> Result<(Vec<SmallVec<[usize; 4]>>, Vec<Vec<(usize, usize, usize)>>), DivisionError>
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let mut face_proj: Vec<Vec<Point2<T>>> = Vec::with_capacity(face_loops.len());
    let mut face_sort: Vec<Vec<usize>> = Vec::with_capacity(face_loops.len());
    for f_loop in face_loops {
        face_proj.push(f_loop.iter().map(|&v| face.project(poly, v)).collect());
        let mut sort: Vec<usize> = (0..f_loop.len()).collect();
        sort.sort_by_key(|&i| f_loop[i]);
        face_sort.push(sort);
    }

    let mut hole_sort: Vec<Vec<usize>> = Vec::with_capacity(hole_loops.len());
    for h_loop in hole_loops {
        let mut sort: Vec<usize> = (0..h_loop.len()).collect();
        sort.sort_by_key(|&i| h_loop[i]);
        hole_sort.push(sort);
    }

    let mut containing: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); hole_loops.len()];
    // per hole: (face index, hole vertex index, face vertex index)
    let mut shared: Vec<Vec<(usize, usize, usize)>> = vec![Vec::new(); hole_loops.len()];

    for i in 0..hole_loops.len() {
        for j in 0..face_loops.len() {
            let cmp = compare_face_loop_and_hole_loop(
                &face_loops[j],
                &face_sort[j],
                &hole_loops[i],
                &hole_sort[i],
            );

            let mut test_idx = 0;
            if cmp.shares_vertex {
                shared[i].push((j, cmp.h_idx, cmp.f_idx));
                if let Some(u) = cmp.unmatched_h_idx {
                    test_idx = u;
                } else if cmp.shares_edge {
                    // sharing an edge means face j cannot contain hole i
                    continue;
                } else {
                    return Err(DivisionError::DegenerateSharedHole);
                }
            }

            let test_p = face.project(poly, hole_loops[i][test_idx]);
            if point_in_poly_simple(&face_proj[j], &test_p) {
                containing[i].push(j);
            }
        }
    }

    Ok((containing, shared))
}

/// Insert the hole cycle into the face loop right after the shared face
/// vertex; the shared handle itself is the pinch point and ends up twice in
/// the merged loop.
fn patch_hole_into_face(
    f_loop: &mut Vec<VertexId>,
    h_loop: &[VertexId],
    f_idx: usize,
    h_idx: usize,
) {
    let mut ins: Vec<VertexId> = Vec::with_capacity(h_loop.len());
    ins.extend_from_slice(&h_loop[h_idx + 1..]);
    ins.extend_from_slice(&h_loop[..=h_idx]);
    f_loop.splice(f_idx + 1..f_idx + 1, ins);
}

/// Merge hole loops into the face loops that contain them, producing face
/// loops without holes.
///
/// Holes that touch a face are patched through the shared vertex; the rest
/// are assigned by iterated unique containment and stitched in 2D. A hole
/// with no container and no shared vertex is dropped with a warning, as is
/// any remainder if containment fails to converge.
pub fn merge_faces_and_holes<T: Scalar>(
    poly: &Polyhedron<T>,
    face: &Face<T>,
    face_loops: &mut Vec<Vec<VertexId>>,
    hole_loops: Vec<Vec<VertexId>>,
) -> Result<(), DivisionError>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    if hole_loops.is_empty() {
        return Ok(());
    }

    let (mut containing, shared) = compute_containment(poly, face, face_loops, &hole_loops)?;

    let mut unassigned = hole_loops.len();
    let mut face_holes: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); face_loops.len()];

    // holes touching a face but contained in none are patched in directly
    for i in 0..hole_loops.len() {
        if containing[i].is_empty() {
            if let Some(&(f, h_idx, f_idx)) = shared[i].first() {
                patch_hole_into_face(&mut face_loops[f], &hole_loops[i], f_idx, h_idx);
            } else {
                warn!(hole = i, "uncontained hole loop shares no vertex with any face loop");
            }
            unassigned -= 1;
        }
    }

    // iterated unique containment: a hole with exactly one containing face
    // is assigned there, and that face stops counting for everyone else
    while unassigned > 0 {
        let mut removed: Vec<usize> = Vec::new();
        for i in 0..containing.len() {
            if containing[i].len() == 1 {
                let f = containing[i][0];
                face_holes[f].push(i);
                removed.push(f);
                unassigned -= 1;
            }
        }
        if removed.is_empty() {
            warn!(unassigned, "hole containment did not converge; dropping remaining holes");
            break;
        }
        for f in removed {
            for c in containing.iter_mut() {
                c.retain(|&mut x| x != f);
            }
        }
    }

    let mut out: Vec<Vec<VertexId>> = Vec::with_capacity(face_loops.len());
    for (i, f_loop) in face_loops.iter().enumerate() {
        if face_holes[i].is_empty() {
            out.push(f_loop.clone());
            continue;
        }

        let mut projected: Vec<Vec<Point2<T>>> = Vec::with_capacity(face_holes[i].len() + 1);
        projected.push(f_loop.iter().map(|&v| face.project(poly, v)).collect());
        for &h in &face_holes[i] {
            projected.push(hole_loops[h].iter().map(|&v| face.project(poly, v)).collect());
        }

        let merged = incorporate_holes_into_polygon(&projected);
        let mut loop_out: Vec<VertexId> = Vec::with_capacity(merged.len());
        for (l, vi) in merged {
            if l == 0 {
                loop_out.push(f_loop[vi]);
            } else {
                loop_out.push(hole_loops[face_holes[i][l - 1]][vi]);
            }
        }
        out.push(loop_out);
    }
    *face_loops = out;

    Ok(())
}
