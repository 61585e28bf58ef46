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

use ahash::AHashSet;
use tracing::{debug, warn};

use crate::division::base_loop::assemble_base_loop;
use crate::division::compose::compose_edges_into_paths;
use crate::division::crossing::{process_crossing_edges, projected_area};
use crate::division::data::DivisionData;
use crate::division::error::DivisionError;
use crate::division::graph::split_face;
use crate::division::holes::merge_faces_and_holes;
use crate::division::hooks::DivisionHooks;
use crate::mesh::basic_types::{FaceId, FaceLoop, GeneratedLoops, VertexId};
use crate::mesh::face::Face;
use crate::mesh::polyhedron::Polyhedron;
use crate::numeric::scalar::Scalar;

/// Re-express every face of `poly` as the loops that respect the
/// intersections recorded in `data`.
///
/// Faces whose division fails fatally are emitted unchanged (their base
/// loop), with a warning; errors never cross face boundaries.
pub fn generate_face_loops<T: Scalar>(poly: &Polyhedron<T>, data: &DivisionData) -> GeneratedLoops
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    generate_face_loops_with(poly, data, None)
}

/// `generate_face_loops` with an optional debug observer.
pub fn generate_face_loops_with<T: Scalar>(
    poly: &Polyhedron<T>,
    data: &DivisionData,
    mut hooks: Option<&mut dyn DivisionHooks>,
) -> GeneratedLoops
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let mut out = GeneratedLoops::default();

    for fi in 0..poly.faces.len() {
        let face_id = FaceId(fi as u32);
        let face = &poly.faces[fi];

        let base_loop = assemble_base_loop(poly, face, data);
        if let Some(h) = hooks.as_deref_mut() {
            h.on_base_loop(face_id, &base_loop);
        }

        let loops = match generate_one_face_loop(poly, face_id, face, &base_loop, data) {
            Ok(loops) => loops,
            Err(err) => {
                warn!(?face_id, %err, "face division failed; emitting base loop unchanged");
                vec![base_loop.clone()]
            }
        };

        for l in loops {
            if let Some(h) = hooks.as_deref_mut() {
                h.on_face_loop(face_id, &l);
            }
            out.generated_edges += l.len();
            out.loops.push(FaceLoop {
                face: face_id,
                vertices: l,
            });
        }
    }

    out
}

fn generate_one_face_loop<T: Scalar>(
    poly: &Polyhedron<T>,
    face_id: FaceId,
    face: &Face<T>,
    base_loop: &[VertexId],
    data: &DivisionData,
) -> Result<Vec<Vec<VertexId>>, DivisionError>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let Some(fse) = data.face_split_edges.get(&face_id) else {
        // simple case: input face is output face (possibly with the
        // addition of vertices at intersections)
        return Ok(vec![base_loop.to_vec()]);
    };

    let n = base_loop.len();

    let mut perimeter: AHashSet<(VertexId, VertexId)> = AHashSet::with_capacity(n);
    for j in 0..n {
        perimeter.insert((base_loop[j], base_loop[(j + 1) % n]));
    }

    // collect the split edges, discarding segments that coincide with the
    // perimeter in either direction
    let mut split_edges: Vec<(VertexId, VertexId)> = Vec::new();
    let mut seen: AHashSet<(VertexId, VertexId)> = AHashSet::new();
    for &(v1, v2) in fse {
        if perimeter.contains(&(v1, v2)) || perimeter.contains(&(v2, v1)) {
            continue;
        }
        let oe = if v1 < v2 { (v1, v2) } else { (v2, v1) };
        if seen.insert(oe) {
            split_edges.push(oe);
        }
    }

    // face is unsplit
    if split_edges.is_empty() {
        return Ok(vec![base_loop.to_vec()]);
    }

    if split_edges.len() == 1 {
        let (v1, v2) = split_edges[0];
        let i1 = base_loop.iter().position(|&v| v == v1);
        let i2 = base_loop.iter().position(|&v| v == v2);
        if let (Some(i1), Some(i2)) = (i1, i2) {
            // a lone chord between two perimeter points splits the base
            // loop cleanly in two
            let (i1, i2) = if i2 < i1 { (i2, i1) } else { (i1, i2) };
            let l1 = base_loop[i1..=i2].to_vec();
            let mut l2 = base_loop[i2..].to_vec();
            l2.extend_from_slice(&base_loop[..=i1]);
            return Ok(vec![l1, l2]);
        }
    }

    let (paths, loops) = compose_edges_into_paths(&split_edges, base_loop);

    if paths.is_empty() {
        // interior loops only: each loop yields a hole in the base loop
        // plus a new face covering the hole's interior
        let mut face_loops: Vec<Vec<VertexId>> = vec![base_loop.to_vec()];
        let mut hole_loops: Vec<Vec<VertexId>> = Vec::new();

        for lp in &loops {
            let mut hole: Vec<VertexId> = lp[..lp.len() - 1].to_vec();
            let mut face_copy: Vec<VertexId> = lp.iter().rev().skip(1).copied().collect();

            if projected_area(poly, face, &face_copy).sign() < 0 {
                std::mem::swap(&mut face_copy, &mut hole);
            }
            face_loops.push(face_copy);
            hole_loops.push(hole);
        }

        merge_faces_and_holes(poly, face, &mut face_loops, hole_loops)?;
        return Ok(face_loops);
    }

    let mut face_loops: Vec<Vec<VertexId>> = Vec::new();
    match process_crossing_edges(poly, face, base_loop, paths, &loops, &mut face_loops) {
        Ok(()) => Ok(face_loops),
        Err(err) => {
            // fall back to tracing the whole edge graph
            debug!(?face_id, %err, "crossing resolution declined; splitting the full graph");
            face_loops.clear();

            let mut edges: Vec<(VertexId, VertexId)> = Vec::with_capacity(n + 2 * split_edges.len());
            for j in 0..n {
                edges.push((base_loop[j], base_loop[(j + 1) % n]));
            }
            for &(a, b) in &split_edges {
                edges.push((a, b));
                edges.push((b, a));
            }

            let (mut floops, hloops) = split_face(poly, face, &edges)?;
            if !hloops.is_empty() {
                merge_faces_and_holes(poly, face, &mut floops, hloops)?;
            }
            Ok(floops)
        }
    }
}
