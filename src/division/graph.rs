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

use std::f64::consts::PI;
use std::ops::{Mul, Sub};

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::division::error::DivisionError;
use crate::geometry::util::{ang, edge_angle, TWO_PI};
use crate::geometry::Point2;
use crate::kernel::predicates::signed_area;
use crate::mesh::basic_types::VertexId;
use crate::mesh::face::Face;
use crate::mesh::polyhedron::Polyhedron;
use crate::numeric::scalar::Scalar;

/// Arena-allocated half-edge. `visited` is the step number of the current
/// walk (-1 when untouched); `loop_next` links the walked tour.
#[derive(Debug)]
struct EdgeSlot {
    src: VertexId,
    tgt: VertexId,
    ang: f64,
    visited: i32,
    loop_next: Option<u32>,
}

#[derive(Debug)]
struct VertNode<T: Scalar> {
    /// outbound edge indices, insertion order; iterated newest first so
    /// tie-breaking on multi-edge vertices is reproducible
    out: SmallVec<[u32; 4]>,
    proj: Point2<T>,
}

struct SplitGraph<T: Scalar> {
    verts: AHashMap<VertexId, VertNode<T>>,
    order: Vec<VertexId>,
    slots: Vec<EdgeSlot>,
    live: usize,
}

impl<T: Scalar> SplitGraph<T>
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    fn build(
        poly: &Polyhedron<T>,
        face: &Face<T>,
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self, DivisionError> {
        let mut g = SplitGraph {
            verts: AHashMap::new(),
            order: Vec::new(),
            slots: Vec::with_capacity(edges.len()),
            live: edges.len(),
        };

        for &(a, b) in edges {
            let idx = g.slots.len() as u32;
            g.slots.push(EdgeSlot {
                src: a,
                tgt: b,
                ang: 0.0,
                visited: -1,
                loop_next: None,
            });
            match g.verts.get_mut(&a) {
                Some(node) => node.out.push(idx),
                None => {
                    g.order.push(a);
                    let mut out = SmallVec::new();
                    out.push(idx);
                    g.verts.insert(
                        a,
                        VertNode {
                            out,
                            proj: face.project(poly, a),
                        },
                    );
                }
            }
        }

        // angles need both endpoint projections; a target that is never a
        // source makes the edge set unbalanced
        for i in 0..g.slots.len() {
            let (src, tgt) = (g.slots[i].src, g.slots[i].tgt);
            let sp = g.verts[&src].proj.clone();
            let tp = g
                .verts
                .get(&tgt)
                .ok_or(DivisionError::NoOutboundEdge(tgt))?
                .proj
                .clone();
            g.slots[i].ang = edge_angle(&sp, &tp);
        }

        Ok(g)
    }

    /// Prefer a vertex with a single outbound edge; otherwise the newest
    /// edge of the first live vertex.
    fn pick_start_edge(&self) -> Option<u32> {
        for &v in &self.order {
            if let Some(node) = self.verts.get(&v) {
                if node.out.len() == 1 {
                    return Some(node.out[0]);
                }
            }
        }
        for &v in &self.order {
            if let Some(node) = self.verts.get(&v) {
                return node.out.last().copied();
            }
        }
        None
    }

    fn remove_edge(&mut self, e: u32) {
        let src = self.slots[e as usize].src;
        if let Some(node) = self.verts.get_mut(&src) {
            if let Some(pos) = node.out.iter().position(|&x| x == e) {
                node.out.remove(pos);
            }
            if node.out.is_empty() {
                self.verts.remove(&src);
            }
        }
        self.live -= 1;
    }
}

/// Extract face loops and hole loops from a set of directed edges on `face`
/// by repeatedly walking the most-clockwise-continuation tour of the graph.
///
/// Each extracted loop is classified by projected signed area: positive is
/// a face loop, otherwise a hole loop. The multiset of edges consumed
/// equals the input multiset.
pub fn split_face<T: Scalar>(
    poly: &Polyhedron<T>,
    face: &Face<T>,
    edges: &[(VertexId, VertexId)],
) -> Result<(Vec<Vec<VertexId>>, Vec<Vec<VertexId>>), DivisionError>
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let mut g = SplitGraph::build(poly, face, edges)?;

    let mut face_loops: Vec<Vec<VertexId>> = Vec::new();
    let mut hole_loops: Vec<Vec<VertexId>> = Vec::new();

    while g.live > 0 {
        let Some(mut start) = g.pick_start_edge() else {
            break;
        };
        g.slots[start as usize].visited = 0;

        let mut edge = start;
        let len: usize;

        loop {
            let mut in_ang = PI + g.slots[edge as usize].ang;
            if in_ang > TWO_PI {
                in_ang -= TWO_PI;
            }
            let src = g.slots[edge as usize].src;
            let tgt = g.slots[edge as usize].tgt;

            let node = g
                .verts
                .get(&tgt)
                .ok_or(DivisionError::NoOutboundEdge(tgt))?;
            let m = node.out.len();

            // most clockwise continuation relative to the incoming
            // direction; a U-turn is taken only when it is the lone
            // remaining option at the vertex
            let mut out: Option<u32> = None;
            let mut best = TWO_PI + 1.0;
            for (k, &cand) in node.out.iter().rev().enumerate() {
                let cs = &g.slots[cand as usize];
                if cs.tgt == src {
                    if out.is_none() && k == m - 1 {
                        out = Some(cand);
                    }
                } else {
                    let out_ang = ang(in_ang - cs.ang);
                    if out.is_none() || out_ang < best {
                        out = Some(cand);
                        best = out_ang;
                    }
                }
            }
            let out = out.ok_or(DivisionError::NoOutboundEdge(tgt))?;

            g.slots[edge as usize].loop_next = Some(out);

            if g.slots[out as usize].visited >= 0 {
                // closed: discard the prefix walked before `out`
                let mut s = start;
                while s != out {
                    let nx = g.slots[s as usize].loop_next.take().unwrap();
                    g.slots[s as usize].visited = -1;
                    s = nx;
                }
                len = (g.slots[edge as usize].visited - g.slots[out as usize].visited + 1)
                    as usize;
                start = out;
                break;
            }

            g.slots[out as usize].visited = g.slots[edge as usize].visited + 1;
            edge = out;
        }

        let mut loop_v: Vec<VertexId> = Vec::with_capacity(len);
        let mut projected: Vec<Point2<T>> = Vec::with_capacity(len);
        let mut e = start;
        for _ in 0..len {
            let next = g.slots[e as usize].loop_next.unwrap();
            let src = g.slots[e as usize].src;
            loop_v.push(src);
            projected.push(g.verts[&src].proj.clone());
            g.remove_edge(e);
            e = next;
        }
        debug_assert_eq!(e, start);

        if signed_area(&projected).sign() > 0 {
            face_loops.push(loop_v);
        } else {
            hole_loops.push(loop_v);
        }
    }

    Ok((face_loops, hole_loops))
}
