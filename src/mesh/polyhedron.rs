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

use std::ops::{Add, Mul, Sub};

use ahash::AHashMap;
use tracing::warn;

use crate::geometry::Point3;
use crate::mesh::basic_types::{Edge, EdgeId, FaceId, VertexId};
use crate::mesh::face::{dominant_axis, newell_normal, Face};
use crate::numeric::scalar::Scalar;
use crate::operations::Zero;

/// Vertex pool, edge table and faces of one input polyhedron. Immutable for
/// the lifetime of face division; all division state is per-face and
/// transient.
#[derive(Debug, Clone)]
pub struct Polyhedron<T: Scalar> {
    pub vertices: Vec<Point3<T>>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face<T>>,
}

impl<T: Scalar> Polyhedron<T> {
    pub fn point(&self, v: VertexId) -> &Point3<T> {
        &self.vertices[v.0 as usize]
    }

    pub fn edge(&self, e: EdgeId) -> &Edge {
        &self.edges[e.0 as usize]
    }

    pub fn face(&self, f: FaceId) -> &Face<T> {
        &self.faces[f.0 as usize]
    }

    /// Append a vertex to the pool; used by callers when inserting
    /// intersection vertices.
    pub fn add_vertex(&mut self, p: Point3<T>) -> VertexId {
        self.vertices.push(p);
        VertexId((self.vertices.len() - 1) as u32)
    }
}

impl<T: Scalar> Polyhedron<T>
where
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    /// Build a polyhedron from a vertex pool and per-face vertex cycles.
    /// Edges are unified across faces; the canonical direction of each edge
    /// is the direction of the first face that introduced it.
    pub fn from_faces(vertices: Vec<Point3<T>>, face_cycles: &[Vec<u32>]) -> Self {
        let mut edges: Vec<Edge> = Vec::new();
        let mut edge_map: AHashMap<(u32, u32), EdgeId> = AHashMap::new();
        let mut faces: Vec<Face<T>> = Vec::with_capacity(face_cycles.len());

        for cycle in face_cycles {
            assert!(cycle.len() >= 3, "face needs at least 3 vertices");
            let vs: Vec<VertexId> = cycle.iter().map(|&i| VertexId(i)).collect();
            let mut es = Vec::with_capacity(vs.len());
            for j in 0..vs.len() {
                let a = vs[j];
                let b = vs[(j + 1) % vs.len()];
                if a == b || vertices[a.0 as usize] == vertices[b.0 as usize] {
                    warn!(?a, ?b, "zero-length perimeter edge");
                }
                let key = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
                let id = match edge_map.get(&key) {
                    Some(&id) => id,
                    None => {
                        let id = EdgeId(edges.len() as u32);
                        edges.push(Edge { v1: a, v2: b });
                        edge_map.insert(key, id);
                        id
                    }
                };
                es.push(id);
            }

            let pts: Vec<&Point3<T>> = vs.iter().map(|&v| &vertices[v.0 as usize]).collect();
            let normal = newell_normal(&pts);
            if normal.x.is_zero() && normal.y.is_zero() && normal.z.is_zero() {
                warn!("degenerate face with zero normal");
            }
            let axis = dominant_axis(&normal);
            faces.push(Face {
                vertices: vs,
                edges: es,
                normal,
                axis,
            });
        }

        Polyhedron {
            vertices,
            edges,
            faces,
        }
    }
}
