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

use crate::division::data::DivisionData;
use crate::mesh::basic_types::VertexId;
use crate::mesh::face::Face;
use crate::mesh::polyhedron::Polyhedron;
use crate::numeric::scalar::Scalar;

/// Assemble the base loop of a face: the original perimeter cycle with
/// every vertex created by an intersection crossing one of its edges
/// interleaved at its position along the perimeter.
///
/// Face vertex and edge cycles run in parallel, so the divided-edge chain
/// for edge `j` is spliced in after vertex `j`: forward when the face
/// traverses the edge in its canonical direction, reversed otherwise.
pub fn assemble_base_loop<T: Scalar>(
    poly: &Polyhedron<T>,
    face: &Face<T>,
    data: &DivisionData,
) -> Vec<VertexId> {
    let mut base_loop = Vec::with_capacity(face.vertices.len());

    for j in 0..face.vertices.len() {
        base_loop.push(data.map_vertex(face.vertices[j]));

        if let Some(ev) = data.divided_edges.get(&face.edges[j]) {
            if poly.edge(face.edges[j]).v1 == face.vertices[j] {
                // edge is forward
                base_loop.extend(ev.iter().copied());
            } else {
                // edge is backward
                base_loop.extend(ev.iter().rev().copied());
            }
        }
    }

    base_loop
}
