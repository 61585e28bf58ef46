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

/// Handle into a polyhedron's vertex pool. Vertex identity is handle
/// equality; coordinates are never compared during face division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u32);

/// Undirected edge. `v1 -> v2` is the canonical direction (the direction of
/// the first face that introduced the edge); a face traverses the edge
/// forward iff `v1` equals the face's vertex at that corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub v1: VertexId,
    pub v2: VertexId,
}

/// One emitted loop: a cycle of vertex handles bounding a sub-face of
/// `face`, counter-clockwise under the face's projector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceLoop {
    pub face: FaceId,
    pub vertices: Vec<VertexId>,
}

/// Everything `generate_face_loops` produces: the loops and the total
/// number of vertex handles emitted (one directed edge per handle), which
/// callers use as a size hint for downstream allocation.
#[derive(Debug, Clone, Default)]
pub struct GeneratedLoops {
    pub loops: Vec<FaceLoop>,
    pub generated_edges: usize,
}
