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

use ahash::AHashMap;

use crate::mesh::basic_types::{EdgeId, FaceId, VertexId};

/// The caller-owned intersection bundle face division reads from.
///
/// `face_split_edges` keeps segments in insertion order; the emitted loop
/// sequence is deterministic given that order (snapshot tests rely on it).
#[derive(Debug, Clone, Default)]
pub struct DivisionData {
    /// vertex -> canonical vertex, applied as a single hop
    pub vmap: AHashMap<VertexId, VertexId>,
    /// edge -> intersection vertices strictly inside it, ordered in the
    /// edge's canonical direction
    pub divided_edges: AHashMap<EdgeId, Vec<VertexId>>,
    /// face -> intersection segments lying on that face (unordered vertex
    /// pairs)
    pub face_split_edges: AHashMap<FaceId, Vec<(VertexId, VertexId)>>,
}

impl DivisionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map_vertex(&self, v: VertexId) -> VertexId {
        self.vmap.get(&v).copied().unwrap_or(v)
    }

    pub fn set_divided_edge(&mut self, e: EdgeId, vs: Vec<VertexId>) {
        self.divided_edges.insert(e, vs);
    }

    pub fn add_face_split_edge(&mut self, f: FaceId, v1: VertexId, v2: VertexId) {
        self.face_split_edges.entry(f).or_default().push((v1, v2));
    }
}
