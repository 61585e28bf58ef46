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

use thiserror::Error;

use crate::mesh::basic_types::VertexId;

/// Fatal per-face conditions. None of these cross a face boundary: the
/// driver catches them and emits the face's base loop unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DivisionError {
    /// The planar-graph walk reached a vertex with no outbound edge; the
    /// directed edge set handed to the splitter was not balanced.
    #[error("planar-graph walk reached vertex {0:?} with no outbound edge")]
    NoOutboundEdge(VertexId),

    /// A crossing path's recorded endpoint disagreed with the base loop
    /// while dividing it; the caller retries with the full graph splitter.
    #[error("crossing path does not line up with the base loop")]
    CrossingMismatch,

    /// A hole loop shares every vertex with a face loop yet no edge.
    #[error("hole loop shares every vertex with a face loop but no edge")]
    DegenerateSharedHole,
}
