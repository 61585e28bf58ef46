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

use ahash::{AHashMap, AHashSet};

use crate::mesh::basic_types::VertexId;

/// Contract an unordered set of interior segments into maximal paths and
/// residual closed loops.
///
/// A vertex is an endpoint iff its degree differs from 2, or it appears in
/// `extra_endpoints` (here: the base loop) while also carrying interior
/// edges. Paths run endpoint to endpoint; whatever remains after path
/// extraction is degree-2 everywhere and decomposes into loops, each
/// returned with its first vertex repeated at the end.
///
/// Every edge lands in exactly one path or loop. Neighbor choice follows
/// first-appearance order, so the output is deterministic in the input
/// ordering.
pub fn compose_edges_into_paths(
    edges: &[(VertexId, VertexId)],
    extra_endpoints: &[VertexId],
) -> (Vec<Vec<VertexId>>, Vec<Vec<VertexId>>) {
    let mut graph: AHashMap<VertexId, Vec<VertexId>> = AHashMap::new();
    let mut order: Vec<VertexId> = Vec::new();

    for &(a, b) in edges {
        if !graph.contains_key(&a) {
            order.push(a);
        }
        graph.entry(a).or_default().push(b);
        if !graph.contains_key(&b) {
            order.push(b);
        }
        graph.entry(b).or_default().push(a);
    }

    let mut endpoints: Vec<VertexId> = Vec::new();
    let mut endpoint_set: AHashSet<VertexId> = AHashSet::new();
    for &v in &order {
        if graph[&v].len() != 2 && endpoint_set.insert(v) {
            endpoints.push(v);
        }
    }
    for &v in extra_endpoints {
        if graph.contains_key(&v) && endpoint_set.insert(v) {
            endpoints.push(v);
        }
    }

    let mut paths: Vec<Vec<VertexId>> = Vec::new();
    let mut qi = 0;
    while qi < endpoints.len() {
        let start = endpoints[qi];
        if !graph.contains_key(&start) {
            qi += 1;
            continue;
        }

        let mut path = vec![start];
        let mut v = start;
        loop {
            let n = graph[&v][0];
            remove_link(&mut graph, v, n);
            v = n;
            path.push(v);
            if v == path[0] || !graph.contains_key(&v) || endpoint_set.contains(&v) {
                break;
            }
        }
        debug_assert!(endpoint_set.contains(path.last().unwrap()));
        paths.push(path);
    }

    // now only degree-2 cycles remain in the graph
    let mut loops: Vec<Vec<VertexId>> = Vec::new();
    for &v0 in &order {
        while graph.contains_key(&v0) {
            debug_assert_eq!(graph[&v0].len(), 2);
            let mut path = vec![v0];
            let mut v = v0;
            loop {
                let n = graph[&v][0];
                remove_link(&mut graph, v, n);
                v = n;
                path.push(v);
                if v == path[0] {
                    break;
                }
            }
            loops.push(path);
        }
    }

    (paths, loops)
}

fn remove_link(graph: &mut AHashMap<VertexId, Vec<VertexId>>, a: VertexId, b: VertexId) {
    if let Some(list) = graph.get_mut(&a) {
        if let Some(pos) = list.iter().position(|&x| x == b) {
            list.remove(pos);
        }
        if list.is_empty() {
            graph.remove(&a);
        }
    }
    if let Some(list) = graph.get_mut(&b) {
        if let Some(pos) = list.iter().position(|&x| x == a) {
            list.remove(pos);
        }
        if list.is_empty() {
            graph.remove(&b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: u32) -> VertexId {
        VertexId(i)
    }

    #[test]
    fn single_chain_between_extra_endpoints() {
        // 0 - 1 - 2, with 0 and 2 on the base loop
        let edges = [(v(0), v(1)), (v(1), v(2))];
        let (paths, loops) = compose_edges_into_paths(&edges, &[v(0), v(2)]);
        assert_eq!(paths, vec![vec![v(0), v(1), v(2)]]);
        assert!(loops.is_empty());
    }

    #[test]
    fn closed_square_is_one_loop() {
        let edges = [(v(0), v(1)), (v(1), v(2)), (v(2), v(3)), (v(3), v(0))];
        let (paths, loops) = compose_edges_into_paths(&edges, &[]);
        assert!(paths.is_empty());
        assert_eq!(loops.len(), 1);
        let lp = &loops[0];
        assert_eq!(lp.first(), lp.last());
        assert_eq!(lp.len(), 5);
    }

    #[test]
    fn branch_vertex_splits_paths() {
        // a Y: 0-1, 1-2, 1-3; vertex 1 has degree 3
        let edges = [(v(0), v(1)), (v(1), v(2)), (v(1), v(3))];
        let (paths, loops) = compose_edges_into_paths(&edges, &[]);
        assert!(loops.is_empty());
        let total_edges: usize = paths.iter().map(|p| p.len() - 1).sum();
        assert_eq!(total_edges, 3);
        for p in &paths {
            assert!(p.len() >= 2);
        }
    }

    #[test]
    fn dangling_edge_from_base_loop() {
        let edges = [(v(7), v(9))];
        let (paths, loops) = compose_edges_into_paths(&edges, &[v(7)]);
        assert_eq!(paths.len(), 1);
        assert!(loops.is_empty());
        assert_eq!(paths[0].len(), 2);
    }
}
