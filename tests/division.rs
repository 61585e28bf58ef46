use refacet::division::holes::merge_faces_and_holes;
use refacet::division::{
    generate_face_loops, generate_face_loops_with, DivisionData, DivisionError, DivisionHooks,
};
use refacet::geometry::{Point2, Point3};
use refacet::kernel::predicates::signed_area;
use refacet::mesh::basic_types::{EdgeId, FaceId, FaceLoop, VertexId};
use refacet::mesh::polyhedron::Polyhedron;
use refacet::numeric::refacet_f64::RefacetF64;

fn p3(x: f64, y: f64, z: f64) -> Point3<RefacetF64> {
    Point3::new(RefacetF64(x), RefacetF64(y), RefacetF64(z))
}

fn v(i: u32) -> VertexId {
    VertexId(i)
}

/// rotate a simple cycle so its smallest handle comes first
fn cyc(l: &[VertexId]) -> Vec<VertexId> {
    let min = l
        .iter()
        .enumerate()
        .min_by_key(|&(_, &x)| x)
        .map(|(i, _)| i)
        .unwrap();
    let mut out = l[min..].to_vec();
    out.extend_from_slice(&l[..min]);
    out
}

/// multiset of directed edges over a set of loops, sorted for comparison
fn edge_multiset(loops: &[FaceLoop]) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for fl in loops {
        let l = &fl.vertices;
        for j in 0..l.len() {
            out.push((l[j].0, l[(j + 1) % l.len()].0));
        }
    }
    out.sort();
    out
}

fn loop_area(poly: &Polyhedron<RefacetF64>, face: FaceId, l: &[VertexId]) -> f64 {
    let f = poly.face(face);
    let pts: Vec<Point2<RefacetF64>> = l.iter().map(|&x| f.project(poly, x)).collect();
    signed_area(&pts).0
}

// a face with no intersection data passes through unchanged
#[test]
fn untouched_face_passes_through() {
    let poly = Polyhedron::from_faces(
        vec![p3(0.0, 0.0, 0.0), p3(1.0, 0.0, 0.0), p3(0.0, 1.0, 0.0)],
        &[vec![0, 1, 2]],
    );
    let out = generate_face_loops(&poly, &DivisionData::new());
    assert_eq!(out.loops.len(), 1);
    assert_eq!(out.loops[0].vertices, vec![v(0), v(1), v(2)]);
    assert_eq!(out.generated_edges, 3);
}

// a divided perimeter edge inserts its vertex into the output loop
#[test]
fn perimeter_split_inserts_vertex() {
    let poly = Polyhedron::from_faces(
        vec![
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(0.0, 1.0, 0.0),
            p3(0.5, 0.0, 0.0),
        ],
        &[vec![0, 1, 2]],
    );
    let mut data = DivisionData::new();
    data.set_divided_edge(EdgeId(0), vec![v(3)]);

    let out = generate_face_loops(&poly, &data);
    assert_eq!(out.loops.len(), 1);
    assert_eq!(out.loops[0].vertices, vec![v(0), v(3), v(1), v(2)]);
    assert_eq!(out.generated_edges, 4);
}

fn square_poly(extra: &[Point3<RefacetF64>]) -> Polyhedron<RefacetF64> {
    let mut pts = vec![
        p3(0.0, 0.0, 0.0),
        p3(2.0, 0.0, 0.0),
        p3(2.0, 2.0, 0.0),
        p3(0.0, 2.0, 0.0),
    ];
    pts.extend_from_slice(extra);
    Polyhedron::from_faces(pts, &[vec![0, 1, 2, 3]])
}

// a lone chord between two perimeter vertices makes two loops
#[test]
fn single_chord_splits_in_two() {
    let poly = square_poly(&[]);
    let mut data = DivisionData::new();
    data.add_face_split_edge(FaceId(0), v(1), v(3));

    let out = generate_face_loops(&poly, &data);
    assert_eq!(out.loops.len(), 2);

    let mut got: Vec<Vec<VertexId>> = out.loops.iter().map(|l| cyc(&l.vertices)).collect();
    got.sort();
    assert_eq!(got, vec![vec![v(0), v(1), v(3)], vec![v(1), v(2), v(3)]]);

    for l in &out.loops {
        assert!(loop_area(&poly, l.face, &l.vertices) > 0.0);
    }
    assert_eq!(out.generated_edges, 6);
}

// a closed interior cycle becomes a hole in the outer loop plus an island
#[test]
fn interior_loop_becomes_hole_and_island() {
    let poly = square_poly(&[
        p3(0.5, 0.5, 0.0), // P
        p3(0.5, 1.5, 0.0), // Q
        p3(1.5, 1.5, 0.0), // R
        p3(1.5, 0.5, 0.0), // S
    ]);
    let mut data = DivisionData::new();
    data.add_face_split_edge(FaceId(0), v(4), v(5));
    data.add_face_split_edge(FaceId(0), v(5), v(6));
    data.add_face_split_edge(FaceId(0), v(6), v(7));
    data.add_face_split_edge(FaceId(0), v(7), v(4));

    let out = generate_face_loops(&poly, &data);
    assert_eq!(out.loops.len(), 2);

    let island = out
        .loops
        .iter()
        .find(|l| l.vertices.len() == 4)
        .expect("island loop");
    let merged = out
        .loops
        .iter()
        .find(|l| l.vertices.len() > 4)
        .expect("merged loop");

    // the island covers the hole's interior, CCW
    assert_eq!(cyc(&island.vertices), vec![v(4), v(7), v(6), v(5)]);
    assert!((loop_area(&poly, island.face, &island.vertices) - 1.0).abs() < 1e-9);

    // the outer loop carries the hole: area(F) - area(PQRS), with the two
    // bridge endpoints appearing twice
    assert_eq!(merged.vertices.len(), 10);
    assert!((loop_area(&poly, merged.face, &merged.vertices) - 3.0).abs() < 1e-9);
    for i in 4..8 {
        assert!(merged.vertices.contains(&v(i)));
    }
}

// two chords meeting at one perimeter vertex cut three wedges
#[test]
fn chords_sharing_a_perimeter_vertex() {
    // P and Q lie on edge CD; both chords run to B
    let poly = square_poly(&[p3(1.5, 2.0, 0.0), p3(0.5, 2.0, 0.0)]);
    let mut data = DivisionData::new();
    data.set_divided_edge(EdgeId(2), vec![v(4), v(5)]); // C -> D order
    data.add_face_split_edge(FaceId(0), v(1), v(4));
    data.add_face_split_edge(FaceId(0), v(1), v(5));

    let out = generate_face_loops(&poly, &data);
    assert_eq!(out.loops.len(), 3);

    let mut got: Vec<Vec<VertexId>> = out.loops.iter().map(|l| cyc(&l.vertices)).collect();
    got.sort();
    assert_eq!(
        got,
        vec![
            vec![v(0), v(1), v(5), v(3)],
            vec![v(1), v(2), v(4)],
            vec![v(1), v(4), v(5)],
        ]
    );
    for l in &out.loops {
        assert!(loop_area(&poly, l.face, &l.vertices) > 0.0);
    }
}

// a dangling interior edge is kept as a zero-area slit
#[test]
fn dangling_path_is_embedded_as_slit() {
    let mut poly = square_poly(&[]);
    let p = poly.add_vertex(p3(1.0, 1.0, 0.0));
    assert_eq!(p, v(4));
    let mut data = DivisionData::new();
    data.add_face_split_edge(FaceId(0), v(1), v(4));

    let out = generate_face_loops(&poly, &data);
    assert_eq!(out.loops.len(), 1);

    let l = &out.loops[0].vertices;
    assert_eq!(l.len(), 6);
    assert_eq!(l.iter().filter(|&&x| x == v(1)).count(), 2);
    assert_eq!(l.iter().filter(|&&x| x == v(4)).count(), 1);
    // the slit contributes no area
    assert!((loop_area(&poly, out.loops[0].face, l) - 4.0).abs() < 1e-9);
}

// every directed perimeter edge and both directions of every interior
// segment appear in the output exactly once
#[test]
fn directed_edges_are_preserved() {
    let poly = square_poly(&[p3(1.5, 2.0, 0.0), p3(0.5, 2.0, 0.0)]);
    let mut data = DivisionData::new();
    data.set_divided_edge(EdgeId(2), vec![v(4), v(5)]);
    data.add_face_split_edge(FaceId(0), v(1), v(4));
    data.add_face_split_edge(FaceId(0), v(1), v(5));

    let out = generate_face_loops(&poly, &data);

    let mut expected: Vec<(u32, u32)> = vec![
        (0, 1),
        (1, 2),
        (2, 4),
        (4, 5),
        (5, 3),
        (3, 0),
        (1, 4),
        (4, 1),
        (1, 5),
        (5, 1),
    ];
    expected.sort();
    assert_eq!(edge_multiset(&out.loops), expected);
}

// the slit case preserves both directions of the dangling edge
#[test]
fn slit_preserves_both_directions_of_the_dangling_edge() {
    let poly = square_poly(&[p3(1.0, 1.0, 0.0)]);
    let mut data = DivisionData::new();
    data.add_face_split_edge(FaceId(0), v(1), v(4));

    let out = generate_face_loops(&poly, &data);

    let mut expected: Vec<(u32, u32)> =
        vec![(0, 1), (1, 2), (2, 3), (3, 0), (1, 4), (4, 1)];
    expected.sort();
    assert_eq!(edge_multiset(&out.loops), expected);
}

// loops of a clean split are simple and counter-clockwise
#[test]
fn loops_are_simple_and_ccw() {
    let poly = square_poly(&[]);
    let mut data = DivisionData::new();
    data.add_face_split_edge(FaceId(0), v(0), v(2));

    let out = generate_face_loops(&poly, &data);
    assert_eq!(out.loops.len(), 2);
    for l in &out.loops {
        let mut seen = l.vertices.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), l.vertices.len());
        assert!(loop_area(&poly, l.face, &l.vertices) > 0.0);
    }
}

// dividing the divided output changes nothing
#[test]
fn division_is_idempotent_after_one_pass() {
    let poly = square_poly(&[]);
    let mut data = DivisionData::new();
    data.add_face_split_edge(FaceId(0), v(1), v(3));
    let out = generate_face_loops(&poly, &data);

    let cycles: Vec<Vec<u32>> = out
        .loops
        .iter()
        .map(|l| l.vertices.iter().map(|x| x.0).collect())
        .collect();
    let again = Polyhedron::from_faces(poly.vertices.clone(), &cycles);
    let out2 = generate_face_loops(&again, &DivisionData::new());

    let a: Vec<Vec<VertexId>> = out.loops.iter().map(|l| cyc(&l.vertices)).collect();
    let b: Vec<Vec<VertexId>> = out2.loops.iter().map(|l| cyc(&l.vertices)).collect();
    assert_eq!(a, b);
}

// identical input produces byte-identical output
#[test]
fn output_is_deterministic() {
    let build = || {
        let poly = square_poly(&[p3(1.5, 2.0, 0.0), p3(0.5, 2.0, 0.0)]);
        let mut data = DivisionData::new();
        data.set_divided_edge(EdgeId(2), vec![v(4), v(5)]);
        data.add_face_split_edge(FaceId(0), v(1), v(4));
        data.add_face_split_edge(FaceId(0), v(1), v(5));
        generate_face_loops(&poly, &data)
    };
    let a = build();
    let b = build();
    assert_eq!(a.loops, b.loops);
    assert_eq!(a.generated_edges, b.generated_edges);
}

/// faces with no split entry are untouched even when other faces divide
#[test]
fn splits_stay_per_face() {
    let poly = Polyhedron::from_faces(
        vec![
            p3(0.0, 0.0, 0.0),
            p3(2.0, 0.0, 0.0),
            p3(2.0, 2.0, 0.0),
            p3(0.0, 2.0, 0.0),
            p3(0.0, 0.0, 2.0),
            p3(2.0, 0.0, 2.0),
        ],
        &[vec![0, 1, 2, 3], vec![0, 4, 5, 1]],
    );
    let mut data = DivisionData::new();
    data.add_face_split_edge(FaceId(0), v(1), v(3));

    let out = generate_face_loops(&poly, &data);
    let f0: Vec<_> = out.loops.iter().filter(|l| l.face == FaceId(0)).collect();
    let f1: Vec<_> = out.loops.iter().filter(|l| l.face == FaceId(1)).collect();
    assert_eq!(f0.len(), 2);
    assert_eq!(f1.len(), 1);
    assert_eq!(f1[0].vertices, vec![v(0), v(4), v(5), v(1)]);
}

#[derive(Default)]
struct Recorder {
    base_loops: usize,
    face_loops: usize,
}

impl DivisionHooks for Recorder {
    fn on_base_loop(&mut self, _face: FaceId, _l: &[VertexId]) {
        self.base_loops += 1;
    }
    fn on_face_loop(&mut self, _face: FaceId, _l: &[VertexId]) {
        self.face_loops += 1;
    }
}

#[test]
fn hooks_observe_without_affecting_output() {
    let poly = square_poly(&[]);
    let mut data = DivisionData::new();
    data.add_face_split_edge(FaceId(0), v(1), v(3));

    let mut rec = Recorder::default();
    let observed = generate_face_loops_with(&poly, &data, Some(&mut rec as &mut dyn DivisionHooks));
    let plain = generate_face_loops(&poly, &data);

    assert_eq!(rec.base_loops, 1);
    assert_eq!(rec.face_loops, 2);
    assert_eq!(observed.loops, plain.loops);
}

// two paths sharing both base-loop endpoints form a lens; the group must be
// reordered by increasing area so every emitted sub-loop comes out CCW
#[test]
fn paths_sharing_both_endpoints_order_by_area() {
    // both polylines run from B to D, one bowing toward A, one toward C;
    // the wider path is listed first so the area ordering has to reorder
    let poly = square_poly(&[p3(0.5, 0.5, 0.0), p3(1.5, 1.5, 0.0)]);
    let mut data = DivisionData::new();
    data.add_face_split_edge(FaceId(0), v(1), v(5));
    data.add_face_split_edge(FaceId(0), v(5), v(3));
    data.add_face_split_edge(FaceId(0), v(1), v(4));
    data.add_face_split_edge(FaceId(0), v(4), v(3));

    let out = generate_face_loops(&poly, &data);
    assert_eq!(out.loops.len(), 3);

    let mut got: Vec<Vec<VertexId>> = out.loops.iter().map(|l| cyc(&l.vertices)).collect();
    got.sort();
    assert_eq!(
        got,
        vec![
            vec![v(0), v(1), v(4), v(3)],
            vec![v(1), v(2), v(3), v(5)],
            vec![v(1), v(5), v(3), v(4)],
        ]
    );

    let mut total = 0.0;
    for l in &out.loops {
        let area = loop_area(&poly, l.face, &l.vertices);
        assert!(area > 0.0);
        total += area;
        if cyc(&l.vertices) == vec![v(1), v(5), v(3), v(4)] {
            // the lens between the two paths
            assert!((area - 2.0).abs() < 1e-9);
        } else {
            assert!((area - 1.0).abs() < 1e-9);
        }
    }
    assert!((total - 4.0).abs() < 1e-9);
}

fn hexagon_poly(extra: &[Point3<RefacetF64>]) -> Polyhedron<RefacetF64> {
    let mut pts = vec![
        p3(0.0, 1.0, 0.0),
        p3(2.0, 0.0, 0.0),
        p3(4.0, 1.0, 0.0),
        p3(4.0, 3.0, 0.0),
        p3(2.0, 4.0, 0.0),
        p3(0.0, 3.0, 0.0),
    ];
    pts.extend_from_slice(extra);
    Polyhedron::from_faces(pts, &[vec![0, 1, 2, 3, 4, 5]])
}

// interleaved crossing intervals cannot nest, so the crossing resolver
// declines and the driver retraces the whole edge graph instead
#[test]
fn interleaved_crossings_fall_back_to_graph_split() {
    // paths 1-6-3 and 2-7-4: their base-loop intervals partially overlap
    let poly = hexagon_poly(&[p3(3.0, 2.0, 0.0), p3(2.0, 2.0, 0.0)]);
    let mut data = DivisionData::new();
    data.add_face_split_edge(FaceId(0), v(1), v(6));
    data.add_face_split_edge(FaceId(0), v(6), v(3));
    data.add_face_split_edge(FaceId(0), v(2), v(7));
    data.add_face_split_edge(FaceId(0), v(7), v(4));

    let out = generate_face_loops(&poly, &data);

    // one edge-preserving tour of the whole graph, no loops lost
    assert_eq!(out.loops.len(), 1);
    assert_eq!(out.loops[0].vertices.len(), 14);
    assert!((loop_area(&poly, out.loops[0].face, &out.loops[0].vertices) - 12.0).abs() < 1e-9);

    let mut expected: Vec<(u32, u32)> = vec![
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 0),
        (1, 6),
        (6, 1),
        (3, 6),
        (6, 3),
        (2, 7),
        (7, 2),
        (4, 7),
        (7, 4),
    ];
    expected.sort();
    assert_eq!(edge_multiset(&out.loops), expected);
}

// a hole sharing every vertex of a face loop but none of its edges aborts
// division of that face
#[test]
fn hole_sharing_all_vertices_but_no_edge_is_fatal() {
    let poly = hexagon_poly(&[]);
    let face = &poly.faces[0];

    let mut face_loops = vec![vec![v(0), v(1), v(2), v(3), v(4), v(5)]];
    // same six handles rearranged so no two face-adjacent ones stay adjacent
    let hole_loops = vec![vec![v(0), v(2), v(5), v(3), v(1), v(4)]];

    let res = merge_faces_and_holes(&poly, face, &mut face_loops, hole_loops);
    assert_eq!(res, Err(DivisionError::DegenerateSharedHole));
}
