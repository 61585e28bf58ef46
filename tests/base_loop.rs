use refacet::division::base_loop::assemble_base_loop;
use refacet::division::DivisionData;
use refacet::geometry::Point3;
use refacet::mesh::basic_types::{EdgeId, VertexId};
use refacet::mesh::polyhedron::Polyhedron;
use refacet::numeric::refacet_f64::RefacetF64;

fn p3(x: f64, y: f64, z: f64) -> Point3<RefacetF64> {
    Point3::new(RefacetF64(x), RefacetF64(y), RefacetF64(z))
}

fn v(i: u32) -> VertexId {
    VertexId(i)
}

#[test]
fn untouched_face_is_its_own_base_loop() {
    let poly = Polyhedron::from_faces(
        vec![p3(0.0, 0.0, 0.0), p3(1.0, 0.0, 0.0), p3(0.0, 1.0, 0.0)],
        &[vec![0, 1, 2]],
    );
    let data = DivisionData::new();
    let base = assemble_base_loop(&poly, &poly.faces[0], &data);
    assert_eq!(base, vec![v(0), v(1), v(2)]);
}

#[test]
fn divided_edge_interleaves_in_edge_direction() {
    // triangle with one intersection vertex M on edge AB
    let poly = Polyhedron::from_faces(
        vec![
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(0.0, 1.0, 0.0),
            p3(0.5, 0.0, 0.0), // M
        ],
        &[vec![0, 1, 2]],
    );
    let mut data = DivisionData::new();
    data.set_divided_edge(EdgeId(0), vec![v(3)]);

    let base = assemble_base_loop(&poly, &poly.faces[0], &data);
    assert_eq!(base, vec![v(0), v(3), v(1), v(2)]);
}

#[test]
fn shared_edge_reverses_for_the_second_face() {
    // two triangles share edge (1,2); the second face traverses it against
    // the canonical direction, so the chain comes out reversed there
    let poly = Polyhedron::from_faces(
        vec![
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(0.0, 1.0, 0.0),
            p3(1.0, 1.0, 0.0),
            p3(2.0 / 3.0, 1.0 / 3.0, 0.0), // M1
            p3(1.0 / 3.0, 2.0 / 3.0, 0.0), // M2
        ],
        &[vec![0, 1, 2], vec![2, 1, 3]],
    );
    // edge (1,2) is EdgeId(1): built by the first face, direction 1 -> 2
    assert_eq!(poly.edge(EdgeId(1)).v1, v(1));

    let mut data = DivisionData::new();
    data.set_divided_edge(EdgeId(1), vec![v(4), v(5)]);

    let base0 = assemble_base_loop(&poly, &poly.faces[0], &data);
    assert_eq!(base0, vec![v(0), v(1), v(4), v(5), v(2)]);

    let base1 = assemble_base_loop(&poly, &poly.faces[1], &data);
    assert_eq!(base1, vec![v(2), v(5), v(4), v(1), v(3)]);
}

#[test]
fn vmap_canonicalises_perimeter_vertices() {
    let poly = Polyhedron::from_faces(
        vec![
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(0.0, 1.0, 0.0),
            p3(0.0, 0.0, 0.0), // duplicate of vertex 0, unified by vmap
        ],
        &[vec![3, 1, 2]],
    );
    let mut data = DivisionData::new();
    data.vmap.insert(v(3), v(0));

    let base = assemble_base_loop(&poly, &poly.faces[0], &data);
    assert_eq!(base, vec![v(0), v(1), v(2)]);
}
