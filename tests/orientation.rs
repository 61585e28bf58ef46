use refacet::geometry::Point2;
use refacet::kernel::orientation::orient2d;
use refacet::numeric::refacet_f64::RefacetF64;

fn p(x: f64, y: f64) -> Point2<RefacetF64> {
    Point2::new(RefacetF64(x), RefacetF64(y))
}

#[test]
fn ccw_test() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 0.0);
    let c = p(0.0, 1.0);

    assert!(orient2d(&a, &b, &c).0 > 0.0); // Counter-clockwise
}

#[test]
fn cw_test() {
    let a = p(0.0, 0.0);
    let b = p(0.0, 1.0);
    let c = p(1.0, 0.0);

    assert!(orient2d(&a, &b, &c).0 < 0.0);
}

#[test]
fn collinear_test() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 1.0);
    let c = p(2.0, 2.0);

    assert_eq!(orient2d(&a, &b, &c).0, 0.0);
}

#[test]
fn orientation_is_antisymmetric() {
    let a = p(0.3, 0.7);
    let b = p(2.0, 0.1);
    let c = p(1.1, 1.9);

    let ab = orient2d(&a, &b, &c).0;
    let ba = orient2d(&b, &a, &c).0;
    assert_eq!(ab, -ba);
}
