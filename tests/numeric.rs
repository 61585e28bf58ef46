use std::cmp::Ordering;

use refacet::numeric::lazy_exact::LazyExact;
use refacet::numeric::refacet_f64::RefacetF64;
use refacet::numeric::refacet_rational::RefacetRational;
use refacet::numeric::scalar::Scalar;
use refacet::operations::{One, Zero};

#[test]
fn lazy_exact_recovers_sign_lost_to_rounding() {
    // 1e17 + 1 - 1e17 rounds to zero in f64 but is exactly one
    let a = LazyExact::from_f64(1e17);
    let one = LazyExact::from_f64(1.0);
    let expr = &(&a + &one) - &a;

    assert_eq!(expr.approx(), 0.0);
    assert_eq!(expr.sign(), 1);
    assert!(expr.is_positive());
    assert!(expr > LazyExact::zero());

    // the double-only scalar cannot tell
    let f = &(&RefacetF64(1e17) + &RefacetF64(1.0)) - &RefacetF64(1e17);
    assert_eq!(f.sign(), 0);
}

#[test]
fn lazy_exact_is_memoized() {
    let x = LazyExact::from_f64(0.1);
    let y = LazyExact::from_f64(0.2);
    let s = &x + &y;
    assert!(!s.has_exact());
    let _ = s.exact();
    assert!(s.has_exact());
}

#[test]
fn lazy_exact_equality_is_exact() {
    let a = LazyExact::from_f64(0.5);
    let b = LazyExact::from_f64(0.25);
    let lhs = &a + &b;
    let rhs = &b + &a;
    assert_eq!(LazyExact::cmp_ref(&lhs, &rhs), Ordering::Equal);
    assert!(lhs == rhs);
}

#[test]
fn rational_arithmetic_is_exact() {
    let third: RefacetRational = Scalar::from_num_den(1, 3);
    let three = RefacetRational::from(3);
    assert_eq!(&third * &three, RefacetRational::one());

    let tenth: RefacetRational = Scalar::from_num_den(1, 10);
    let mut acc = RefacetRational::zero();
    for _ in 0..10 {
        acc += &tenth;
    }
    assert_eq!(acc, RefacetRational::one());
}

#[test]
fn f64_wrapper_orders_totally() {
    assert_eq!(
        RefacetF64::cmp_ref(&RefacetF64(-0.0), &RefacetF64(0.0)),
        Ordering::Less
    );
    assert_eq!(
        RefacetF64::cmp_ref(&RefacetF64(1.5), &RefacetF64(1.5)),
        Ordering::Equal
    );
    assert!(RefacetF64(2.0) > RefacetF64(1.0));
}

#[test]
fn sign_conventions_agree_across_scalars() {
    let f = RefacetF64(-3.5);
    let r = RefacetRational::from(-7) * Scalar::from_num_den(1, 2);
    let l = LazyExact::from_f64(-3.5);
    assert_eq!(f.sign(), -1);
    assert_eq!(r.sign(), -1);
    assert_eq!(l.sign(), -1);
    assert!(f.is_negative() && r.is_negative() && l.is_negative());
}
