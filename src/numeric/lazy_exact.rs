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

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};
use std::sync::Arc;

use num_traits::ToPrimitive;
use once_cell::sync::OnceCell;
use rug::Rational;

use crate::geometry::util::EPS;
use crate::numeric::scalar::Scalar;
use crate::operations::{Abs, One, Zero};

/// A lazily-evaluated scalar expression:
/// - Stores a cheap f64 approximation eagerly
/// - Computes the exact rational only on demand, memoized
///
/// Expression nodes are immutable and shared via `Arc`, so cloning a value
/// is cheap and common subexpressions are evaluated exactly at most once.
#[derive(Clone)]
pub struct LazyExact(Arc<Node>);

struct Node {
    kind: Kind,
    approx: OnceCell<f64>,
    exact: OnceCell<Rational>,
}

#[derive(Clone)]
enum Kind {
    LeafApprox(f64),
    LeafExact(Arc<Rational>),
    Add(LazyExact, LazyExact),
    Sub(LazyExact, LazyExact),
    Mul(LazyExact, LazyExact),
    Div(LazyExact, LazyExact),
    Neg(LazyExact),
}

impl LazyExact {
    pub fn from_f64(v: f64) -> Self {
        LazyExact(Arc::new(Node {
            kind: Kind::LeafApprox(v),
            approx: {
                let cell = OnceCell::new();
                let _ = cell.set(v);
                cell
            },
            exact: OnceCell::new(),
        }))
    }

    pub fn from_i32(v: i32) -> Self {
        Self::from_rational(Rational::from(v))
    }

    pub fn from_rational(r: Rational) -> Self {
        let approx = r.to_f64();
        let exact = Arc::new(r);
        LazyExact(Arc::new(Node {
            kind: Kind::LeafExact(exact.clone()),
            approx: {
                let cell = OnceCell::new();
                let _ = cell.set(approx);
                cell
            },
            exact: {
                let cell = OnceCell::new();
                let _ = cell.set((*exact).clone());
                cell
            },
        }))
    }

    /// Cheap approximate value (always available, memoized).
    pub fn approx(&self) -> f64 {
        *self.0.approx.get_or_init(|| match &self.0.kind {
            Kind::LeafApprox(a) => *a,
            Kind::LeafExact(e) => e.to_f64(),
            Kind::Add(a, b) => a.approx() + b.approx(),
            Kind::Sub(a, b) => a.approx() - b.approx(),
            Kind::Mul(a, b) => a.approx() * b.approx(),
            Kind::Div(a, b) => a.approx() / b.approx(),
            Kind::Neg(x) => -x.approx(),
        })
    }

    /// Exact value; computed lazily and cached.
    pub fn exact(&self) -> Rational {
        if let Some(v) = self.0.exact.get() {
            return v.clone();
        }
        let v = match &self.0.kind {
            Kind::LeafApprox(a) => Rational::from_f64(*a).unwrap_or_default(),
            Kind::LeafExact(e_arc) => Rational::clone(Arc::as_ref(e_arc)),
            Kind::Add(a, b) => {
                let mut r = a.exact();
                r += b.exact();
                r
            }
            Kind::Sub(a, b) => {
                let mut r = a.exact();
                r -= b.exact();
                r
            }
            Kind::Mul(a, b) => {
                let mut r = a.exact();
                r *= b.exact();
                r
            }
            Kind::Div(a, b) => {
                let denom = b.exact();
                assert!(
                    denom.cmp0() != Ordering::Equal,
                    "LazyExact: division by zero in exact()"
                );
                let mut r = a.exact();
                r /= denom;
                r
            }
            Kind::Neg(x) => -x.exact(),
        };
        let _ = self.0.exact.set(v.clone());
        v
    }

    /// Sign with lazy exact fallback: if the approximation is clear of zero
    /// by more than the tolerance, trust it; otherwise decide exactly.
    /// Returns -1, 0, or +1.
    pub fn sign(&self) -> i8 {
        let a = self.approx();
        if a.abs() > EPS {
            return if a > 0.0 { 1 } else { -1 };
        }
        match self.exact().cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub fn has_exact(&self) -> bool {
        self.0.exact.get().is_some()
    }

    #[inline]
    fn new(kind: Kind) -> Self {
        // Seed approx eagerly to maximize early pruning in predicates
        let approx = match &kind {
            Kind::LeafApprox(a) => *a,
            Kind::LeafExact(e) => e.to_f64(),
            Kind::Add(a, b) => a.approx() + b.approx(),
            Kind::Sub(a, b) => a.approx() - b.approx(),
            Kind::Mul(a, b) => a.approx() * b.approx(),
            Kind::Div(a, b) => a.approx() / b.approx(),
            Kind::Neg(x) => -x.approx(),
        };
        LazyExact(Arc::new(Node {
            kind,
            approx: {
                let cell = OnceCell::new();
                let _ = cell.set(approx);
                cell
            },
            exact: OnceCell::new(),
        }))
    }
}

/* ========= Operator overloads (build expression DAGs) ========= */

impl Add for LazyExact {
    type Output = LazyExact;
    fn add(self, rhs: LazyExact) -> LazyExact {
        LazyExact::new(Kind::Add(self, rhs))
    }
}

impl<'a, 'b> Add<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn add(self, rhs: &'b LazyExact) -> LazyExact {
        LazyExact::new(Kind::Add(self.clone(), rhs.clone()))
    }
}

impl Sub for LazyExact {
    type Output = LazyExact;
    fn sub(self, rhs: LazyExact) -> LazyExact {
        LazyExact::new(Kind::Sub(self, rhs))
    }
}

impl<'a, 'b> Sub<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn sub(self, rhs: &'b LazyExact) -> LazyExact {
        LazyExact::new(Kind::Sub(self.clone(), rhs.clone()))
    }
}

impl Mul for LazyExact {
    type Output = LazyExact;
    fn mul(self, rhs: LazyExact) -> LazyExact {
        LazyExact::new(Kind::Mul(self, rhs))
    }
}

impl<'a, 'b> Mul<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn mul(self, rhs: &'b LazyExact) -> LazyExact {
        LazyExact::new(Kind::Mul(self.clone(), rhs.clone()))
    }
}

impl Div for LazyExact {
    type Output = LazyExact;
    fn div(self, rhs: LazyExact) -> LazyExact {
        LazyExact::new(Kind::Div(self, rhs))
    }
}

impl<'a, 'b> Div<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn div(self, rhs: &'b LazyExact) -> LazyExact {
        LazyExact::new(Kind::Div(self.clone(), rhs.clone()))
    }
}

impl Neg for LazyExact {
    type Output = LazyExact;
    fn neg(self) -> LazyExact {
        LazyExact::new(Kind::Neg(self))
    }
}

impl<'a> Neg for &'a LazyExact {
    type Output = LazyExact;
    fn neg(self) -> LazyExact {
        LazyExact::new(Kind::Neg(self.clone()))
    }
}

impl<'a> AddAssign<&'a LazyExact> for LazyExact {
    fn add_assign(&mut self, rhs: &'a LazyExact) {
        *self = LazyExact::new(Kind::Add(self.clone(), rhs.clone()));
    }
}

/* ========= Comparisons via exact-gated sign ========= */

impl PartialEq for LazyExact {
    fn eq(&self, other: &Self) -> bool {
        LazyExact::sign(&(self - other)) == 0
    }
}

impl PartialOrd for LazyExact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(match LazyExact::sign(&(self - other)) {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        })
    }
}

/* ========= Capability traits ========= */

impl Abs for LazyExact {
    fn abs(&self) -> Self {
        if LazyExact::sign(self) < 0 { -self } else { self.clone() }
    }
}

impl Zero for LazyExact {
    fn zero() -> Self {
        LazyExact::from_i32(0)
    }
    fn is_zero(&self) -> bool {
        LazyExact::sign(self) == 0
    }
    fn is_positive(&self) -> bool {
        LazyExact::sign(self) > 0
    }
    fn is_negative(&self) -> bool {
        LazyExact::sign(self) < 0
    }
}

impl One for LazyExact {
    fn one() -> Self {
        LazyExact::from_i32(1)
    }
}

impl Scalar for LazyExact {
    fn from_num_den(num: i32, den: i32) -> Self {
        Self::from_rational(Rational::from((num, den)))
    }

    fn cmp_ref(a: &Self, b: &Self) -> Ordering {
        match LazyExact::sign(&(a - b)) {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }

    fn sign(&self) -> i8 {
        LazyExact::sign(self)
    }

    fn tolerance() -> Self {
        LazyExact::from_f64(EPS)
    }

    fn approx_eq(&self, other: &Self) -> bool {
        (self.approx() - other.approx()).abs() < EPS
    }
}

/* ========= Conversions ========= */

impl From<f64> for LazyExact {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}

impl From<i32> for LazyExact {
    fn from(v: i32) -> Self {
        Self::from_i32(v)
    }
}

impl From<Rational> for LazyExact {
    fn from(v: Rational) -> Self {
        Self::from_rational(v)
    }
}

impl ToPrimitive for LazyExact {
    fn to_i64(&self) -> Option<i64> {
        Some(self.approx() as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        let f = self.approx();
        if f < 0.0 { None } else { Some(f as u64) }
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.approx())
    }
}

/* ========= Debug ========= */

impl fmt::Debug for LazyExact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show approx eagerly; exact only if already realized
        let a = self.approx();
        if let Some(e) = self.0.exact.get() {
            write!(f, "LazyExact(approx={:.6}, exact={:?})", a, e)
        } else {
            write!(f, "LazyExact(approx={:.6}, exact=<lazy>)", a)
        }
    }
}
