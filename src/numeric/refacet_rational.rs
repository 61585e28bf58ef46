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

use num_traits::ToPrimitive;

use rug::Rational;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
};

use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub},
};

/// Exact rational scalar. Every predicate evaluated over this type is
/// decided exactly; comparisons carry no tolerance.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct RefacetRational(pub Rational);

impl Scalar for RefacetRational {
    fn from_num_den(num: i32, den: i32) -> Self {
        RefacetRational(Rational::from((num, den)))
    }

    fn cmp_ref(a: &Self, b: &Self) -> Ordering {
        a.0.cmp(&b.0)
    }

    fn sign(&self) -> i8 {
        match self.0.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    fn tolerance() -> Self {
        RefacetRational(Rational::new())
    }

    fn approx_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<'a, 'b> Add<&'b RefacetRational> for &'a RefacetRational {
    type Output = RefacetRational;

    fn add(self, rhs: &'b RefacetRational) -> RefacetRational {
        // in-place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        RefacetRational(result)
    }
}

impl Add for RefacetRational {
    type Output = RefacetRational;
    fn add(self, rhs: RefacetRational) -> RefacetRational {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b RefacetRational> for &'a RefacetRational {
    type Output = RefacetRational;

    fn sub(self, rhs: &'b RefacetRational) -> RefacetRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        RefacetRational(result)
    }
}

impl Sub for RefacetRational {
    type Output = RefacetRational;
    fn sub(self, rhs: RefacetRational) -> RefacetRational {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b RefacetRational> for &'a RefacetRational {
    type Output = RefacetRational;

    fn mul(self, rhs: &'b RefacetRational) -> RefacetRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        RefacetRational(result)
    }
}

impl Mul for RefacetRational {
    type Output = RefacetRational;
    fn mul(self, rhs: RefacetRational) -> RefacetRational {
        &self * &rhs
    }
}

impl<'a, 'b> Div<&'b RefacetRational> for &'a RefacetRational {
    type Output = RefacetRational;

    fn div(self, rhs: &'b RefacetRational) -> RefacetRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        RefacetRational(result)
    }
}

impl Div for RefacetRational {
    type Output = RefacetRational;
    fn div(self, rhs: RefacetRational) -> RefacetRational {
        &self / &rhs
    }
}

impl Neg for RefacetRational {
    type Output = RefacetRational;
    fn neg(self) -> RefacetRational {
        RefacetRational(-self.0)
    }
}

impl<'a> Neg for &'a RefacetRational {
    type Output = RefacetRational;
    fn neg(self) -> RefacetRational {
        RefacetRational(-self.0.clone())
    }
}

impl<'a> AddAssign<&'a RefacetRational> for RefacetRational {
    fn add_assign(&mut self, rhs: &'a RefacetRational) {
        self.0 += &rhs.0;
    }
}

impl Abs for RefacetRational {
    fn abs(&self) -> Self {
        RefacetRational(self.0.clone().abs())
    }
}

impl Zero for RefacetRational {
    fn zero() -> Self {
        RefacetRational(Rational::new())
    }
    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }
    fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }
}

impl One for RefacetRational {
    fn one() -> Self {
        RefacetRational(Rational::from(1))
    }
}

impl From<i32> for RefacetRational {
    fn from(v: i32) -> Self {
        RefacetRational(Rational::from(v))
    }
}

impl From<f64> for RefacetRational {
    fn from(v: f64) -> Self {
        RefacetRational(Rational::from_f64(v).unwrap_or_default())
    }
}

impl From<Rational> for RefacetRational {
    fn from(v: Rational) -> Self {
        RefacetRational(v)
    }
}

impl ToPrimitive for RefacetRational {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0.to_f64() as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        let f = self.0.to_f64();
        if f < 0.0 { None } else { Some(f as u64) }
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}
