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

use crate::{
    geometry::util::EPS,
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
};

use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub},
};

/// Plain double-precision scalar. Fast, inexact; the tolerance in
/// `approx_eq` is the only concession to rounding.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct RefacetF64(pub f64);

impl Scalar for RefacetF64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        RefacetF64(num as f64 / den as f64)
    }

    #[inline(always)]
    fn cmp_ref(a: &Self, b: &Self) -> Ordering {
        // total_cmp handles -0.0 and NaN deterministically
        a.0.total_cmp(&b.0)
    }

    fn tolerance() -> Self {
        Self(EPS)
    }

    fn approx_eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < EPS
    }
}

impl<'a, 'b> Add<&'b RefacetF64> for &'a RefacetF64 {
    type Output = RefacetF64;

    fn add(self, rhs: &'b RefacetF64) -> RefacetF64 {
        RefacetF64(self.0 + rhs.0)
    }
}

impl Add for RefacetF64 {
    type Output = RefacetF64;
    fn add(self, rhs: RefacetF64) -> RefacetF64 {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b RefacetF64> for &'a RefacetF64 {
    type Output = RefacetF64;

    fn sub(self, rhs: &'b RefacetF64) -> RefacetF64 {
        RefacetF64(self.0 - rhs.0)
    }
}

impl Sub for RefacetF64 {
    type Output = RefacetF64;
    fn sub(self, rhs: RefacetF64) -> RefacetF64 {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b RefacetF64> for &'a RefacetF64 {
    type Output = RefacetF64;

    fn mul(self, rhs: &'b RefacetF64) -> RefacetF64 {
        RefacetF64(self.0 * rhs.0)
    }
}

impl Mul for RefacetF64 {
    type Output = RefacetF64;
    fn mul(self, rhs: RefacetF64) -> RefacetF64 {
        &self * &rhs
    }
}

impl<'a, 'b> Div<&'b RefacetF64> for &'a RefacetF64 {
    type Output = RefacetF64;

    fn div(self, rhs: &'b RefacetF64) -> RefacetF64 {
        RefacetF64(self.0 / rhs.0)
    }
}

impl Div for RefacetF64 {
    type Output = RefacetF64;
    fn div(self, rhs: RefacetF64) -> RefacetF64 {
        &self / &rhs
    }
}

impl Neg for RefacetF64 {
    type Output = RefacetF64;
    fn neg(self) -> RefacetF64 {
        RefacetF64(-self.0)
    }
}

impl<'a> Neg for &'a RefacetF64 {
    type Output = RefacetF64;
    fn neg(self) -> RefacetF64 {
        RefacetF64(-self.0)
    }
}

impl<'a> AddAssign<&'a RefacetF64> for RefacetF64 {
    fn add_assign(&mut self, rhs: &'a RefacetF64) {
        self.0 += rhs.0;
    }
}

impl Abs for RefacetF64 {
    fn abs(&self) -> Self {
        RefacetF64(self.0.abs())
    }
}

impl Zero for RefacetF64 {
    fn zero() -> Self {
        RefacetF64(0.0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
    fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
    fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl One for RefacetF64 {
    fn one() -> Self {
        RefacetF64(1.0)
    }
}

impl From<i32> for RefacetF64 {
    fn from(v: i32) -> Self {
        RefacetF64(v as f64)
    }
}

impl From<f64> for RefacetF64 {
    fn from(v: f64) -> Self {
        RefacetF64(v)
    }
}

impl ToPrimitive for RefacetF64 {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0 as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        if self.0 < 0.0 { None } else { Some(self.0 as u64) }
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}
