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
use std::ops::Sub;

use crate::geometry::Vector2;
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone)]
pub struct Point2<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Point2 {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Lexicographic order on (x, y); the tie-break order used by the
    /// reflex test in angular dispatch.
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        T::cmp_ref(&self.x, &other.x).then_with(|| T::cmp_ref(&self.y, &other.y))
    }
}

impl<T: Scalar> Point2<T>
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    pub fn sub(&self, other: &Self) -> Vector2<T> {
        Vector2 {
            x: &self.x - &other.x,
            y: &self.y - &other.y,
        }
    }
}

impl<T: Scalar> PartialEq for Point2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}
