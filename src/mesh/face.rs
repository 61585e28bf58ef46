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
use std::ops::{Add, Mul, Sub};

use crate::geometry::{Point2, Point3, Vector3};
use crate::mesh::basic_types::{EdgeId, VertexId};
use crate::mesh::polyhedron::Polyhedron;
use crate::numeric::scalar::Scalar;
use crate::operations::Abs;

/// The dominant-axis projector of a face: drop the normal's largest
/// component and order the remaining two so that a front-facing CCW cycle
/// stays CCW in 2D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionAxis {
    XPos,
    XNeg,
    YPos,
    YNeg,
    ZPos,
    ZNeg,
}

/// A planar polygon of the input polyhedron: an ordered vertex cycle, the
/// parallel edge cycle, a (Newell) normal and the fixed projector derived
/// from it.
#[derive(Debug, Clone)]
pub struct Face<T: Scalar> {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
    pub normal: Vector3<T>,
    pub axis: ProjectionAxis,
}

impl<T: Scalar> Face<T> {
    /// Affine, orientation-preserving projection onto the face plane.
    pub fn project_point(&self, p: &Point3<T>) -> Point2<T> {
        match self.axis {
            ProjectionAxis::ZPos => Point2::new(p.x.clone(), p.y.clone()),
            ProjectionAxis::ZNeg => Point2::new(p.y.clone(), p.x.clone()),
            ProjectionAxis::XPos => Point2::new(p.y.clone(), p.z.clone()),
            ProjectionAxis::XNeg => Point2::new(p.z.clone(), p.y.clone()),
            ProjectionAxis::YPos => Point2::new(p.z.clone(), p.x.clone()),
            ProjectionAxis::YNeg => Point2::new(p.x.clone(), p.z.clone()),
        }
    }

    pub fn project(&self, poly: &Polyhedron<T>, v: VertexId) -> Point2<T> {
        self.project_point(poly.point(v))
    }
}

pub(crate) fn newell_normal<T: Scalar>(points: &[&Point3<T>]) -> Vector3<T>
where
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let mut n = Vector3::zero();
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        n.x += &(&(&a.y - &b.y) * &(&a.z + &b.z));
        n.y += &(&(&a.z - &b.z) * &(&a.x + &b.x));
        n.z += &(&(&a.x - &b.x) * &(&a.y + &b.y));
    }
    n
}

pub(crate) fn dominant_axis<T: Scalar>(n: &Vector3<T>) -> ProjectionAxis {
    let ax = n.x.abs();
    let ay = n.y.abs();
    let az = n.z.abs();
    if T::cmp_ref(&ax, &ay) != Ordering::Less && T::cmp_ref(&ax, &az) != Ordering::Less {
        if n.x.sign() >= 0 {
            ProjectionAxis::XPos
        } else {
            ProjectionAxis::XNeg
        }
    } else if T::cmp_ref(&ay, &az) != Ordering::Less {
        if n.y.sign() >= 0 {
            ProjectionAxis::YPos
        } else {
            ProjectionAxis::YNeg
        }
    } else if n.z.sign() >= 0 {
        ProjectionAxis::ZPos
    } else {
        ProjectionAxis::ZNeg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::refacet_f64::RefacetF64;

    fn p3(x: f64, y: f64, z: f64) -> Point3<RefacetF64> {
        Point3::new(RefacetF64(x), RefacetF64(y), RefacetF64(z))
    }

    #[test]
    fn newell_of_ccw_square_points_up() {
        let pts = [
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(1.0, 1.0, 0.0),
            p3(0.0, 1.0, 0.0),
        ];
        let refs: Vec<_> = pts.iter().collect();
        let n = newell_normal(&refs);
        assert!(n.z.0 > 0.0);
        assert_eq!(dominant_axis(&n), ProjectionAxis::ZPos);
    }

    #[test]
    fn downward_face_projects_mirrored() {
        let n = Vector3::new(RefacetF64(0.0), RefacetF64(0.0), RefacetF64(-2.0));
        assert_eq!(dominant_axis(&n), ProjectionAxis::ZNeg);
    }
}
