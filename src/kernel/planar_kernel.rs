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

use std::{cmp::Ordering, marker::PhantomData, ops::{Add, Div, Mul, Neg, Sub}};

use crate::{
    geometry::{
        Line2, Point2, Point3, PointOps, Ray2, Segment2, Triangle, Triangle2, Triangle3, Vector,
        VectorOps,
    },
    kernel::{
        kernel::{GeodesicKernel, Orientation, SegmentIntersection},
        predicates,
    },
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
    operations::{One, Sqrt, Trig, Zero},
    shortest_path::location::Barycentric,
};

/// The default kernel: inexact planar constructions with absolute
/// tolerance guards.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarKernel<T: Scalar> {
    _marker: PhantomData<T>,
}

impl<T: Scalar> PlanarKernel<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> PlanarKernel<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>
        + Neg<Output = T>,
{
    /// In-plane coordinates of `tri[edge + 2]` relative to the directed
    /// edge `tri[edge] -> tri[edge + 1]`: distance along the edge and
    /// (non-negative) distance from its line.
    fn apex_local_coords(tri: &Triangle3<T>, edge: usize) -> (T, T, T) {
        let p0 = &tri[edge % 3];
        let p1 = &tri[(edge + 1) % 3];
        let p2 = &tri[(edge + 2) % 3];

        let e = p0.vector_to(p1);
        let w = p0.vector_to(p2);
        let len = e.norm();
        if len.is_zero() {
            return (T::zero(), T::zero(), len);
        }
        let x = e.dot(&w) / len.clone();
        let y2 = &w.norm2() - &(&x * &x);
        let y = if y2.is_positive() { y2.sqrt() } else { T::zero() };
        (x, y, len)
    }
}

impl<T> GeodesicKernel for PlanarKernel<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>
        + Neg<Output = T>,
{
    type FT = T;

    fn project_triangle_3_to_triangle_2(&self, tri: &Triangle3<T>) -> Triangle2<T> {
        let (x, y, len) = Self::apex_local_coords(tri, 0);
        Triangle2::new(
            &Point2::from([T::zero(), T::zero()]),
            &Point2::from([len, T::zero()]),
            &Point2::from([x, y]),
        )
    }

    fn flatten_triangle_3_along_segment_2(
        &self,
        tri: &Triangle3<T>,
        edge_index: usize,
        base: &Segment2<T>,
    ) -> Triangle2<T> {
        let (x, y, _) = Self::apex_local_coords(tri, edge_index);

        let dir = base.a.vector_to(&base.b);
        let base_len = dir.norm();
        let u = if base_len.is_zero() {
            Vector::new([T::one(), T::zero()])
        } else {
            dir.scale(&(T::one() / base_len))
        };
        let v = u.perp();

        // The base segment and the 3D edge are the same mesh edge; map the
        // local coordinates through the base direction, apex to the left.
        let apex = base
            .a
            .add_vector(&u.scale(&x))
            .add_vector(&v.scale(&y));

        let mut corners = [
            Point2::from([T::zero(), T::zero()]),
            Point2::from([T::zero(), T::zero()]),
            Point2::from([T::zero(), T::zero()]),
        ];
        corners[edge_index % 3] = base.a.clone();
        corners[(edge_index + 1) % 3] = base.b.clone();
        corners[(edge_index + 2) % 3] = apex;
        Triangle(corners)
    }

    fn construct_triangle_location_2(
        &self,
        tri: &Triangle2<T>,
        location: &Barycentric<T>,
    ) -> Point2<T> {
        let weight = |i: usize| -> T {
            &(&tri[0][i] * &location[0])
                + &(&(&tri[1][i] * &location[1]) + &(&tri[2][i] * &location[2]))
        };
        Point2::from([weight(0), weight(1)])
    }

    fn construct_triangle_location_3(
        &self,
        tri: &Triangle3<T>,
        location: &Barycentric<T>,
    ) -> Point3<T> {
        let weight = |i: usize| -> T {
            &(&tri[0][i] * &location[0])
                + &(&(&tri[1][i] * &location[1]) + &(&tri[2][i] * &location[2]))
        };
        Point3::from([weight(0), weight(1), weight(2)])
    }

    fn intersect_segment_ray_2(
        &self,
        segment: &Segment2<T>,
        ray: &Ray2<T>,
    ) -> Option<SegmentIntersection<T>> {
        predicates::segment_ray_intersection_2(segment, ray, &T::tolerance())
    }

    fn intersect_segment_line_2(
        &self,
        segment: &Segment2<T>,
        line: &Line2<T>,
    ) -> Option<SegmentIntersection<T>> {
        predicates::segment_line_intersection_2(segment, line, &T::tolerance())
    }

    fn compute_squared_distance_2(&self, p: &Point2<T>, q: &Point2<T>) -> T {
        p.distance_squared_to(q)
    }

    fn parametric_distance_along_segment_2(
        &self,
        a: &Point2<T>,
        b: &Point2<T>,
        p: &Point2<T>,
    ) -> T {
        predicates::parametric_point_on_segment_2(a, b, p)
    }

    fn compare_relative_intersection_along_segment_2(
        &self,
        seg1: &Segment2<T>,
        line1: &Line2<T>,
        seg2: &Segment2<T>,
        line2: &Line2<T>,
    ) -> Ordering {
        let eps = T::tolerance();
        let t1 = predicates::line_parameter_along_segment_2(seg1, line1, &eps);
        let t2 = predicates::line_parameter_along_segment_2(seg2, line2, &eps);
        match (t1, t2) {
            (Some(t1), Some(t2)) => T::cmp_ref(&t1, &t2),
            _ => Ordering::Equal,
        }
    }

    fn orientation_2(&self, a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Orientation {
        predicates::orientation_2(a, b, c, &T::tolerance())
    }

    fn is_saddle_vertex(&self, mesh: &Mesh<T, 3>, v: usize) -> bool {
        let mut total = T::zero();

        for he in mesh.outgoing_half_edges(v) {
            if mesh.face_of(he).is_none() {
                continue;
            }
            // Wedge at v in face(he): between v -> target(he) and
            // v -> target(next(he)).
            let p = &mesh.vertices[v].position;
            let w = &mesh.vertices[mesh.target(he)].position;
            let x = &mesh.vertices[mesh.target(mesh.next(he))].position;

            let e1 = p.vector_to(w);
            let e2 = p.vector_to(x);
            let n1 = e1.norm();
            let n2 = e2.norm();
            if n1.is_zero() || n2.is_zero() {
                continue;
            }
            let cos = e1.dot(&e2) / (n1 * n2);
            total += &cos.acos();
        }

        total > T::from(std::f64::consts::TAU) + T::tolerance()
    }
}
