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

use surfpath::geometry::{
    Cross2, Point2, Point3, PointOps, Segment2, SegmentOps, Vector2, VectorOps,
    interpolate_points, spatial_element::SpatialElement,
};

#[test]
fn point_distances() {
    let a = Point3::<f64>::from_vals([0.0, 0.0, 0.0]);
    let b = Point3::<f64>::from_vals([3.0, 4.0, 0.0]);

    assert_eq!(a.distance_squared_to(&b), 25.0);
    assert_eq!(a.distance_to(&b), 5.0);

    let m = a.midpoint(&b);
    assert_eq!(m, Point3::from_vals([1.5, 2.0, 0.0]));
}

#[test]
fn vector_dot_cross_norm() {
    let u = Vector2::<f64>::from_vals([1.0, 0.0]);
    let v = Vector2::<f64>::from_vals([0.0, 2.0]);

    assert_eq!(u.dot(&v), 0.0);
    assert_eq!(u.cross(&v), 2.0);
    assert_eq!(v.norm(), 2.0);

    let p = u.perp();
    assert_eq!(p, Vector2::from_vals([0.0, 1.0]));
}

#[test]
fn vector_scale_and_normalize() {
    let v = Vector2::<f64>::from_vals([3.0, 4.0]);
    assert_eq!(v.norm(), 5.0);

    let n = v.normalized();
    assert!((n.norm() - 1.0).abs() < 1e-12);

    let s = v.scale(&2.0);
    assert_eq!(s, Vector2::from_vals([6.0, 8.0]));
}

#[test]
fn segment_basics() {
    let s = Segment2::new(
        &Point2::<f64>::from_vals([0.0, 0.0]),
        &Point2::from_vals([2.0, 0.0]),
    );
    assert_eq!(s.length(), 2.0);
    assert_eq!(s.midpoint(), Point2::from_vals([1.0, 0.0]));
    assert_eq!(s.inverse().a, Point2::from_vals([2.0, 0.0]));
}

#[test]
fn interpolation_is_affine() {
    let a = Point2::<f64>::from_vals([1.0, 1.0]);
    let b = Point2::from_vals([3.0, 5.0]);

    assert_eq!(interpolate_points(&a, &b, &0.0), a);
    assert_eq!(interpolate_points(&a, &b, &1.0), b);
    assert_eq!(
        interpolate_points(&a, &b, &0.5),
        Point2::from_vals([2.0, 3.0])
    );
}

#[test]
fn vector_to_points_from_self_to_other() {
    let a = Point2::<f64>::from_vals([1.0, 2.0]);
    let b = Point2::from_vals([4.0, 6.0]);
    let v = a.vector_to(&b);
    assert_eq!(v.norm(), 5.0);
    assert_eq!(a.add_vector(&v), b);
}
