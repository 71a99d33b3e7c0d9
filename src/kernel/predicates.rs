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

use std::ops::{Add, Div, Mul, Sub};

use crate::{
    geometry::{
        Cross2, Line2, Point2, PointOps, Ray2, Segment2, VectorOps, interpolate_points,
    },
    kernel::kernel::{Orientation, SegmentIntersection},
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
};

/// Sign of the oriented area of (a, b, c): positive for a left turn.
pub fn orientation_sign<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    a.vector_to(b).cross(&a.vector_to(c))
}

pub fn orientation_2<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, eps: &T) -> Orientation
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let s = orientation_sign(a, b, c);
    if s.abs() <= *eps {
        Orientation::Collinear
    } else if s.is_positive() {
        Orientation::LeftTurn
    } else {
        Orientation::RightTurn
    }
}

/// Parameter of the orthogonal projection of `p` onto `a -> b`, clamped to
/// `[0, 1]`. Degenerate segments yield 0.
pub fn parametric_point_on_segment_2<T>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let e = a.vector_to(b);
    let n2 = e.norm2();
    if n2.is_zero() {
        return T::zero();
    }
    let t = a.vector_to(p).dot(&e) / n2;
    if t.is_negative() {
        T::zero()
    } else if t > T::one() {
        T::one()
    } else {
        t
    }
}

/// Parameter along `seg` (from `seg.a`) of the point where `line` crosses
/// the supporting line of `seg`. The parameter may lie outside `[0, 1]`.
/// `None` when the two lines are parallel.
pub fn line_parameter_along_segment_2<T>(seg: &Segment2<T>, line: &Line2<T>, eps: &T) -> Option<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let e = seg.a.vector_to(&seg.b);
    let d = line.a.vector_to(&line.b);
    let denom = d.cross(&e);
    if denom.abs() <= *eps {
        return None;
    }
    // seg.a + t e on the line <=> cross(d, seg.a + t e - line.a) = 0
    Some(d.cross(&seg.a.vector_to(&line.a)) / denom)
}

pub fn segment_line_intersection_2<T>(
    seg: &Segment2<T>,
    line: &Line2<T>,
    eps: &T,
) -> Option<SegmentIntersection<T>>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let e = seg.a.vector_to(&seg.b);
    let d = line.a.vector_to(&line.b);
    let denom = d.cross(&e);

    if denom.abs() <= *eps {
        // Parallel; overlapping when seg.a lies on the line.
        if d.cross(&line.a.vector_to(&seg.a)).abs() <= *eps {
            return Some(SegmentIntersection::Overlap(seg.clone()));
        }
        return None;
    }

    let t = d.cross(&seg.a.vector_to(&line.a)) / denom;
    let lo = -eps.clone();
    let hi = &T::one() + eps;
    if t < lo || t > hi {
        return None;
    }
    let t = clamp_unit(t);
    Some(SegmentIntersection::Point(interpolate_points(
        &seg.a, &seg.b, &t,
    )))
}

pub fn segment_ray_intersection_2<T>(
    seg: &Segment2<T>,
    ray: &Ray2<T>,
    eps: &T,
) -> Option<SegmentIntersection<T>>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let e = seg.a.vector_to(&seg.b);
    let r = ray.direction();
    let denom = r.cross(&e);

    if denom.abs() <= *eps {
        // Parallel; collinear when seg.a lies on the ray's line.
        if r.cross(&ray.source.vector_to(&seg.a)).abs() <= *eps {
            return collinear_ray_overlap(seg, ray, eps);
        }
        return None;
    }

    // ray.source + u r = seg.a + t e
    let w = ray.source.vector_to(&seg.a);
    let u = w.cross(&e) / denom.clone();
    let t = w.cross(&r) / denom;

    let lo = -eps.clone();
    let hi = &T::one() + eps;
    if u < lo || t < lo.clone() || t > hi {
        return None;
    }
    let t = clamp_unit(t);
    Some(SegmentIntersection::Point(interpolate_points(
        &seg.a, &seg.b, &t,
    )))
}

fn collinear_ray_overlap<T>(
    seg: &Segment2<T>,
    ray: &Ray2<T>,
    eps: &T,
) -> Option<SegmentIntersection<T>>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let r = ray.direction();
    let n2 = r.norm2();
    if n2.is_zero() {
        return None;
    }
    let ua = ray.source.vector_to(&seg.a).dot(&r) / n2.clone();
    let ub = ray.source.vector_to(&seg.b).dot(&r) / n2;
    let lo = -eps.clone();

    match (ua < lo, ub < lo.clone()) {
        (true, true) => None,
        (false, false) => Some(SegmentIntersection::Overlap(seg.clone())),
        _ => {
            // One endpoint behind the ray source: the overlap starts there.
            let clipped = Segment2::new(&ray.source, if ua < lo { &seg.b } else { &seg.a });
            if clipped.a == clipped.b {
                Some(SegmentIntersection::Point(clipped.a))
            } else {
                Some(SegmentIntersection::Overlap(clipped))
            }
        }
    }
}

fn clamp_unit<T: Scalar>(t: T) -> T {
    if t.is_negative() {
        T::zero()
    } else if t > T::one() {
        T::one()
    } else {
        t
    }
}
