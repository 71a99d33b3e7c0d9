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

mod common;

use common::{bary, p3, saddle_fan};
use surfpath::geometry::{
    Line2, Point2, PointOps, Ray2, Segment2, Triangle3, spatial_element::SpatialElement,
};
use surfpath::kernel::{GeodesicKernel, Orientation, PlanarKernel, SegmentIntersection};
use surfpath::shortest_path::{BarycentricType, classify_barycentric};

fn p2(x: f64, y: f64) -> Point2<f64> {
    Point2::from_vals([x, y])
}

fn seg(a: Point2<f64>, b: Point2<f64>) -> Segment2<f64> {
    Segment2::new(&a, &b)
}

#[test]
fn projection_is_isometric_and_ccw() {
    let kernel = PlanarKernel::<f64>::new();
    let tri = Triangle3::new(&p3(1.0, 2.0, 3.0), &p3(4.0, 2.0, 7.0), &p3(1.0, 5.0, 3.0));
    let flat = kernel.project_triangle_3_to_triangle_2(&tri);

    assert_eq!(flat[0], p2(0.0, 0.0));
    assert!(flat[1][1].abs() < 1e-12);
    assert!(flat[2][1] > 0.0);

    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
        let d3 = tri[i].distance_to(&tri[j]);
        let d2 = flat[i].distance_to(&flat[j]);
        assert!((d3 - d2).abs() < 1e-9, "edge ({},{}) length changed", i, j);
    }
}

#[test]
fn flattening_shares_the_base_and_unfolds_left() {
    let kernel = PlanarKernel::<f64>::new();
    let tri = Triangle3::new(&p3(0.0, 0.0, 0.0), &p3(2.0, 0.0, 0.0), &p3(1.0, 1.5, 0.5));
    let base = seg(p2(3.0, 1.0), p2(5.0, 1.0));
    let flat = kernel.flatten_triangle_3_along_segment_2(&tri, 0, &base);

    assert_eq!(flat[0], base.a);
    assert_eq!(flat[1], base.b);
    // apex to the left of the base direction
    assert!(flat[2][1] > 1.0);

    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
        let d3 = tri[i].distance_to(&tri[j]);
        let d2 = flat[i].distance_to(&flat[j]);
        assert!((d3 - d2).abs() < 1e-9);
    }
}

#[test]
fn segment_ray_intersection_cases() {
    let kernel = PlanarKernel::<f64>::new();
    let s = seg(p2(0.0, 1.0), p2(2.0, 1.0));

    // proper crossing
    let hit = kernel.intersect_segment_ray_2(&s, &Ray2::new(&p2(1.0, 0.0), &p2(1.0, 2.0)));
    assert_eq!(hit, Some(SegmentIntersection::Point(p2(1.0, 1.0))));

    // ray pointing away
    let miss = kernel.intersect_segment_ray_2(&s, &Ray2::new(&p2(1.0, 0.0), &p2(1.0, -1.0)));
    assert_eq!(miss, None);

    // parallel, off the line
    let parallel = kernel.intersect_segment_ray_2(&s, &Ray2::new(&p2(0.0, 0.0), &p2(1.0, 0.0)));
    assert_eq!(parallel, None);

    // collinear overlap
    let overlap = kernel.intersect_segment_ray_2(&s, &Ray2::new(&p2(-1.0, 1.0), &p2(0.0, 1.0)));
    assert!(matches!(overlap, Some(SegmentIntersection::Overlap(_))));

    // endpoint graze
    let graze = kernel.intersect_segment_ray_2(&s, &Ray2::new(&p2(0.0, 0.0), &p2(0.0, 1.0)));
    assert_eq!(graze, Some(SegmentIntersection::Point(p2(0.0, 1.0))));
}

#[test]
fn segment_line_intersection_ignores_direction() {
    let kernel = PlanarKernel::<f64>::new();
    let s = seg(p2(0.0, 1.0), p2(2.0, 1.0));

    // the line's points sit below the segment on both sides; a ray from
    // either would miss, the line still crosses
    let hit = kernel.intersect_segment_line_2(&s, &Line2::new(&p2(0.5, 0.0), &p2(0.5, -3.0)));
    assert_eq!(hit, Some(SegmentIntersection::Point(p2(0.5, 1.0))));

    let miss = kernel.intersect_segment_line_2(&s, &Line2::new(&p2(0.0, 0.0), &p2(1.0, 0.0)));
    assert_eq!(miss, None);
}

#[test]
fn parametric_distance_clamps_to_unit_interval() {
    let kernel = PlanarKernel::<f64>::new();
    let a = p2(0.0, 0.0);
    let b = p2(2.0, 0.0);

    assert_eq!(kernel.parametric_distance_along_segment_2(&a, &b, &p2(0.5, 0.0)), 0.25);
    assert_eq!(kernel.parametric_distance_along_segment_2(&a, &b, &p2(-1.0, 0.0)), 0.0);
    assert_eq!(kernel.parametric_distance_along_segment_2(&a, &b, &p2(3.0, 0.0)), 1.0);
    // off-segment points project orthogonally
    assert_eq!(kernel.parametric_distance_along_segment_2(&a, &b, &p2(1.0, 5.0)), 0.5);
}

#[test]
fn relative_intersections_compare_along_the_shared_edge() {
    let kernel = PlanarKernel::<f64>::new();
    let s = seg(p2(0.0, 0.0), p2(4.0, 0.0));

    let left = Line2::new(&p2(1.0, -1.0), &p2(1.0, 1.0));
    let right = Line2::new(&p2(3.0, -1.0), &p2(3.0, 1.0));

    assert_eq!(
        kernel.compare_relative_intersection_along_segment_2(&s, &left, &s, &right),
        std::cmp::Ordering::Less
    );
    assert_eq!(
        kernel.compare_relative_intersection_along_segment_2(&s, &right, &s, &left),
        std::cmp::Ordering::Greater
    );
    assert_eq!(
        kernel.compare_relative_intersection_along_segment_2(&s, &left, &s, &left),
        std::cmp::Ordering::Equal
    );
}

#[test]
fn orientation_predicate() {
    let kernel = PlanarKernel::<f64>::new();
    assert_eq!(
        kernel.orientation_2(&p2(0.0, 0.0), &p2(1.0, 0.0), &p2(0.0, 1.0)),
        Orientation::LeftTurn
    );
    assert_eq!(
        kernel.orientation_2(&p2(0.0, 0.0), &p2(1.0, 0.0), &p2(0.0, -1.0)),
        Orientation::RightTurn
    );
    assert_eq!(
        kernel.orientation_2(&p2(0.0, 0.0), &p2(1.0, 0.0), &p2(2.0, 0.0)),
        Orientation::Collinear
    );
}

#[test]
fn saddle_vertex_detection() {
    let kernel = PlanarKernel::<f64>::new();

    let saddle = saddle_fan(0.5);
    assert!(kernel.is_saddle_vertex(&saddle, 0));

    // a flat fan sums to exactly 2π
    let flat = saddle_fan(0.0);
    assert!(!kernel.is_saddle_vertex(&flat, 0));

    // convex corners stay below 2π
    let cube = common::cube();
    for v in 0..cube.num_vertices() {
        assert!(!kernel.is_saddle_vertex(&cube, v), "cube corner {}", v);
    }
}

#[test]
fn barycentric_classification() {
    assert_eq!(
        classify_barycentric(&bary(0.2, 0.3, 0.5)),
        Ok(BarycentricType::Internal)
    );

    // zero at coordinate 2: on the edge from corner 0 to corner 1
    assert_eq!(
        classify_barycentric(&bary(0.4, 0.6, 0.0)),
        Ok(BarycentricType::Edge(0))
    );
    // zero at coordinate 0: on the edge from corner 1 to corner 2
    assert_eq!(
        classify_barycentric(&bary(0.0, 0.6, 0.4)),
        Ok(BarycentricType::Edge(1))
    );
    // zero at coordinate 1: on the edge from corner 2 to corner 0
    assert_eq!(
        classify_barycentric(&bary(0.4, 0.0, 0.6)),
        Ok(BarycentricType::Edge(2))
    );

    assert_eq!(
        classify_barycentric(&bary(1.0, 0.0, 0.0)),
        Ok(BarycentricType::Vertex(0))
    );
    assert_eq!(
        classify_barycentric(&bary(0.0, 0.0, 1.0)),
        Ok(BarycentricType::Vertex(2))
    );

    assert!(classify_barycentric(&bary(0.7, 0.4, -0.1)).is_err());
    assert!(classify_barycentric(&bary(0.3, 0.3, 0.3)).is_err());
}
