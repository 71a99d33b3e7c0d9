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

use crate::{
    geometry::{Line2, Point2, Point3, Ray2, Segment2, Triangle2, Triangle3},
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
    shortest_path::location::Barycentric,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    LeftTurn,
    RightTurn,
    Collinear,
}

/// Result of intersecting a segment with a ray or a line.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection<T: Scalar> {
    Point(Point2<T>),
    Overlap(Segment2<T>),
}

/// The numeric seam of the shortest-path engine: planar constructions and
/// predicates over unfolded triangles.
///
/// All triangles produced by the construction operations are
/// counterclockwise; `flatten_triangle_3_along_segment_2` places the third
/// corner to the left of the base segment direction so that successive
/// unfoldings of adjacent faces share the image of their common edge.
pub trait GeodesicKernel {
    type FT: Scalar;

    /// Isometric layout of a 3D triangle: corner 0 at the origin, corner 1
    /// on the positive x-axis, corner 2 in the upper half-plane.
    fn project_triangle_3_to_triangle_2(&self, tri: &Triangle3<Self::FT>) -> Triangle2<Self::FT>;

    /// Rigid unfolding of `tri` placing its edge `edge_index` (corners
    /// `edge_index`, `edge_index + 1`) onto `base`.
    fn flatten_triangle_3_along_segment_2(
        &self,
        tri: &Triangle3<Self::FT>,
        edge_index: usize,
        base: &Segment2<Self::FT>,
    ) -> Triangle2<Self::FT>;

    fn construct_triangle_location_2(
        &self,
        tri: &Triangle2<Self::FT>,
        location: &Barycentric<Self::FT>,
    ) -> Point2<Self::FT>;

    fn construct_triangle_location_3(
        &self,
        tri: &Triangle3<Self::FT>,
        location: &Barycentric<Self::FT>,
    ) -> Point3<Self::FT>;

    fn intersect_segment_ray_2(
        &self,
        segment: &Segment2<Self::FT>,
        ray: &Ray2<Self::FT>,
    ) -> Option<SegmentIntersection<Self::FT>>;

    fn intersect_segment_line_2(
        &self,
        segment: &Segment2<Self::FT>,
        line: &Line2<Self::FT>,
    ) -> Option<SegmentIntersection<Self::FT>>;

    fn compute_squared_distance_2(&self, p: &Point2<Self::FT>, q: &Point2<Self::FT>) -> Self::FT;

    /// Parameter of `p` along the segment `a -> b`, clamped to `[0, 1]`.
    fn parametric_distance_along_segment_2(
        &self,
        a: &Point2<Self::FT>,
        b: &Point2<Self::FT>,
        p: &Point2<Self::FT>,
    ) -> Self::FT;

    /// Compares the parametric positions of `line1 ∩ seg1` and
    /// `line2 ∩ seg2` along their segments. The two segments are images of
    /// the same directed mesh edge, so the parameters are comparable.
    fn compare_relative_intersection_along_segment_2(
        &self,
        seg1: &Segment2<Self::FT>,
        line1: &Line2<Self::FT>,
        seg2: &Segment2<Self::FT>,
        line2: &Line2<Self::FT>,
    ) -> Ordering;

    fn orientation_2(
        &self,
        a: &Point2<Self::FT>,
        b: &Point2<Self::FT>,
        c: &Point2<Self::FT>,
    ) -> Orientation;

    /// True when the incident face angles at `v` sum to more than 2π.
    fn is_saddle_vertex(&self, mesh: &Mesh<Self::FT, 3>, v: usize) -> bool;
}
