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

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{
    geometry::{Point3, interpolate_points},
    kernel::kernel::GeodesicKernel,
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
    operations::Zero,
    shortest_path::location::Barycentric,
};

/// Receives the feature sequence of a shortest path, ordered from the
/// query toward the source.
pub trait PathVisitor<T: Scalar> {
    /// The path crosses `half_edge` at parameter `t` from its source.
    fn on_edge(&mut self, half_edge: usize, t: T);

    /// The path passes through (or starts from) a vertex.
    fn on_vertex(&mut self, vertex: usize);

    /// The path terminates at a face-interior source.
    fn on_face(&mut self, face: usize, location: &Barycentric<T>);
}

/// Receives the 3D polyline of a shortest path.
pub trait PointVisitor<T: Scalar> {
    fn point(&mut self, p: Point3<T>);
}

/// Decorates a [`PointVisitor`] as a [`PathVisitor`] by evaluating every
/// feature event in 3D.
pub struct PointPathVisitorWrapper<'a, T, K, V>
where
    T: Scalar,
    K: GeodesicKernel<FT = T>,
    V: PointVisitor<T>,
{
    mesh: &'a Mesh<T, 3>,
    kernel: &'a K,
    pub visitor: &'a mut V,
}

impl<'a, T, K, V> PointPathVisitorWrapper<'a, T, K, V>
where
    T: Scalar,
    K: GeodesicKernel<FT = T>,
    V: PointVisitor<T>,
    for<'c> &'c T: Add<&'c T, Output = T>
        + Sub<&'c T, Output = T>
        + Mul<&'c T, Output = T>
        + Div<&'c T, Output = T>
        + Neg<Output = T>,
{
    pub fn new(mesh: &'a Mesh<T, 3>, kernel: &'a K, visitor: &'a mut V) -> Self {
        Self {
            mesh,
            kernel,
            visitor,
        }
    }
}

impl<'a, T, K, V> PathVisitor<T> for PointPathVisitorWrapper<'a, T, K, V>
where
    T: Scalar,
    K: GeodesicKernel<FT = T>,
    V: PointVisitor<T>,
    for<'c> &'c T: Add<&'c T, Output = T>
        + Sub<&'c T, Output = T>
        + Mul<&'c T, Output = T>
        + Div<&'c T, Output = T>
        + Neg<Output = T>,
{
    fn on_edge(&mut self, half_edge: usize, t: T) {
        let a = &self.mesh.vertices[self.mesh.source(half_edge)].position;
        let b = &self.mesh.vertices[self.mesh.target(half_edge)].position;
        self.visitor.point(interpolate_points(a, b, &t));
    }

    fn on_vertex(&mut self, vertex: usize) {
        self.visitor.point(self.mesh.vertices[vertex].position.clone());
    }

    fn on_face(&mut self, face: usize, location: &Barycentric<T>) {
        let tri = self
            .mesh
            .triangle_from_half_edge(self.mesh.faces[face].half_edge);
        self.visitor
            .point(self.kernel.construct_triangle_location_3(&tri, location));
    }
}

/// Collects the polyline into a vector; convenient for measuring path
/// length.
#[derive(Debug, Default)]
pub struct PolylineCollector<T: Scalar> {
    pub points: Vec<Point3<T>>,
}

impl<T: Scalar> PolylineCollector<T> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Total length of the collected polyline.
    pub fn length(&self) -> T
    where
        for<'c> &'c T: Add<&'c T, Output = T>
            + Sub<&'c T, Output = T>
            + Mul<&'c T, Output = T>
            + Div<&'c T, Output = T>,
    {
        use crate::geometry::PointOps;

        let mut total = T::zero();
        for w in self.points.windows(2) {
            total += &w[0].distance_to(&w[1]);
        }
        total
    }
}

impl<T: Scalar> PointVisitor<T> for PolylineCollector<T> {
    fn point(&mut self, p: Point3<T>) {
        self.points.push(p);
    }
}
