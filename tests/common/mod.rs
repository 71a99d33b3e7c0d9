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

#![allow(dead_code)]

use surfpath::geometry::{Point3, spatial_element::SpatialElement};
use surfpath::mesh::Mesh;
use surfpath::shortest_path::{Barycentric, PathVisitor};

pub fn p3(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::from_vals([x, y, z])
}

pub fn bary(b0: f64, b1: f64, b2: f64) -> Barycentric<f64> {
    Barycentric::new(b0, b1, b2)
}

/// Unit square in the z = 0 plane, split along the diagonal A-C.
/// Vertices: A=(0,0,0), B=(1,0,0), C=(1,1,0), D=(0,1,0).
/// Faces: 0 = (A,B,C), 1 = (A,C,D).
pub fn flat_square() -> Mesh<f64, 3> {
    Mesh::from_triangles(
        vec![
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(1.0, 1.0, 0.0),
            p3(0.0, 1.0, 0.0),
        ],
        &[[0, 1, 2], [0, 2, 3]],
    )
}

/// Unit tetrahedron A=(0,0,0), B=(1,0,0), C=(0,1,0), D=(0,0,1).
/// Faces: 0 = (A,B,D), 1 = (B,C,D), 2 = (C,A,D), 3 = (A,C,B).
pub fn tetrahedron() -> Mesh<f64, 3> {
    Mesh::from_triangles(
        vec![
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(0.0, 1.0, 0.0),
            p3(0.0, 0.0, 1.0),
        ],
        &[[0, 1, 3], [1, 2, 3], [2, 0, 3], [0, 2, 1]],
    )
}

/// Unit cube, two triangles per side, outward orientation.
pub fn cube() -> Mesh<f64, 3> {
    Mesh::from_triangles(
        vec![
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(1.0, 1.0, 0.0),
            p3(0.0, 1.0, 0.0),
            p3(0.0, 0.0, 1.0),
            p3(1.0, 0.0, 1.0),
            p3(1.0, 1.0, 1.0),
            p3(0.0, 1.0, 1.0),
        ],
        &[
            [0, 3, 2],
            [0, 2, 1],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
        ],
    )
}

/// A fan of six triangles around a central vertex whose ring alternates in
/// height, making the incident angles sum past 2π (a saddle). The ring is
/// open, so ring vertices lie on the boundary.
///
/// Vertex 0 is the center; vertices 1..=6 sit on the unit circle at
/// 60-degree steps with z alternating +h/-h.
pub fn saddle_fan(h: f64) -> Mesh<f64, 3> {
    let mut points = vec![p3(0.0, 0.0, 0.0)];
    for i in 0..6 {
        let theta = std::f64::consts::PI / 3.0 * i as f64;
        let z = if i % 2 == 0 { h } else { -h };
        points.push(p3(theta.cos(), theta.sin(), z));
    }

    let mut tris = Vec::new();
    for i in 0..6 {
        let a = 1 + i;
        let b = 1 + (i + 1) % 6;
        tris.push([0, a, b]);
    }
    Mesh::from_triangles(points, &tris)
}

/// A 3x3 quad grid in the z = 0 plane with the middle cell removed,
/// leaving a square hole with boundary corners. Vertex (i, j) has index
/// `j * 4 + i`.
pub fn grid_with_hole() -> Mesh<f64, 3> {
    let mut points = Vec::new();
    for j in 0..4 {
        for i in 0..4 {
            points.push(p3(i as f64, j as f64, 0.0));
        }
    }

    let v = |i: usize, j: usize| j * 4 + i;
    let mut tris = Vec::new();
    for j in 0..3 {
        for i in 0..3 {
            if i == 1 && j == 1 {
                continue;
            }
            let (a, b, c, d) = (v(i, j), v(i + 1, j), v(i + 1, j + 1), v(i, j + 1));
            tris.push([a, b, c]);
            tris.push([a, c, d]);
        }
    }
    Mesh::from_triangles(points, &tris)
}

/// Two triangles with no shared vertices: a disconnected surface.
pub fn disjoint_triangles() -> Mesh<f64, 3> {
    Mesh::from_triangles(
        vec![
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(0.0, 1.0, 0.0),
            p3(5.0, 0.0, 0.0),
            p3(6.0, 0.0, 0.0),
            p3(5.0, 1.0, 0.0),
        ],
        &[[0, 1, 2], [3, 4, 5]],
    )
}

/// Feature events recorded during path reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub enum PathEvent {
    Edge(usize, f64),
    Vertex(usize),
    Face(usize, [f64; 3]),
}

#[derive(Debug, Default)]
pub struct EventCollector {
    pub events: Vec<PathEvent>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn vertices(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PathEvent::Vertex(v) => Some(*v),
                _ => None,
            })
            .collect()
    }
}

impl PathVisitor<f64> for EventCollector {
    fn on_edge(&mut self, half_edge: usize, t: f64) {
        self.events.push(PathEvent::Edge(half_edge, t));
    }

    fn on_vertex(&mut self, vertex: usize) {
        self.events.push(PathEvent::Vertex(vertex));
    }

    fn on_face(&mut self, face: usize, location: &Barycentric<f64>) {
        self.events
            .push(PathEvent::Face(face, [location[0], location[1], location[2]]));
    }
}
