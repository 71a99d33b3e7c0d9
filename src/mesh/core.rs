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

use ahash::AHashMap;

use crate::{
    geometry::point::Point,
    mesh::{basic_types::Mesh, face::Face, half_edge::HalfEdge, vertex::Vertex},
    numeric::scalar::Scalar,
};

impl<T: Scalar, const N: usize> Mesh<T, N> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
            edge_map: AHashMap::new(),
        }
    }

    pub fn add_vertex(&mut self, position: Point<T, N>) -> usize {
        self.vertices.push(Vertex::new(position));
        self.vertices.len() - 1
    }

    /// Adds a triangle face given three vertex indices in CCW order.
    /// Border (outside) half-edges keep `face = None` instead of pointing
    /// at a ghost face. Returns the index of the new face.
    pub fn add_triangle(&mut self, v0: usize, v1: usize, v2: usize) -> usize {
        let edge_vertices = [(v0, v1), (v1, v2), (v2, v0)];

        let face_idx = self.faces.len();
        self.faces.push(Face::new(usize::MAX));

        let mut edge_indices = [usize::MAX; 3];

        for (i, &(from, to)) in edge_vertices.iter().enumerate() {
            if let Some(&he_idx) = self.edge_map.get(&(from, to)) {
                // Directed edge already exists; it must be a free border.
                debug_assert!(
                    self.half_edges[he_idx].face.is_none(),
                    "add_triangle: non-manifold edge ({},{})",
                    from,
                    to
                );
                self.half_edges[he_idx].face = Some(face_idx);
                edge_indices[i] = he_idx;
            } else {
                let he_idx = self.half_edges.len();
                let mut he = HalfEdge::new(to);
                he.face = Some(face_idx);
                self.half_edges.push(he);
                self.edge_map.insert((from, to), he_idx);
                edge_indices[i] = he_idx;

                if let Some(&rev_idx) = self.edge_map.get(&(to, from)) {
                    self.half_edges[he_idx].twin = rev_idx;
                    self.half_edges[rev_idx].twin = he_idx;
                } else {
                    // Border half-edge (to -> from), face stays None.
                    let border_idx = self.half_edges.len();
                    let mut bhe = HalfEdge::new(from);
                    bhe.twin = he_idx;
                    // temporary self-loop, rewired by wire_border below
                    bhe.next = border_idx;
                    bhe.prev = border_idx;
                    self.half_edges.push(bhe);
                    self.edge_map.insert((to, from), border_idx);

                    self.half_edges[he_idx].twin = border_idx;
                }
            }
        }

        let e0 = edge_indices[0];
        let e1 = edge_indices[1];
        let e2 = edge_indices[2];
        self.half_edges[e0].next = e1;
        self.half_edges[e0].prev = e2;
        self.half_edges[e1].next = e2;
        self.half_edges[e1].prev = e0;
        self.half_edges[e2].next = e0;
        self.half_edges[e2].prev = e1;

        self.wire_border(e0);
        self.wire_border(e1);
        self.wire_border(e2);

        self.vertices[v0].half_edge.get_or_insert(e0);
        self.vertices[v1].half_edge.get_or_insert(e1);
        self.vertices[v2].half_edge.get_or_insert(e2);

        self.faces[face_idx].half_edge = e0;

        face_idx
    }

    /// Locally repairs boundary loop links around the border twin of an
    /// interior half-edge.
    fn wire_border(&mut self, h_interior: usize) {
        let b = self.half_edges[h_interior].twin;
        if self.half_edges[b].face.is_some() {
            return;
        }

        // b.next: rotate around head(b) via interior spokes until the next
        // border spoke. `t` stays an interior half-edge leaving head(b).
        let mut t = h_interior;
        let b_next = loop {
            let prev_t = self.half_edges[t].prev;
            let cand = self.half_edges[prev_t].twin;
            if self.half_edges[cand].face.is_none() {
                break cand;
            }
            t = cand;
            if t == h_interior {
                break b;
            }
        };

        // b.prev: rotate the other way around tail(b). `t` stays an
        // interior half-edge arriving at tail(b).
        let mut t = h_interior;
        let b_prev = loop {
            let next_t = self.half_edges[t].next;
            let cand = self.half_edges[next_t].twin;
            if self.half_edges[cand].face.is_none() {
                break cand;
            }
            t = cand;
            if t == h_interior {
                break b;
            }
        };

        self.half_edges[b].next = b_next;
        self.half_edges[b_next].prev = b;
        self.half_edges[b].prev = b_prev;
        self.half_edges[b_prev].next = b;
    }

    /// Recomputes `next`/`prev` for every border half-edge by rotating
    /// around vertices through interior faces. `add_triangle` already keeps
    /// loops consistent locally; this is the global fixup after bulk
    /// construction.
    pub fn build_boundary_loops(&mut self) {
        let m = self.half_edges.len();

        let borders: Vec<usize> = (0..m)
            .filter(|&i| self.half_edges[i].face.is_none())
            .collect();

        let mut next_of = vec![usize::MAX; m];

        for &b in &borders {
            let t0 = self.half_edges[b].twin;

            let mut t = t0;
            let mut steps = 0usize;
            let b_next = loop {
                let prev_t = self.half_edges[t].prev;
                let cand = self.half_edges[prev_t].twin;

                if self.half_edges[cand].face.is_none() {
                    break cand;
                }

                // keep rotating around the head vertex
                t = cand;

                steps += 1;
                if steps > m {
                    break b;
                }
            };

            next_of[b] = b_next;
        }

        for &b in &borders {
            let nb = next_of[b];
            if nb != usize::MAX {
                self.half_edges[b].next = nb;
            }
        }
        for &b in &borders {
            let nb = self.half_edges[b].next;
            self.half_edges[nb].prev = b;
        }

        #[cfg(debug_assertions)]
        for &b in &borders {
            let he = &self.half_edges[b];
            assert!(self.half_edges[he.next].face.is_none());
            assert!(self.half_edges[he.prev].face.is_none());
            assert_eq!(self.half_edges[he.next].prev, b);
            assert_eq!(self.half_edges[he.prev].next, b);
        }
    }

    /// Builds a mesh from a triangle soup (CCW triangles over shared
    /// vertex indices).
    pub fn from_triangles(points: Vec<Point<T, N>>, triangles: &[[usize; 3]]) -> Self {
        let mut mesh = Mesh::new();
        for p in points {
            mesh.add_vertex(p);
        }
        for t in triangles {
            mesh.add_triangle(t[0], t[1], t[2]);
        }
        mesh.build_boundary_loops();
        mesh
    }
}

impl<T: Scalar, const N: usize> Default for Mesh<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
