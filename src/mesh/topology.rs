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

use smallvec::SmallVec;

use crate::{
    geometry::{segment::Segment, triangle::Triangle},
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
};

impl<T: Scalar, const N: usize> Mesh<T, N> {
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn source(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].prev].vertex
    }

    #[inline]
    pub fn target(&self, he: usize) -> usize {
        self.half_edges[he].vertex
    }

    #[inline]
    pub fn next(&self, he: usize) -> usize {
        self.half_edges[he].next
    }

    #[inline]
    pub fn prev(&self, he: usize) -> usize {
        self.half_edges[he].prev
    }

    #[inline]
    pub fn twin(&self, he: usize) -> usize {
        self.half_edges[he].twin
    }

    /// `None` is the null face: `he` runs along the outside of a boundary.
    #[inline]
    pub fn face_of(&self, he: usize) -> Option<usize> {
        self.half_edges[he].face
    }

    pub fn half_edge_between(&self, v0: usize, v1: usize) -> Option<usize> {
        self.edge_map.get(&(v0, v1)).copied()
    }

    /// Half-edges bounding face `f` in CCW order, starting at the
    /// canonical half-edge.
    pub fn face_half_edges(&self, f: usize) -> SmallVec<[usize; 3]> {
        let mut result = SmallVec::new();
        let start = self.faces[f].half_edge;
        let mut h = start;
        loop {
            result.push(h);
            h = self.half_edges[h].next;
            if h == start {
                break;
            }
        }
        result
    }

    /// Corner vertices of face `f`; corner `j` is the source of the j-th
    /// half-edge of the face.
    #[inline]
    pub fn face_vertices(&self, f: usize) -> [usize; 3] {
        let he0 = self.faces[f].half_edge;
        let he1 = self.half_edges[he0].next;
        let he2 = self.half_edges[he1].next;
        debug_assert_eq!(self.half_edges[he2].next, he0);

        [self.source(he0), self.source(he1), self.source(he2)]
    }

    /// Position of `he` within its face cycle (0, 1 or 2).
    pub fn half_edge_index_in_face(&self, he: usize) -> usize {
        let f = self.half_edges[he].face.expect("border half-edge has no face index");
        let start = self.faces[f].half_edge;
        let mut h = start;
        let mut i = 0;
        while h != he {
            h = self.half_edges[h].next;
            i += 1;
            debug_assert!(i < 3, "half-edge not found in its face cycle");
        }
        i
    }

    /// Outgoing half-edges from `v` in rotation order; includes border
    /// half-edges on open meshes.
    pub fn outgoing_half_edges(&self, v: usize) -> Vec<usize> {
        let start = self.vertices[v]
            .half_edge
            .expect("vertex has no incident edges");
        let mut result = Vec::new();
        let mut h = start;
        loop {
            result.push(h);
            let t = self.half_edges[h].twin;
            h = self.half_edges[t].next;
            if h == start {
                break;
            }
        }
        result
    }

    /// A representative half-edge pointing at `v`.
    pub fn incoming_half_edge(&self, v: usize) -> Option<usize> {
        self.vertices[v].half_edge.map(|h| self.half_edges[h].twin)
    }

    /// True when some spoke at `v` touches the null face on either side.
    pub fn is_boundary_vertex(&self, v: usize) -> bool {
        self.outgoing_half_edges(v).into_iter().any(|he| {
            self.half_edges[he].face.is_none()
                || self.half_edges[self.half_edges[he].twin].face.is_none()
        })
    }

    pub fn segment_from_half_edge(&self, he: usize) -> Segment<T, N> {
        Segment::new(
            &self.vertices[self.source(he)].position,
            &self.vertices[self.target(he)].position,
        )
    }

    /// The triangle spanned by `he`: (source, target, target-of-next).
    /// Well defined for border half-edges too, where it spans two
    /// consecutive boundary edges.
    pub fn triangle_from_half_edge(&self, he: usize) -> Triangle<T, N> {
        Triangle::new(
            &self.vertices[self.source(he)].position,
            &self.vertices[self.target(he)].position,
            &self.vertices[self.target(self.next(he))].position,
        )
    }

    /// Index of the first face whose cycle is not exactly three half-edges.
    pub fn first_non_triangle_face(&self) -> Option<usize> {
        (0..self.faces.len()).find(|&f| self.face_half_edges(f).len() != 3)
    }
}
