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

use smallvec::SmallVec;

use crate::{
    geometry::{Line2, Point2, PointOps, Ray2, Segment2, Triangle2},
    kernel::kernel::{GeodesicKernel, Orientation},
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
    operations::Zero,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConeKind {
    Root,
    FaceSource,
    EdgeSource,
    VertexSource,
    Interval,
}

/// A node of the cone (window) tree.
///
/// The layout triangle is the unfolded image of the node's current face:
/// corner 0 is the image of `source(entry_edge)`, corner 1 the image of
/// `target(entry_edge)`, corner 2 the image of the apex (the corner
/// opposite the entry edge). The node represents shortest paths whose last
/// crossing of `entry_edge` lies between `window_left` and `window_right`
/// as seen from `source_image`.
#[derive(Debug, Clone)]
pub struct ConeTreeNode<T: Scalar> {
    pub kind: ConeKind,
    /// Half-edge across which the cone enters its current face. For vertex
    /// roots, an incoming reference half-edge of the root vertex; unset
    /// for face and edge roots.
    pub entry_edge: usize,
    pub layout_face: Triangle2<T>,
    pub source_image: Point2<T>,
    pub distance_from_source_to_root: T,
    pub window_left: Point2<T>,
    pub window_right: Point2<T>,
    pub level: usize,
    pub tree_id: usize,

    pub parent: Option<usize>,
    pub left_child: Option<usize>,
    pub right_child: Option<usize>,
    pub middle_children: SmallVec<[usize; 6]>,

    /// Queued-but-unprocessed expansion events for this node's children.
    pub pending_left: Option<usize>,
    pub pending_right: Option<usize>,
    pub pending_middle: Option<usize>,

    pub removed: bool,

    /// For edge-source nodes: the seed half-edge and the source's
    /// parameter along it, emitted when a path terminates here.
    pub source_edge: Option<(usize, T)>,
}

impl<T> ConeTreeNode<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>
        + Neg<Output = T>,
{
    pub fn new_root(tree_id: usize, entry_edge: usize) -> Self {
        let origin = Point2::from([T::zero(), T::zero()]);
        Self {
            kind: ConeKind::Root,
            entry_edge,
            layout_face: Triangle2::new(&origin, &origin, &origin),
            source_image: origin.clone(),
            distance_from_source_to_root: T::zero(),
            window_left: origin.clone(),
            window_right: origin,
            level: 0,
            tree_id,
            parent: None,
            left_child: None,
            right_child: None,
            middle_children: SmallVec::new(),
            pending_left: None,
            pending_right: None,
            pending_middle: None,
            removed: false,
            source_edge: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: ConeKind,
        entry_edge: usize,
        layout_face: Triangle2<T>,
        source_image: Point2<T>,
        distance_from_source_to_root: T,
        window_left: Point2<T>,
        window_right: Point2<T>,
        level: usize,
        tree_id: usize,
    ) -> Self {
        Self {
            kind,
            entry_edge,
            layout_face,
            source_image,
            distance_from_source_to_root,
            window_left,
            window_right,
            level,
            tree_id,
            parent: None,
            left_child: None,
            right_child: None,
            middle_children: SmallVec::new(),
            pending_left: None,
            pending_right: None,
            pending_middle: None,
            removed: false,
            source_edge: None,
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.kind == ConeKind::Root
    }

    #[inline]
    pub fn is_source_node(&self) -> bool {
        matches!(
            self.kind,
            ConeKind::FaceSource | ConeKind::EdgeSource | ConeKind::VertexSource
        )
    }

    #[inline]
    pub fn is_vertex_node(&self) -> bool {
        self.kind == ConeKind::VertexSource
    }

    #[inline]
    pub fn is_interval(&self) -> bool {
        self.kind == ConeKind::Interval
    }

    pub fn current_face(&self, mesh: &Mesh<T, 3>) -> Option<usize> {
        mesh.face_of(self.entry_edge)
    }

    pub fn is_null_face(&self, mesh: &Mesh<T, 3>) -> bool {
        mesh.face_of(self.entry_edge).is_none()
    }

    /// The vertex this cone arrives at: the corner opposite the entry edge
    /// (for roots, the root vertex itself).
    pub fn target_vertex(&self, mesh: &Mesh<T, 3>) -> usize {
        if self.is_root() {
            mesh.target(self.entry_edge)
        } else {
            mesh.target(mesh.next(self.entry_edge))
        }
    }

    pub fn left_child_edge(&self, mesh: &Mesh<T, 3>) -> usize {
        mesh.twin(mesh.prev(self.entry_edge))
    }

    pub fn right_child_edge(&self, mesh: &Mesh<T, 3>) -> usize {
        mesh.twin(mesh.next(self.entry_edge))
    }

    pub fn entry_segment(&self) -> Segment2<T> {
        Segment2::new(&self.layout_face[0], &self.layout_face[1])
    }

    pub fn target_vertex_location(&self) -> Point2<T> {
        self.layout_face[2].clone()
    }

    /// Base segment of the left child, oriented along the left child
    /// edge (apex-ward from the entry source corner).
    pub fn left_child_base_segment(&self) -> Segment2<T> {
        Segment2::new(&self.layout_face[0], &self.layout_face[2])
    }

    /// Base segment of the right child, oriented along the right child
    /// edge (from the apex to the entry target corner).
    pub fn right_child_base_segment(&self) -> Segment2<T> {
        Segment2::new(&self.layout_face[2], &self.layout_face[1])
    }

    pub fn left_boundary(&self) -> Ray2<T> {
        Ray2::new(&self.source_image, &self.window_left)
    }

    pub fn right_boundary(&self) -> Ray2<T> {
        Ray2::new(&self.source_image, &self.window_right)
    }

    pub fn ray_to_target_vertex(&self) -> Line2<T> {
        Line2::new(&self.source_image, &self.layout_face[2])
    }

    pub fn distance_from_target_to_root(&self) -> T {
        if self.is_root() {
            T::zero()
        } else {
            &self.distance_from_source_to_root
                + &self.source_image.distance_to(&self.layout_face[2])
        }
    }

    pub fn distance_to_root(&self, p: &Point2<T>) -> T {
        &self.distance_from_source_to_root + &self.source_image.distance_to(p)
    }

    /// True when part of the cone crosses the left child edge: the apex
    /// lies strictly clockwise of the left boundary ray.
    pub fn has_left_side<K: GeodesicKernel<FT = T>>(&self, kernel: &K) -> bool {
        kernel.orientation_2(&self.source_image, &self.window_left, &self.layout_face[2])
            == Orientation::RightTurn
    }

    /// True when part of the cone crosses the right child edge: the apex
    /// lies strictly counterclockwise of the right boundary ray.
    pub fn has_right_side<K: GeodesicKernel<FT = T>>(&self, kernel: &K) -> bool {
        kernel.orientation_2(&self.source_image, &self.window_right, &self.layout_face[2])
            == Orientation::LeftTurn
    }

    /// True when `p` lies between the two boundary rays (boundaries
    /// inclusive).
    pub fn inside_window<K: GeodesicKernel<FT = T>>(&self, kernel: &K, p: &Point2<T>) -> bool {
        kernel.orientation_2(&self.source_image, &self.window_left, p) != Orientation::LeftTurn
            && kernel.orientation_2(&self.source_image, &self.window_right, p)
                != Orientation::RightTurn
    }
}
