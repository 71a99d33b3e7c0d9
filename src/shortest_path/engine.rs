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

use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_traits::ToPrimitive;
use tracing::{debug, trace};

use crate::{
    geometry::{Line2, Point2, Point3, Ray2, Segment2, Triangle2, interpolate_points},
    kernel::kernel::{GeodesicKernel, SegmentIntersection},
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
    operations::{Sqrt, Zero},
    shortest_path::{
        cone_tree::{ConeKind, ConeTreeNode},
        error::SurfPathError,
        events::{EventKind, EventQueue},
        location::{Barycentric, BarycentricType, classify_barycentric},
        visitor::{PathVisitor, PointPathVisitorWrapper, PointVisitor},
    },
};

/// Geodesic shortest paths from one or more surface sources.
///
/// The engine borrows the mesh for its lifetime and never mutates it.
/// After [`compute_shortest_paths`](Self::compute_shortest_paths) the cone
/// tree answers distance and path queries for any vertex or surface
/// location.
pub struct ShortestPathEngine<'m, T, K>
where
    T: Scalar,
    K: GeodesicKernel<FT = T>,
{
    mesh: &'m Mesh<T, 3>,
    kernel: K,

    vertex_is_pseudo_source: Vec<bool>,
    /// Per half-edge: the node owning propagation across it, with its
    /// arrival distance at the opposite corner.
    edge_occupiers: Vec<Option<(usize, T)>>,
    closest_at_vertex: Vec<Option<(usize, T)>>,

    root_nodes: Vec<usize>,
    seed_locations: Vec<(usize, Barycentric<T>)>,
    face_occupiers: Vec<Vec<usize>>,

    nodes: Vec<ConeTreeNode<T>>,
    queue: EventQueue<T>,
}

impl<'m, T, K> ShortestPathEngine<'m, T, K>
where
    T: Scalar,
    K: GeodesicKernel<FT = T>,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>
        + Neg<Output = T>,
{
    pub fn new(mesh: &'m Mesh<T, 3>, kernel: K) -> Self {
        Self {
            mesh,
            kernel,
            vertex_is_pseudo_source: Vec::new(),
            edge_occupiers: Vec::new(),
            closest_at_vertex: Vec::new(),
            root_nodes: Vec::new(),
            seed_locations: Vec::new(),
            face_occupiers: Vec::new(),
            nodes: Vec::new(),
            queue: EventQueue::new(),
        }
    }

    /// Builds the cone tree for the given `(face, barycentric)` sources.
    /// Replaces any previously computed tree.
    pub fn compute_shortest_paths<I>(&mut self, sources: I) -> Result<(), SurfPathError>
    where
        I: IntoIterator<Item = (usize, Barycentric<T>)>,
    {
        if let Some(f) = self.mesh.first_non_triangle_face() {
            return Err(SurfPathError::NonTriangulatedMesh(f));
        }

        let sources: Vec<(usize, Barycentric<T>)> = sources.into_iter().collect();
        for (face, location) in &sources {
            if *face >= self.mesh.num_faces() {
                return Err(SurfPathError::InvalidFaceLocation);
            }
            classify_barycentric(location)?;
        }

        self.reset_containers();
        self.set_vertex_types();

        for (face, location) in sources {
            debug!(face, "expanding root");
            self.seed_locations.push((face, location.clone()));
            self.expand_root(face, &location)?;
        }

        trace!(queued = self.queue.len(), "propagation start");

        while let Some(event_id) = self.queue.pop() {
            let event = self.queue.get(event_id);
            if event.cancelled {
                trace!(event_id, "skipping cancelled event");
                continue;
            }
            let parent = event.parent;
            let kind = event.kind;
            let window = event.window.clone();

            match kind {
                EventKind::PseudoSource => self.expand_pseudo_source(parent),
                EventKind::LeftChild => {
                    let window = window.expect("left expansion carries a window");
                    self.expand_left_child(parent, window);
                }
                EventKind::RightChild => {
                    let window = window.expect("right expansion carries a window");
                    self.expand_right_child(parent, window);
                }
            }
        }

        self.build_face_occupier_lists();
        debug!(
            nodes = self.nodes.len(),
            roots = self.root_nodes.len(),
            "propagation done"
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Root expansion
    // ------------------------------------------------------------------

    fn expand_root(&mut self, face: usize, location: &Barycentric<T>) -> Result<(), SurfPathError> {
        match classify_barycentric(location)? {
            BarycentricType::Internal => {
                self.expand_face_root(face, location);
            }
            BarycentricType::Edge(i) => {
                let he = self.mesh.face_half_edges(face)[i];
                self.expand_edge_root(he, location[i].clone(), location[(i + 1) % 3].clone());
            }
            BarycentricType::Vertex(i) => {
                let he = self.mesh.face_half_edges(face)[i];
                self.expand_vertex_root(self.mesh.source(he));
            }
        }
        Ok(())
    }

    fn expand_face_root(&mut self, face: usize, location: &Barycentric<T>) {
        let tree_id = self.root_nodes.len();
        let root = self.alloc_node(ConeTreeNode::new_root(tree_id, usize::MAX));
        self.root_nodes.push(root);

        let hes = self.mesh.face_half_edges(face);
        for (k, &he) in hes.iter().enumerate() {
            let tri3 = self.mesh.triangle_from_half_edge(he);
            let layout = self.kernel.project_triangle_3_to_triangle_2(&tri3);
            let source_point = self
                .kernel
                .construct_triangle_location_2(&layout, &location.rotated(k));

            let window_left = layout[0].clone();
            let window_right = layout[2].clone();
            let child = self.alloc_child(
                root,
                ConeTreeNode::new(
                    ConeKind::FaceSource,
                    he,
                    layout,
                    source_point,
                    T::zero(),
                    window_left,
                    window_right,
                    1,
                    tree_id,
                ),
            );
            self.nodes[root].middle_children.push(child);
            self.process_node(child);
        }
    }

    /// An edge source covers each incident face with two cones: one per
    /// far edge of the face. Both carry the seed edge parameter used when
    /// a path terminates on the source.
    fn expand_edge_root(&mut self, he: usize, t0: T, t1: T) {
        let tree_id = self.root_nodes.len();
        let root = self.alloc_node(ConeTreeNode::new_root(tree_id, usize::MAX));
        self.root_nodes.push(root);

        let sides = [he, self.mesh.twin(he)];
        for (side, &hs) in sides.iter().enumerate() {
            if self.mesh.face_of(hs).is_none() {
                continue;
            }

            // The edge parameter flips direction on the opposite side.
            let (ta, tb) = if side == 0 {
                (t0.clone(), t1.clone())
            } else {
                (t1.clone(), t0.clone())
            };
            let anchor = (hs, tb.clone());

            let layout = self
                .kernel
                .project_triangle_3_to_triangle_2(&self.mesh.triangle_from_half_edge(hs));
            let source_point = weighted_point(&layout[0], &ta, &layout[1], &tb);

            let window_left = layout[0].clone();
            let window_right = layout[2].clone();
            let mut main = ConeTreeNode::new(
                ConeKind::EdgeSource,
                hs,
                layout,
                source_point,
                T::zero(),
                window_left,
                window_right,
                1,
                tree_id,
            );
            main.source_edge = Some(anchor.clone());
            let main = self.alloc_child(root, main);
            self.nodes[root].middle_children.push(main);
            self.process_node(main);

            // Second cone, entered across the previous half-edge, covering
            // the remaining far edge of the same face.
            let hp = self.mesh.prev(hs);
            let layout_p = self
                .kernel
                .project_triangle_3_to_triangle_2(&self.mesh.triangle_from_half_edge(hp));
            let source_point_p = weighted_point(&layout_p[1], &ta, &layout_p[2], &tb);

            let window_left = layout_p[0].clone();
            let window_right = layout_p[2].clone();
            let mut opposite = ConeTreeNode::new(
                ConeKind::EdgeSource,
                hp,
                layout_p,
                source_point_p,
                T::zero(),
                window_left,
                window_right,
                1,
                tree_id,
            );
            opposite.source_edge = Some(anchor);
            let opposite = self.alloc_child(root, opposite);
            self.nodes[root].middle_children.push(opposite);
            self.process_node(opposite);
        }
    }

    fn expand_vertex_root(&mut self, vertex: usize) {
        let tree_id = self.root_nodes.len();
        let entry = self
            .mesh
            .incoming_half_edge(vertex)
            .expect("source vertex has no incident edges");
        let root = self.alloc_node(ConeTreeNode::new_root(tree_id, entry));
        self.root_nodes.push(root);

        debug!(vertex, "vertex root");
        self.closest_at_vertex[vertex] = Some((root, T::zero()));
        self.expand_pseudo_source(root);
    }

    // ------------------------------------------------------------------
    // Expansion
    // ------------------------------------------------------------------

    /// Fans `VertexSource` cones over every face incident to the node's
    /// target vertex.
    fn expand_pseudo_source(&mut self, parent: usize) {
        self.nodes[parent].pending_middle = None;

        let vertex = self.nodes[parent].target_vertex(self.mesh);
        let distance = self.nodes[parent].distance_from_target_to_root();
        let tree_id = self.nodes[parent].tree_id;
        let level = self.nodes[parent].level + 1;

        debug!(vertex, ?distance, "pseudo-source fan");

        let Some(start) = self.mesh.incoming_half_edge(vertex) else {
            return;
        };
        let mut e = start;
        loop {
            let tri3 = self.mesh.triangle_from_half_edge(e);
            let layout = self.kernel.project_triangle_3_to_triangle_2(&tri3);

            let source_image = layout[1].clone();
            let window_left = layout[0].clone();
            let window_right = layout[2].clone();
            let child = self.alloc_child(
                parent,
                ConeTreeNode::new(
                    ConeKind::VertexSource,
                    e,
                    layout,
                    source_image,
                    distance.clone(),
                    window_left,
                    window_right,
                    level,
                    tree_id,
                ),
            );
            self.nodes[parent].middle_children.push(child);
            self.process_node(child);

            e = self.mesh.twin(self.mesh.next(e));
            if e == start {
                break;
            }
        }
    }

    fn expand_left_child(&mut self, parent: usize, window: Segment2<T>) {
        debug_assert!(self.nodes[parent].pending_left.is_some());
        self.nodes[parent].pending_left = None;

        if !self.window_distance_filter(parent, &window, false) {
            trace!(parent, "left window filtered");
            return;
        }

        let edge = self.nodes[parent].left_child_edge(self.mesh);
        let base = self.nodes[parent].left_child_base_segment();
        let layout = self.unfold_across(edge, &base);

        let source_image = self.nodes[parent].source_image.clone();
        let distance = self.nodes[parent].distance_from_source_to_root.clone();
        let level = self.nodes[parent].level + 1;
        let tree_id = self.nodes[parent].tree_id;

        let child = self.alloc_child(
            parent,
            ConeTreeNode::new(
                ConeKind::Interval,
                edge,
                layout,
                source_image,
                distance,
                window.a,
                window.b,
                level,
                tree_id,
            ),
        );
        self.nodes[parent].left_child = Some(child);
        self.process_node(child);
    }

    fn expand_right_child(&mut self, parent: usize, window: Segment2<T>) {
        debug_assert!(self.nodes[parent].pending_right.is_some());
        self.nodes[parent].pending_right = None;

        if !self.window_distance_filter(parent, &window, true) {
            trace!(parent, "right window filtered");
            return;
        }

        let edge = self.nodes[parent].right_child_edge(self.mesh);
        let base = self.nodes[parent].right_child_base_segment();
        let layout = self.unfold_across(edge, &base);

        let source_image = self.nodes[parent].source_image.clone();
        let distance = self.nodes[parent].distance_from_source_to_root.clone();
        let level = self.nodes[parent].level + 1;
        let tree_id = self.nodes[parent].tree_id;

        let child = self.alloc_child(
            parent,
            ConeTreeNode::new(
                ConeKind::Interval,
                edge,
                layout,
                source_image,
                distance,
                window.a,
                window.b,
                level,
                tree_id,
            ),
        );
        self.nodes[parent].right_child = Some(child);
        self.process_node(child);
    }

    fn unfold_across(&self, edge: usize, base: &Segment2<T>) -> Triangle2<T> {
        let tri3 = self.mesh.triangle_from_half_edge(edge);
        self.kernel.flatten_triangle_3_along_segment_2(&tri3, 0, base)
    }

    /// Dominance pruning: discard a window when every point reachable
    /// through it has a shorter route through one of the parent face's
    /// corners.
    fn window_distance_filter(&self, parent: usize, window: &Segment2<T>, reversed: bool) -> bool {
        let node = &self.nodes[parent];

        let entry = node.entry_segment();
        let image = &node.source_image;
        let d = &node.distance_from_source_to_root;

        let v1_index = self.mesh.source(node.entry_edge);
        let v2_index = node.target_vertex(self.mesh);
        let v3_index = self.mesh.target(node.entry_edge);

        let mut d1 = self.closest_at_vertex[v1_index].as_ref().map(|(_, d)| d);
        let d2 = self.closest_at_vertex[v2_index].as_ref().map(|(_, d)| d);
        let mut d3 = self.closest_at_vertex[v3_index].as_ref().map(|(_, d)| d);

        let v2 = node.target_vertex_location();
        let (a, b, v1, v3) = if reversed {
            std::mem::swap(&mut d1, &mut d3);
            (&window.b, &window.a, &entry.b, &entry.a)
        } else {
            (&window.a, &window.b, &entry.a, &entry.b)
        };

        let dist = |p: &Point2<T>, q: &Point2<T>| -> T {
            self.kernel.compute_squared_distance_2(p, q).sqrt()
        };

        if let Some(d1) = d1 {
            if &(d + &dist(image, b)) > &(d1 + &dist(v1, b)) {
                return false;
            }
        }
        if let Some(d2) = d2 {
            if &(d + &dist(image, a)) > &(d2 + &dist(&v2, a)) {
                return false;
            }
        }
        if let Some(d3) = d3 {
            if &(d + &dist(image, a)) > &(d3 + &dist(v3, a)) {
                return false;
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Arbitration
    // ------------------------------------------------------------------

    fn process_node(&mut self, n: usize) {
        let left_side = self.nodes[n].has_left_side(&self.kernel);
        let right_side = self.nodes[n].has_right_side(&self.kernel);

        let mut propagate_left = false;
        let mut propagate_right = false;
        let mut propagate_middle = false;

        trace!(
            node = n,
            kind = ?self.nodes[n].kind,
            level = self.nodes[n].level,
            left_side,
            right_side,
            "processing node"
        );

        if self.nodes[n].is_source_node() || (left_side && right_side) {
            // The apex is inside the cone: compete for the entry edge.
            let entry = self.nodes[n].entry_edge;
            let new_distance = self.nodes[n].distance_from_target_to_root();
            let occupier = self.edge_occupiers[entry].clone();

            let mut is_left_of_current = false;
            if let Some((occ, _)) = &occupier {
                if self.nodes[n].is_vertex_node() {
                    is_left_of_current = false;
                } else if self.nodes[*occ].is_vertex_node() {
                    is_left_of_current = true;
                } else {
                    let ordering = self.kernel.compare_relative_intersection_along_segment_2(
                        &self.nodes[n].entry_segment(),
                        &self.nodes[n].ray_to_target_vertex(),
                        &self.nodes[*occ].entry_segment(),
                        &self.nodes[*occ].ray_to_target_vertex(),
                    );
                    is_left_of_current = ordering == Ordering::Less;
                }
            }

            let wins = match &occupier {
                None => true,
                Some((_, occ_distance)) => occ_distance > &new_distance,
            };

            if wins {
                self.edge_occupiers[entry] = Some((n, new_distance.clone()));

                propagate_left = true;
                propagate_right = true;

                // A source cone points at a single far edge (the left one
                // by convention); a pseudo-source cone over the null face
                // has no far edge at all.
                if !self.nodes[n].is_interval() {
                    propagate_right = false;
                    if self.nodes[n].is_null_face(self.mesh) {
                        propagate_left = false;
                    }
                }

                if let Some((loser, _)) = occupier {
                    debug!(node = n, loser, is_left_of_current, "occupier displaced");
                    if is_left_of_current {
                        if let Some(child) = self.nodes[loser].left_child.take() {
                            self.delete_node(child);
                        } else if let Some(ev) = self.nodes[loser].pending_left.take() {
                            self.queue.cancel(ev);
                        }
                    } else if let Some(child) = self.nodes[loser].right_child.take() {
                        self.delete_node(child);
                    } else if let Some(ev) = self.nodes[loser].pending_right.take() {
                        self.queue.cancel(ev);
                    }
                }

                let target = self.nodes[n].target_vertex(self.mesh);
                let closest = self.closest_at_vertex[target].clone();
                let improves = match &closest {
                    None => true,
                    Some((_, closest_distance)) => closest_distance > &new_distance,
                };

                if improves {
                    if self.vertex_is_pseudo_source[target] {
                        if let Some((previous, _)) = closest {
                            debug!(node = n, previous, target, "evicting pseudo-source fan");
                            if let Some(ev) = self.nodes[previous].pending_middle.take() {
                                self.queue.cancel(ev);
                            }
                            while let Some(child) = self.nodes[previous].middle_children.pop() {
                                self.delete_node(child);
                            }
                        }
                        propagate_middle = true;
                    }
                    self.closest_at_vertex[target] = Some((n, new_distance));
                }
            } else {
                // Lost arbitration: keep only the side facing away from
                // the winner.
                if is_left_of_current {
                    propagate_left = true;
                } else if !self.nodes[n].is_source_node() {
                    propagate_right = true;
                }
            }
        } else {
            propagate_left = left_side;
            propagate_right = right_side;
        }

        if self.nodes[n].level < self.mesh.num_faces() {
            if propagate_left {
                self.push_left_child(n);
            }
            if propagate_right && !self.nodes[n].is_source_node() {
                self.push_right_child(n);
            }
            if propagate_middle {
                self.push_middle_child(n);
            }
        } else {
            trace!(node = n, "level cap reached");
        }
    }

    // ------------------------------------------------------------------
    // Event creation
    // ------------------------------------------------------------------

    fn clip_to_bounds(
        &self,
        segment: Segment2<T>,
        left_boundary: &Ray2<T>,
        right_boundary: &Ray2<T>,
    ) -> Segment2<T> {
        let left_point = match self
            .kernel
            .intersect_segment_ray_2(&segment, left_boundary)
        {
            Some(SegmentIntersection::Point(p)) => p,
            _ => segment.a.clone(),
        };
        let right_point = match self
            .kernel
            .intersect_segment_ray_2(&segment, right_boundary)
        {
            Some(SegmentIntersection::Point(p)) => p,
            _ => segment.b.clone(),
        };
        Segment2::new(&left_point, &right_point)
    }

    fn push_left_child(&mut self, n: usize) {
        let edge = self.nodes[n].left_child_edge(self.mesh);
        if self.mesh.face_of(edge).is_none() {
            return;
        }

        let window = self.clip_to_bounds(
            self.nodes[n].left_child_base_segment(),
            &self.nodes[n].left_boundary(),
            &self.nodes[n].right_boundary(),
        );
        let estimate = self.nodes[n]
            .distance_to_root(&window.a)
            .min(self.nodes[n].distance_to_root(&window.b));
        if !is_finite(&estimate) {
            // The kernel could not construct the clipped window; prune.
            trace!(node = n, "left window overflowed");
            return;
        }

        trace!(node = n, ?estimate, "push left");
        let event = self
            .queue
            .push(n, EventKind::LeftChild, Some(window), estimate);
        self.nodes[n].pending_left = Some(event);
    }

    fn push_right_child(&mut self, n: usize) {
        let edge = self.nodes[n].right_child_edge(self.mesh);
        if self.mesh.face_of(edge).is_none() {
            return;
        }

        let window = self.clip_to_bounds(
            self.nodes[n].right_child_base_segment(),
            &self.nodes[n].left_boundary(),
            &self.nodes[n].right_boundary(),
        );
        let estimate = self.nodes[n]
            .distance_to_root(&window.a)
            .min(self.nodes[n].distance_to_root(&window.b));
        if !is_finite(&estimate) {
            trace!(node = n, "right window overflowed");
            return;
        }

        trace!(node = n, ?estimate, "push right");
        let event = self
            .queue
            .push(n, EventKind::RightChild, Some(window), estimate);
        self.nodes[n].pending_right = Some(event);
    }

    fn push_middle_child(&mut self, n: usize) {
        let estimate = self.nodes[n].distance_from_target_to_root();
        trace!(node = n, ?estimate, "push middle");
        let event = self.queue.push(n, EventKind::PseudoSource, None, estimate);
        self.nodes[n].pending_middle = Some(event);
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Removes a subtree: cancels every pending event below `root` and
    /// releases occupier and closest entries held by removed nodes.
    fn delete_node(&mut self, root: usize) {
        let mut stack = vec![root];
        while let Some(n) = stack.pop() {
            if self.nodes[n].removed {
                continue;
            }
            self.nodes[n].removed = true;

            for pending in [
                self.nodes[n].pending_left.take(),
                self.nodes[n].pending_right.take(),
                self.nodes[n].pending_middle.take(),
            ]
            .into_iter()
            .flatten()
            {
                self.queue.cancel(pending);
            }

            if let Some(child) = self.nodes[n].left_child.take() {
                stack.push(child);
            }
            if let Some(child) = self.nodes[n].right_child.take() {
                stack.push(child);
            }
            while let Some(child) = self.nodes[n].middle_children.pop() {
                stack.push(child);
            }

            let entry = self.nodes[n].entry_edge;
            if entry != usize::MAX
                && self.edge_occupiers[entry]
                    .as_ref()
                    .is_some_and(|(occ, _)| *occ == n)
            {
                self.edge_occupiers[entry] = None;

                let target = self.nodes[n].target_vertex(self.mesh);
                if self.closest_at_vertex[target]
                    .as_ref()
                    .is_some_and(|(c, _)| *c == n)
                {
                    self.closest_at_vertex[target] = None;
                }
            }
        }
    }

    fn set_vertex_types(&mut self) {
        for v in 0..self.mesh.num_vertices() {
            self.vertex_is_pseudo_source[v] = self.mesh.vertices[v].half_edge.is_some()
                && (self.mesh.is_boundary_vertex(v) || self.kernel.is_saddle_vertex(self.mesh, v));
            self.closest_at_vertex[v] = None;
        }
        for h in 0..self.mesh.num_half_edges() {
            self.edge_occupiers[h] = None;
        }
    }

    fn reset_containers(&mut self) {
        self.vertex_is_pseudo_source = vec![false; self.mesh.num_vertices()];
        self.closest_at_vertex = vec![None; self.mesh.num_vertices()];
        self.edge_occupiers = vec![None; self.mesh.num_half_edges()];
        self.root_nodes.clear();
        self.seed_locations.clear();
        self.face_occupiers.clear();
        self.nodes.clear();
        self.queue.clear();
    }

    fn build_face_occupier_lists(&mut self) {
        let mut lists = vec![Vec::new(); self.mesh.num_faces()];

        let mut stack: Vec<usize> = self.root_nodes.clone();
        while let Some(n) = stack.pop() {
            let node = &self.nodes[n];
            if node.removed {
                continue;
            }
            if !node.is_root() {
                if let Some(face) = node.current_face(self.mesh) {
                    lists[face].push(n);
                }
            }
            stack.extend(node.left_child);
            stack.extend(node.right_child);
            stack.extend(node.middle_children.iter().copied());
        }

        for list in &mut lists {
            list.sort_by(|a, b| {
                T::cmp_ref(
                    &self.nodes[*a].distance_from_source_to_root,
                    &self.nodes[*b].distance_from_source_to_root,
                )
            });
        }
        self.face_occupiers = lists;
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Geodesic distance from `v` to the nearest source.
    pub fn shortest_distance_to_vertex(&self, v: usize) -> Result<T, SurfPathError> {
        match self.closest_at_vertex.get(v) {
            Some(Some((_, d))) => Ok(d.clone()),
            _ => Err(SurfPathError::Unreachable),
        }
    }

    /// Geodesic distance from a surface location to the nearest source.
    pub fn shortest_distance_to_location(
        &self,
        face: usize,
        location: &Barycentric<T>,
    ) -> Result<T, SurfPathError> {
        classify_barycentric(location)?;
        match self.nearest_on_face(face, location) {
            Some((_, d)) => Ok(d),
            None => Err(SurfPathError::Unreachable),
        }
    }

    /// 3D coordinates of a barycentric location on a face.
    pub fn get_face_location(&self, face: usize, location: &Barycentric<T>) -> Point3<T> {
        let tri = self
            .mesh
            .triangle_from_half_edge(self.mesh.faces[face].half_edge);
        self.kernel.construct_triangle_location_3(&tri, location)
    }

    /// Feature sequence of the shortest path from vertex `v` back to its
    /// nearest source.
    pub fn shortest_path_sequence_from_vertex<V: PathVisitor<T>>(
        &self,
        v: usize,
        visitor: &mut V,
    ) -> Result<(), SurfPathError> {
        let (node, _) = self
            .closest_at_vertex
            .get(v)
            .cloned()
            .flatten()
            .ok_or(SurfPathError::Unreachable)?;
        if self.nodes[node].is_root() {
            // The query vertex is itself a source.
            return Ok(());
        }
        let start = self.nodes[node].target_vertex_location();
        self.visit_shortest_path(node, start, visitor)
    }

    /// Feature sequence of the shortest path from a surface location back
    /// to its nearest source.
    pub fn shortest_path_sequence_from_location<V: PathVisitor<T>>(
        &self,
        face: usize,
        location: &Barycentric<T>,
        visitor: &mut V,
    ) -> Result<(), SurfPathError> {
        classify_barycentric(location)?;
        let (node, _) = self
            .nearest_on_face(face, location)
            .ok_or(SurfPathError::Unreachable)?;
        let start = self.face_location_in_node_frame(node, location);
        self.visit_shortest_path(node, start, visitor)
    }

    /// 3D polyline of the shortest path from vertex `v`, query end first.
    pub fn shortest_path_points_from_vertex<V: PointVisitor<T>>(
        &self,
        v: usize,
        visitor: &mut V,
    ) -> Result<(), SurfPathError> {
        let mut wrapper = PointPathVisitorWrapper::new(self.mesh, &self.kernel, visitor);
        wrapper.on_vertex(v);
        self.shortest_path_sequence_from_vertex(v, &mut wrapper)
    }

    /// 3D polyline of the shortest path from a surface location, query
    /// end first.
    pub fn shortest_path_points_from_location<V: PointVisitor<T>>(
        &self,
        face: usize,
        location: &Barycentric<T>,
        visitor: &mut V,
    ) -> Result<(), SurfPathError> {
        let mut wrapper = PointPathVisitorWrapper::new(self.mesh, &self.kernel, visitor);
        wrapper.on_face(face, location);
        self.shortest_path_sequence_from_location(face, location, &mut wrapper)
    }

    fn nearest_on_face(&self, face: usize, location: &Barycentric<T>) -> Option<(usize, T)> {
        let mut best: Option<(usize, T)> = None;

        for &candidate in self.face_occupiers.get(face)? {
            if let Some((_, best_distance)) = &best {
                // The list is sorted by distance-from-source; nothing
                // further can win.
                if &self.nodes[candidate].distance_from_source_to_root >= best_distance {
                    break;
                }
            }

            let image = self.face_location_in_node_frame(candidate, location);
            if self.nodes[candidate].inside_window(&self.kernel, &image) {
                let distance = self.nodes[candidate].distance_to_root(&image);
                let better = match &best {
                    None => true,
                    Some((_, best_distance)) => &distance < best_distance,
                };
                if better {
                    best = Some((candidate, distance));
                }
            }
        }

        best
    }

    /// Image of a barycentric face location in a node's layout frame; the
    /// triple is rotated to the node's entry edge first.
    fn face_location_in_node_frame(&self, node: usize, location: &Barycentric<T>) -> Point2<T> {
        let k = self.mesh.half_edge_index_in_face(self.nodes[node].entry_edge);
        self.kernel
            .construct_triangle_location_2(&self.nodes[node].layout_face, &location.rotated(k))
    }

    /// Backwalk from `node` toward the root, emitting the feature events
    /// of the path in query-to-source order.
    fn visit_shortest_path<V: PathVisitor<T>>(
        &self,
        node: usize,
        start: Point2<T>,
        visitor: &mut V,
    ) -> Result<(), SurfPathError> {
        let mut current = node;
        let mut location = start;

        while !self.nodes[current].is_root() {
            let n = &self.nodes[current];
            match n.kind {
                ConeKind::Interval => {
                    let entry = n.entry_segment();
                    let back_line = Line2::new(&n.source_image, &location);

                    let crossing = match self.kernel.intersect_segment_line_2(&entry, &back_line) {
                        Some(SegmentIntersection::Point(p)) => p,
                        other => {
                            debug_assert!(
                                false,
                                "entry segment must be crossed exactly once, got {:?}",
                                other.is_some()
                            );
                            return Err(SurfPathError::DegeneratePropagation);
                        }
                    };
                    let t = self
                        .kernel
                        .parametric_distance_along_segment_2(&entry.a, &entry.b, &crossing);
                    if !is_finite(&t) {
                        return Err(SurfPathError::NumericOverflow);
                    }
                    visitor.on_edge(n.entry_edge, t.clone());

                    let parent = n.parent.expect("interval node has a parent");
                    let base = if self.nodes[parent].left_child == Some(current) {
                        self.nodes[parent].left_child_base_segment()
                    } else {
                        debug_assert_eq!(self.nodes[parent].right_child, Some(current));
                        self.nodes[parent].right_child_base_segment()
                    };
                    location = interpolate_points(&base.a, &base.b, &t);
                    current = parent;
                }
                ConeKind::EdgeSource => {
                    let (he, t) = n
                        .source_edge
                        .clone()
                        .expect("edge source carries its seed edge");
                    visitor.on_edge(he, t);
                    current = n.parent.expect("edge source has a parent");
                }
                ConeKind::VertexSource => {
                    visitor.on_vertex(self.mesh.target(n.entry_edge));
                    let parent = n.parent.expect("vertex source has a parent");
                    if !self.nodes[parent].is_root() {
                        location = self.nodes[parent].target_vertex_location();
                    }
                    current = parent;
                }
                ConeKind::FaceSource => {
                    let (face, seed) = &self.seed_locations[n.tree_id];
                    visitor.on_face(*face, seed);
                    current = n.parent.expect("face source has a parent");
                }
                ConeKind::Root => unreachable!("loop exits at the root"),
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn alloc_node(&mut self, node: ConeTreeNode<T>) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn alloc_child(&mut self, parent: usize, mut node: ConeTreeNode<T>) -> usize {
        node.parent = Some(parent);
        self.alloc_node(node)
    }
}

fn is_finite<T: Scalar>(x: &T) -> bool {
    x.to_f64().is_some_and(f64::is_finite)
}

fn weighted_point<T>(a: &Point2<T>, wa: &T, b: &Point2<T>, wb: &T) -> Point2<T>
where
    T: Scalar,
    for<'c> &'c T: Add<&'c T, Output = T> + Sub<&'c T, Output = T> + Mul<&'c T, Output = T>,
{
    Point2::from([
        &(&a[0] * wa) + &(&b[0] * wb),
        &(&a[1] * wa) + &(&b[1] * wb),
    ])
}
