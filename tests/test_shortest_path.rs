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

use common::{
    EventCollector, PathEvent, bary, cube, disjoint_triangles, flat_square, grid_with_hole, p3,
    saddle_fan, tetrahedron,
};
use surfpath::geometry::PointOps;
use surfpath::kernel::PlanarKernel;
use surfpath::mesh::{Face, HalfEdge, Mesh};
use surfpath::shortest_path::{PolylineCollector, ShortestPathEngine, SurfPathError};

const TOL: f64 = 1e-6;

fn engine<'m>(mesh: &'m Mesh<f64, 3>) -> ShortestPathEngine<'m, f64, PlanarKernel<f64>> {
    ShortestPathEngine::new(mesh, PlanarKernel::new())
}

// ----------------------------------------------------------------------
// Scenario: unit tetrahedron, source at vertex A
// ----------------------------------------------------------------------

#[test]
fn tetrahedron_vertex_source_distances() {
    let mesh = tetrahedron();
    let mut sp = engine(&mesh);
    // face 0 = (A, B, D); corner 0 is A
    sp.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();

    assert!(sp.shortest_distance_to_vertex(0).unwrap().abs() < TOL);
    assert!((sp.shortest_distance_to_vertex(1).unwrap() - 1.0).abs() < TOL);
    assert!((sp.shortest_distance_to_vertex(2).unwrap() - 1.0).abs() < TOL);
    assert!((sp.shortest_distance_to_vertex(3).unwrap() - 1.0).abs() < TOL);
}

#[test]
fn tetrahedron_path_to_adjacent_vertex_passes_only_the_source() {
    let mesh = tetrahedron();
    let mut sp = engine(&mesh);
    sp.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();

    let mut events = EventCollector::new();
    sp.shortest_path_sequence_from_vertex(1, &mut events).unwrap();
    assert_eq!(events.events, vec![PathEvent::Vertex(0)]);

    let mut line = PolylineCollector::new();
    sp.shortest_path_points_from_vertex(1, &mut line).unwrap();
    assert_eq!(line.points.len(), 2);
    assert!((line.length() - 1.0).abs() < TOL);
}

#[test]
fn tetrahedron_distance_to_opposite_face_centroid() {
    let mesh = tetrahedron();
    let mut sp = engine(&mesh);
    sp.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();

    // face 1 = (B, C, D) is the face opposite A; the geodesic unfolds
    // across any of its edges to length sqrt(2)/2 + sqrt(6)/6.
    let expected = 2.0_f64.sqrt() / 2.0 + 6.0_f64.sqrt() / 6.0;
    let third = 1.0 / 3.0;
    let d = sp
        .shortest_distance_to_location(1, &bary(third, third, third))
        .unwrap();
    assert!((d - expected).abs() < TOL, "got {}, expected {}", d, expected);

    // the reconstructed polyline has the same length
    let mut line = PolylineCollector::new();
    sp.shortest_path_points_from_location(1, &bary(third, third, third), &mut line)
        .unwrap();
    assert!((line.length() - expected).abs() < TOL);
}

// ----------------------------------------------------------------------
// Scenario: flat square (no curvature)
// ----------------------------------------------------------------------

#[test]
fn flat_square_distances_are_euclidean() {
    let mesh = flat_square();
    let mut sp = engine(&mesh);
    // source at vertex A = (0, 0)
    sp.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();

    assert!(sp.shortest_distance_to_vertex(0).unwrap().abs() < TOL);
    assert!((sp.shortest_distance_to_vertex(1).unwrap() - 1.0).abs() < TOL);
    assert!((sp.shortest_distance_to_vertex(2).unwrap() - 2.0_f64.sqrt()).abs() < TOL);
    assert!((sp.shortest_distance_to_vertex(3).unwrap() - 1.0).abs() < TOL);

    // interior points keep the planar metric
    let third = 1.0 / 3.0;
    let centroid0 = p3(2.0 * third, third, 0.0);
    assert!(
        sp.get_face_location(0, &bary(third, third, third))
            .distance_to(&centroid0)
            < TOL
    );
    let d = sp
        .shortest_distance_to_location(0, &bary(third, third, third))
        .unwrap();
    let expected = p3(0.0, 0.0, 0.0).distance_to(&centroid0);
    assert!((d - expected).abs() < TOL);
}

#[test]
fn flat_square_path_crosses_the_diagonal_at_its_midpoint() {
    let mesh = flat_square();
    let mut sp = engine(&mesh);
    // source at vertex D = (0, 1): face 1 = (A, C, D), corner 2
    sp.compute_shortest_paths([(1, bary(0.0, 0.0, 1.0))]).unwrap();

    // query the centroid of face 0 = (A, B, C)
    let third = 1.0 / 3.0;
    let mut events = EventCollector::new();
    sp.shortest_path_sequence_from_location(0, &bary(third, third, third), &mut events)
        .unwrap();

    assert_eq!(events.events.len(), 2);
    let diagonal = mesh.half_edge_between(2, 0).unwrap();
    match &events.events[0] {
        PathEvent::Edge(he, t) => {
            assert_eq!(*he, diagonal);
            assert!((t - 0.5).abs() < TOL);
        }
        other => panic!("expected an edge crossing, got {:?}", other),
    }
    assert_eq!(events.events[1], PathEvent::Vertex(3));

    let d = sp
        .shortest_distance_to_location(0, &bary(third, third, third))
        .unwrap();
    let expected = p3(0.0, 1.0, 0.0).distance_to(&p3(2.0 * third, third, 0.0));
    assert!((d - expected).abs() < TOL);
}

#[test]
fn flat_square_edge_source_spreads_to_both_sides() {
    let mesh = flat_square();
    let mut sp = engine(&mesh);
    // source at the diagonal midpoint (0.5, 0.5): on face 0 that is the
    // edge from corner 2 (C) to corner 0 (A)
    sp.compute_shortest_paths([(0, bary(0.5, 0.0, 0.5))]).unwrap();

    let half = 0.5_f64.sqrt();
    for v in 0..4 {
        let d = sp.shortest_distance_to_vertex(v).unwrap();
        assert!((d - half).abs() < TOL, "vertex {}: {}", v, d);
    }

    // the source location itself is at distance zero
    let d = sp.shortest_distance_to_location(0, &bary(0.5, 0.0, 0.5)).unwrap();
    assert!(d.abs() < TOL);

    // a path from B terminates with the seed edge crossing
    let mut events = EventCollector::new();
    sp.shortest_path_sequence_from_vertex(1, &mut events).unwrap();
    let diagonal = mesh.half_edge_between(2, 0).unwrap();
    assert_eq!(events.events, vec![PathEvent::Edge(diagonal, 0.5)]);
}

#[test]
fn face_interior_source_has_zero_self_distance() {
    let mesh = tetrahedron();
    let mut sp = engine(&mesh);
    sp.compute_shortest_paths([(1, bary(0.4, 0.3, 0.3))]).unwrap();

    let d = sp.shortest_distance_to_location(1, &bary(0.4, 0.3, 0.3)).unwrap();
    assert!(d.abs() < TOL);

    let mut events = EventCollector::new();
    sp.shortest_path_sequence_from_location(1, &bary(0.4, 0.3, 0.3), &mut events)
        .unwrap();
    assert_eq!(events.events.len(), 1);
    match &events.events[0] {
        PathEvent::Face(face, location) => {
            assert_eq!(*face, 1);
            assert!((location[0] - 0.4).abs() < TOL);
        }
        other => panic!("expected a face termination, got {:?}", other),
    }
}

// ----------------------------------------------------------------------
// Scenario: cube, corner to opposite corner
// ----------------------------------------------------------------------

#[test]
fn cube_opposite_corner_unfolds_to_sqrt_five() {
    let mesh = cube();
    let mut sp = engine(&mesh);
    // face 0 = (0, 3, 2); corner 0 is vertex 0
    sp.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();

    let d = sp.shortest_distance_to_vertex(6).unwrap();
    assert!(
        (d - 5.0_f64.sqrt()).abs() < TOL,
        "surface distance should unfold to sqrt(5), got {}",
        d
    );

    // the polyline across the surface has the same length
    let mut line = PolylineCollector::new();
    sp.shortest_path_points_from_vertex(6, &mut line).unwrap();
    assert!((line.length() - 5.0_f64.sqrt()).abs() < TOL);

    // adjacent corners keep their edge distances
    assert!((sp.shortest_distance_to_vertex(1).unwrap() - 1.0).abs() < TOL);
    assert!((sp.shortest_distance_to_vertex(2).unwrap() - 2.0_f64.sqrt()).abs() < TOL);
}

#[test]
fn cube_query_is_symmetric_under_source_swap() {
    let mesh = cube();

    let mut forward = engine(&mesh);
    forward.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();
    let d_forward = forward.shortest_distance_to_vertex(6).unwrap();

    // vertex 6 is corner 2 of face 6 = (1, 2, 6)
    let mut backward = engine(&mesh);
    backward.compute_shortest_paths([(6, bary(0.0, 0.0, 1.0))]).unwrap();
    let d_backward = backward.shortest_distance_to_vertex(0).unwrap();

    assert!((d_forward - d_backward).abs() < TOL);
}

// ----------------------------------------------------------------------
// Scenario: saddle vertex
// ----------------------------------------------------------------------

#[test]
fn saddle_path_passes_through_the_center_vertex() {
    let mesh = saddle_fan(0.5);
    let mut sp = engine(&mesh);
    // source at ring vertex 1: face 0 = (0, 1, 2), corner 1
    sp.compute_shortest_paths([(0, bary(0.0, 1.0, 0.0))]).unwrap();

    // the wedge angles at the center sum past 2π, so the straight route to
    // the opposite ring vertex goes through the center
    let spoke = 1.25_f64.sqrt();
    let d = sp.shortest_distance_to_vertex(4).unwrap();
    assert!((d - 2.0 * spoke).abs() < TOL, "got {}", d);

    let mut events = EventCollector::new();
    sp.shortest_path_sequence_from_vertex(4, &mut events).unwrap();
    assert_eq!(events.vertices(), vec![0, 1]);

    let mut line = PolylineCollector::new();
    sp.shortest_path_points_from_vertex(4, &mut line).unwrap();
    assert!((line.length() - 2.0 * spoke).abs() < TOL);
}

// ----------------------------------------------------------------------
// Scenario: boundary wrap-around
// ----------------------------------------------------------------------

#[test]
fn path_bends_around_a_hole_at_a_boundary_vertex() {
    let mesh = grid_with_hole();
    let mut sp = engine(&mesh);
    // source at grid corner (0, 0) = vertex 0; face 0 = (0, 1, 5)
    sp.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();

    // the straight diagonal crosses the hole; the shortest route bends at
    // a hole corner: sqrt(5) + sqrt(5)
    let expected = 2.0 * 5.0_f64.sqrt();
    let d = sp.shortest_distance_to_vertex(15).unwrap();
    assert!((d - expected).abs() < TOL, "got {}, expected {}", d, expected);

    let mut events = EventCollector::new();
    sp.shortest_path_sequence_from_vertex(15, &mut events).unwrap();
    // vertex 6 = (2, 1) and vertex 9 = (1, 2) are the two symmetric hole
    // corners the path may bend at
    let bends = events.vertices();
    assert!(
        bends.contains(&6) || bends.contains(&9),
        "path should bend at a hole corner, events: {:?}",
        events.events
    );

    let mut line = PolylineCollector::new();
    sp.shortest_path_points_from_vertex(15, &mut line).unwrap();
    assert!((line.length() - expected).abs() < TOL);
}

// ----------------------------------------------------------------------
// Multi-source and re-computation laws
// ----------------------------------------------------------------------

#[test]
fn multi_source_takes_the_minimum_field() {
    let mesh = flat_square();

    // sources at A and C separately
    let mut from_a = engine(&mesh);
    from_a.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();
    let mut from_c = engine(&mesh);
    from_c.compute_shortest_paths([(0, bary(0.0, 0.0, 1.0))]).unwrap();

    // both together
    let mut both = engine(&mesh);
    both.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0)), (0, bary(0.0, 0.0, 1.0))])
        .unwrap();

    for v in 0..mesh.num_vertices() {
        let a = from_a.shortest_distance_to_vertex(v).unwrap();
        let c = from_c.shortest_distance_to_vertex(v).unwrap();
        let m = both.shortest_distance_to_vertex(v).unwrap();
        assert!((m - a.min(c)).abs() < TOL, "vertex {}", v);
    }
}

#[test]
fn adding_a_source_never_increases_distances() {
    let mesh = cube();

    let mut single = engine(&mesh);
    single.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();
    let before: Vec<f64> = (0..mesh.num_vertices())
        .map(|v| single.shortest_distance_to_vertex(v).unwrap())
        .collect();

    let mut double = engine(&mesh);
    double
        .compute_shortest_paths([(0, bary(1.0, 0.0, 0.0)), (6, bary(0.0, 0.0, 1.0))])
        .unwrap();

    for v in 0..mesh.num_vertices() {
        let after = double.shortest_distance_to_vertex(v).unwrap();
        assert!(after <= before[v] + TOL, "vertex {}", v);
    }
}

#[test]
fn recomputation_with_identical_sources_is_idempotent() {
    let mesh = cube();
    let mut sp = engine(&mesh);

    sp.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();
    let first: Vec<f64> = (0..mesh.num_vertices())
        .map(|v| sp.shortest_distance_to_vertex(v).unwrap())
        .collect();

    sp.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();
    for v in 0..mesh.num_vertices() {
        assert_eq!(sp.shortest_distance_to_vertex(v).unwrap(), first[v]);
    }
}

// ----------------------------------------------------------------------
// Error behavior
// ----------------------------------------------------------------------

#[test]
fn disconnected_components_are_unreachable() {
    let mesh = disjoint_triangles();
    let mut sp = engine(&mesh);
    sp.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]).unwrap();

    assert!(sp.shortest_distance_to_vertex(0).unwrap().abs() < TOL);
    assert_eq!(
        sp.shortest_distance_to_vertex(4),
        Err(SurfPathError::Unreachable)
    );
    let third = 1.0 / 3.0;
    assert_eq!(
        sp.shortest_distance_to_location(1, &bary(third, third, third)),
        Err(SurfPathError::Unreachable)
    );

    let mut events = EventCollector::new();
    assert_eq!(
        sp.shortest_path_sequence_from_vertex(4, &mut events),
        Err(SurfPathError::Unreachable)
    );
}

#[test]
fn invalid_barycentric_sources_are_rejected() {
    let mesh = flat_square();
    let mut sp = engine(&mesh);

    assert_eq!(
        sp.compute_shortest_paths([(0, bary(0.7, 0.4, -0.1))]),
        Err(SurfPathError::InvalidFaceLocation)
    );
    assert_eq!(
        sp.compute_shortest_paths([(0, bary(0.2, 0.2, 0.2))]),
        Err(SurfPathError::InvalidFaceLocation)
    );
    assert_eq!(
        sp.compute_shortest_paths([(9, bary(1.0, 0.0, 0.0))]),
        Err(SurfPathError::InvalidFaceLocation)
    );
}

#[test]
fn non_triangular_faces_are_rejected() {
    // hand-wire a single quad face
    let mut mesh = Mesh::<f64, 3>::new();
    mesh.add_vertex(p3(0.0, 0.0, 0.0));
    mesh.add_vertex(p3(1.0, 0.0, 0.0));
    mesh.add_vertex(p3(1.0, 1.0, 0.0));
    mesh.add_vertex(p3(0.0, 1.0, 0.0));
    for i in 0..4 {
        let mut he = HalfEdge::new((i + 1) % 4);
        he.face = Some(0);
        he.next = (i + 1) % 4;
        he.prev = (i + 3) % 4;
        he.twin = i;
        mesh.half_edges.push(he);
        mesh.vertices[i].half_edge = Some(i);
    }
    mesh.faces.push(Face::new(0));

    let mut sp = engine(&mesh);
    assert_eq!(
        sp.compute_shortest_paths([(0, bary(1.0, 0.0, 0.0))]),
        Err(SurfPathError::NonTriangulatedMesh(0))
    );
}
