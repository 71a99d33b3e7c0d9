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

use std::ops::Index;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
    shortest_path::error::SurfPathError,
};

/// A convex combination over the three corners of a face. Corner `j` is
/// the source vertex of the face's j-th half-edge, counted from the
/// canonical half-edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Barycentric<T: Scalar>(pub [T; 3]);

impl<T: Scalar> Barycentric<T> {
    pub fn new(b0: T, b1: T, b2: T) -> Self {
        Barycentric([b0, b1, b2])
    }

    pub fn from_vals<V>(vals: [V; 3]) -> Self
    where
        V: Into<T>,
    {
        Barycentric(vals.map(|v| v.into()))
    }

    /// Cyclic left shift by `k`: coordinate `i` of the result is
    /// coordinate `(i + k) % 3` of `self`. Re-expresses the location for a
    /// face cycle that starts `k` half-edges later.
    pub fn rotated(&self, k: usize) -> Self {
        Barycentric([
            self.0[k % 3].clone(),
            self.0[(k + 1) % 3].clone(),
            self.0[(k + 2) % 3].clone(),
        ])
    }
}

impl<T: Scalar> Index<usize> for Barycentric<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

/// Where a barycentric triple sits within its face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarycentricType {
    Internal,
    /// On the face's half-edge `i` (from corner `i` to corner `i + 1`);
    /// coordinate `(i + 2) % 3` is zero.
    Edge(usize),
    /// At corner `i`.
    Vertex(usize),
}

/// Classifies a barycentric triple, rejecting triples outside the simplex.
pub fn classify_barycentric<T: Scalar>(
    location: &Barycentric<T>,
) -> Result<BarycentricType, SurfPathError> {
    let eps = T::tolerance();

    let mut sum = T::zero();
    for i in 0..3 {
        if location[i] < -eps.clone() {
            return Err(SurfPathError::InvalidFaceLocation);
        }
        sum += &location[i];
    }
    if (sum - T::one()).abs() > T::query_tolerance() {
        return Err(SurfPathError::InvalidFaceLocation);
    }

    let zero = [
        location[0].abs() <= eps,
        location[1].abs() <= eps,
        location[2].abs() <= eps,
    ];

    match zero.iter().filter(|z| **z).count() {
        0 => Ok(BarycentricType::Internal),
        1 => {
            let k = zero.iter().position(|z| *z).unwrap();
            Ok(BarycentricType::Edge((k + 1) % 3))
        }
        2 => {
            let i = zero.iter().position(|z| !*z).unwrap();
            Ok(BarycentricType::Vertex(i))
        }
        _ => Err(SurfPathError::InvalidFaceLocation),
    }
}
