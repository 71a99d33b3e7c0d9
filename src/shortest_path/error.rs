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

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfPathError {
    /// A barycentric triple outside the simplex, or one that does not sum
    /// to one within tolerance.
    #[error("barycentric coordinate is not a valid face location")]
    InvalidFaceLocation,

    /// A face whose half-edge cycle is not exactly three half-edges.
    #[error("face {0} is not a triangle")]
    NonTriangulatedMesh(usize),

    /// The queried vertex or location is not reached by any source.
    #[error("no shortest path reaches the query")]
    Unreachable,

    /// The kernel returned an intersection kind the tree invariants rule
    /// out; reported during path reconstruction, where an intersection is
    /// guaranteed to exist.
    #[error("kernel intersection inconsistent with the sequence tree")]
    DegeneratePropagation,

    /// The kernel could not construct a finite offset point.
    #[error("numeric overflow while constructing an offset point")]
    NumericOverflow,
}
