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
    geometry::{point::Point, segment::Segment},
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Triangle<T: Scalar, const N: usize>(pub [Point<T, N>; 3]);

impl<T: Scalar, const N: usize> Triangle<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>, c: &Point<T, N>) -> Self {
        Triangle([a.clone(), b.clone(), c.clone()])
    }

    /// Edge `i` runs from corner `i` to corner `(i + 1) % 3`.
    pub fn edge(&self, i: usize) -> Segment<T, N> {
        Segment::new(&self.0[i], &self.0[(i + 1) % 3])
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Triangle<T, N> {
    type Output = Point<T, N>;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

pub type Triangle2<T> = Triangle<T, 2>;
pub type Triangle3<T> = Triangle<T, 3>;
