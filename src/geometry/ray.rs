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

use std::ops::{Add, Div, Mul, Sub};

use crate::{
    geometry::{
        point::{Point, PointOps},
        vector::Vector,
    },
    numeric::scalar::Scalar,
};

/// A half-line through `source` and `through`, extending beyond `through`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ray<T: Scalar, const N: usize> {
    pub source: Point<T, N>,
    pub through: Point<T, N>,
}

impl<T, const N: usize> Ray<T, N>
where
    T: Scalar,
    for<'c> &'c T: Add<&'c T, Output = T>
        + Sub<&'c T, Output = T>
        + Mul<&'c T, Output = T>
        + Div<&'c T, Output = T>,
{
    pub fn new(source: &Point<T, N>, through: &Point<T, N>) -> Self {
        Self {
            source: source.clone(),
            through: through.clone(),
        }
    }

    pub fn direction(&self) -> Vector<T, N> {
        self.source.vector_to(&self.through)
    }

    pub fn supporting_line(&self) -> Line<T, N> {
        Line {
            a: self.source.clone(),
            b: self.through.clone(),
        }
    }
}

/// The infinite line through two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
}

impl<T, const N: usize> Line<T, N>
where
    T: Scalar,
    for<'c> &'c T: Add<&'c T, Output = T>
        + Sub<&'c T, Output = T>
        + Mul<&'c T, Output = T>
        + Div<&'c T, Output = T>,
{
    pub fn new(a: &Point<T, N>, b: &Point<T, N>) -> Self {
        Self {
            a: a.clone(),
            b: b.clone(),
        }
    }

    pub fn direction(&self) -> Vector<T, N> {
        self.a.vector_to(&self.b)
    }
}

pub type Ray2<T> = Ray<T, 2>;
pub type Line2<T> = Line<T, 2>;
