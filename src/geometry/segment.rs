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
    geometry::point::{Point, PointOps},
    numeric::scalar::Scalar,
};

pub trait SegmentOps<T: Scalar, const N: usize>: Sized {
    fn a(&self) -> &Point<T, N>;
    fn b(&self) -> &Point<T, N>;

    fn length(&self) -> T;
    fn midpoint(&self) -> Point<T, N>;
    fn inverse(&self) -> Self;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
}

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>) -> Self {
        Self {
            a: a.clone(),
            b: b.clone(),
        }
    }
}

impl<T, const N: usize> SegmentOps<T, N> for Segment<T, N>
where
    T: Scalar,
    for<'c> &'c T: Add<&'c T, Output = T>
        + Sub<&'c T, Output = T>
        + Mul<&'c T, Output = T>
        + Div<&'c T, Output = T>,
{
    fn a(&self) -> &Point<T, N> {
        &self.a
    }

    fn b(&self) -> &Point<T, N> {
        &self.b
    }

    fn length(&self) -> T {
        self.a.distance_to(&self.b)
    }

    fn midpoint(&self) -> Point<T, N> {
        self.a.midpoint(&self.b)
    }

    fn inverse(&self) -> Self {
        Self::new(&self.b, &self.a)
    }
}

/// Affine interpolation `a + t * (b - a)`, coordinate-wise.
pub fn interpolate_points<T, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    t: &T,
) -> Point<T, N>
where
    T: Scalar,
    for<'c> &'c T: Add<&'c T, Output = T> + Sub<&'c T, Output = T> + Mul<&'c T, Output = T>,
{
    Point {
        coords: std::array::from_fn(|i| {
            let d = &b.coords[i] - &a.coords[i];
            &a.coords[i] + &(&d * t)
        }),
    }
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;
