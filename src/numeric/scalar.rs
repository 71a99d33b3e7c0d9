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

use num_traits::ToPrimitive;

use crate::operations::{Abs, One, Sqrt, Trig, Zero};

use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// The number type of the crate: an ordered field with square root.
///
/// Geodesic distances are sums of Euclidean segment lengths, so a square
/// root is required; purely rational models are therefore not supported.
/// `f64` is the provided model. Predicates use the absolute tolerances
/// below, `cmp_ref` provides a total order for the priority queue and for
/// sorting occupier lists.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Abs
    + Sqrt
    + Trig
    + Zero
    + One
    + ToPrimitive
    + From<f64>
    + From<i32>
{
    fn from_num_den(num: i32, den: i32) -> Self;

    fn cmp_ref(a: &Self, b: &Self) -> Ordering;

    fn tolerance() -> Self;

    fn tolerance_squared() -> Self;

    fn query_tolerance() -> Self;

    fn approx_eq(&self, other: &Self) -> bool;

    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }
}

pub const EPS: f64 = 1e-10;

impl Scalar for f64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }

    #[inline(always)]
    fn cmp_ref(a: &Self, b: &Self) -> Ordering {
        // total_cmp handles -0.0 and NaN deterministically
        a.total_cmp(b)
    }

    fn tolerance() -> Self {
        EPS
    }

    fn tolerance_squared() -> Self {
        EPS * EPS
    }

    fn query_tolerance() -> Self {
        1e-8
    }

    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPS
    }
}
