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
    array::{self, from_fn},
    ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign},
};

use crate::{
    geometry::{
        spatial_element::SpatialElement,
        vector::{Vector, VectorOps},
    },
    numeric::scalar::Scalar,
    operations::Sqrt,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub trait PointOps<T: Scalar, const N: usize>: Sized {
    type Vector: VectorOps<T, N>;

    fn as_vector(&self) -> Self::Vector;
    fn add_vector(&self, v: &Self::Vector) -> Self;
    fn vector_to(&self, other: &Self) -> Self::Vector;
    fn midpoint(&self, other: &Self) -> Self;
    fn distance_squared_to(&self, other: &Self) -> T;
    fn distance_to(&self, other: &Self) -> T;
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point {
            coords: array::from_fn(|_| T::from(0)),
        }
    }
}

impl<T: Scalar, const N: usize> SpatialElement<T, N> for Point<T, N> {
    fn new(coords: [T; N]) -> Point<T, N> {
        Point { coords }
    }

    fn from_vals<V>(vals: [V; N]) -> Point<T, N>
    where
        V: Into<T>,
    {
        Point {
            coords: vals.map(|v| v.into()),
        }
    }

    fn coords(&self) -> &[T; N] {
        &self.coords
    }

    fn coords_mut(&mut self) -> &mut [T; N] {
        &mut self.coords
    }

    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<'a, 'b, T, const N: usize> Add<&'b Point<T, N>> for &'a Point<T, N>
where
    T: Scalar + for<'c> AddAssign<&'c T>,
{
    type Output = Point<T, N>;
    fn add(self, rhs: &'b Point<T, N>) -> Self::Output {
        let mut out = self.clone();
        for i in 0..N {
            out.coords[i] += &rhs.coords[i];
        }
        out
    }
}

impl<'a, 'b, T, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N>
where
    T: Scalar + for<'c> SubAssign<&'c T>,
{
    type Output = Point<T, N>;
    fn sub(self, rhs: &'b Point<T, N>) -> Self::Output {
        let mut out = self.clone();
        for i in 0..N {
            out.coords[i] -= &rhs.coords[i];
        }
        out
    }
}

impl<T, const N: usize> PointOps<T, N> for Point<T, N>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + std::ops::Mul<&'a T, Output = T>
        + std::ops::Div<&'a T, Output = T>,
{
    type Vector = Vector<T, N>;

    fn as_vector(&self) -> Vector<T, N> {
        Vector(self.clone())
    }

    fn add_vector(&self, v: &Vector<T, N>) -> Self {
        Point {
            coords: from_fn(|i| &self.coords[i] + &v[i]),
        }
    }

    fn vector_to(&self, other: &Self) -> Vector<T, N> {
        Vector(Point {
            coords: from_fn(|i| &other.coords[i] - &self.coords[i]),
        })
    }

    fn midpoint(&self, other: &Self) -> Self {
        let two: T = T::from(2);
        Point {
            coords: from_fn(|i| {
                let sum = &self.coords[i] + &other.coords[i];
                &sum / &two
            }),
        }
    }

    fn distance_squared_to(&self, other: &Self) -> T {
        let mut acc = T::from(0);
        for i in 0..N {
            let d = &other.coords[i] - &self.coords[i];
            acc += &(&d * &d);
        }
        acc
    }

    fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;
