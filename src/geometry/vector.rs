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
    array::from_fn,
    ops::{Add, Index, Neg, Sub},
};

use crate::{
    geometry::{point::Point, spatial_element::SpatialElement},
    numeric::scalar::Scalar,
    operations::Sqrt,
};

/// A displacement, represented over the same storage as [`Point`].
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize>(pub Point<T, N>);

pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn norm2(&self) -> T;
    fn norm(&self) -> T;
    fn scale(&self, s: &T) -> Self;
    fn normalized(&self) -> Self;
}

/// Scalar (z-component) cross product of planar vectors.
pub trait Cross2<T> {
    fn cross(&self, other: &Self) -> T;
}

pub trait Cross3<T> {
    fn cross(&self, other: &Self) -> Self;
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Vector(Point { coords })
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Vector(Point::from_vals(vals))
    }

    pub fn zero() -> Self {
        Vector(Point {
            coords: from_fn(|_| T::from(0)),
        })
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0.coords[i]
    }
}

impl<T, const N: usize> VectorOps<T, N> for Vector<T, N>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + std::ops::Mul<&'a T, Output = T>
        + std::ops::Div<&'a T, Output = T>,
{
    fn dot(&self, other: &Self) -> T {
        let mut acc = T::from(0);
        for i in 0..N {
            acc += &(&self[i] * &other[i]);
        }
        acc
    }

    fn norm2(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        self.norm2().sqrt()
    }

    fn scale(&self, s: &T) -> Self {
        Vector(Point {
            coords: from_fn(|i| &self[i] * s),
        })
    }

    fn normalized(&self) -> Self {
        let n = self.norm();
        Vector(Point {
            coords: from_fn(|i| &self[i] / &n),
        })
    }
}

impl<T> Cross2<T> for Vector<T, 2>
where
    T: Scalar,
    for<'a> &'a T: Sub<&'a T, Output = T> + std::ops::Mul<&'a T, Output = T>,
{
    fn cross(&self, other: &Self) -> T {
        &(&self[0] * &other[1]) - &(&self[1] * &other[0])
    }
}

impl<T> Cross3<T> for Vector<T, 3>
where
    T: Scalar,
    for<'a> &'a T: Sub<&'a T, Output = T> + std::ops::Mul<&'a T, Output = T>,
{
    fn cross(&self, other: &Self) -> Self {
        Vector::new([
            &(&self[1] * &other[2]) - &(&self[2] * &other[1]),
            &(&self[2] * &other[0]) - &(&self[0] * &other[2]),
            &(&self[0] * &other[1]) - &(&self[1] * &other[0]),
        ])
    }
}

impl<T> Vector<T, 2>
where
    T: Scalar,
{
    /// Counterclockwise perpendicular: (x, y) -> (-y, x).
    pub fn perp(&self) -> Self {
        Vector::new([-self[1].clone(), self[0].clone()])
    }
}

impl<'a, 'b, T, const N: usize> Add<&'b Vector<T, N>> for &'a Vector<T, N>
where
    T: Scalar,
    for<'c> &'c T: Add<&'c T, Output = T>,
{
    type Output = Vector<T, N>;
    fn add(self, rhs: &'b Vector<T, N>) -> Self::Output {
        Vector(Point {
            coords: from_fn(|i| &self[i] + &rhs[i]),
        })
    }
}

impl<'a, 'b, T, const N: usize> Sub<&'b Vector<T, N>> for &'a Vector<T, N>
where
    T: Scalar,
    for<'c> &'c T: Sub<&'c T, Output = T>,
{
    type Output = Vector<T, N>;
    fn sub(self, rhs: &'b Vector<T, N>) -> Self::Output {
        Vector(Point {
            coords: from_fn(|i| &self[i] - &rhs[i]),
        })
    }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Scalar,
{
    type Output = Vector<T, N>;
    fn neg(self) -> Self::Output {
        Vector(Point {
            coords: self.0.coords.map(|c| -c),
        })
    }
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
