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

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{geometry::Segment2, numeric::scalar::Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    LeftChild,
    RightChild,
    PseudoSource,
}

/// A queued cone expansion. Once the owning node is evicted the event is
/// only ever read through its `cancelled` flag.
#[derive(Debug, Clone)]
pub struct ConeExpansionEvent<T: Scalar> {
    pub parent: usize,
    pub kind: EventKind,
    pub window: Option<Segment2<T>>,
    pub distance_estimate: T,
    pub cancelled: bool,
}

struct QueueEntry<T: Scalar> {
    estimate: T,
    id: usize,
}

impl<T: Scalar> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Scalar> Eq for QueueEntry<T> {}

impl<T: Scalar> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Scalar> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Inverted: BinaryHeap is a max-heap and we pop the smallest
        // estimate first. Ties resolve to the older event.
        T::cmp_ref(&other.estimate, &self.estimate).then_with(|| other.id.cmp(&self.id))
    }
}

/// Min-priority queue of cone expansions with lazy cancellation. Events
/// live in an arena so that pending back-pointers stay valid after pops.
#[derive(Debug, Default)]
pub struct EventQueue<T: Scalar> {
    events: Vec<ConeExpansionEvent<T>>,
    heap: BinaryHeap<QueueEntry<T>>,
}

impl<T: Scalar> std::fmt::Debug for QueueEntry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueEntry")
            .field("estimate", &self.estimate)
            .field("id", &self.id)
            .finish()
    }
}

impl<T: Scalar> EventQueue<T> {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(
        &mut self,
        parent: usize,
        kind: EventKind,
        window: Option<Segment2<T>>,
        distance_estimate: T,
    ) -> usize {
        let id = self.events.len();
        self.events.push(ConeExpansionEvent {
            parent,
            kind,
            window,
            distance_estimate: distance_estimate.clone(),
            cancelled: false,
        });
        self.heap.push(QueueEntry {
            estimate: distance_estimate,
            id,
        });
        id
    }

    /// Next event id in nondecreasing estimate order; cancelled events are
    /// returned too, so the caller can account for them.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.id)
    }

    pub fn cancel(&mut self, id: usize) {
        self.events[id].cancelled = true;
    }

    pub fn get(&self, id: usize) -> &ConeExpansionEvent<T> {
        &self.events[id]
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.heap.clear();
    }
}
