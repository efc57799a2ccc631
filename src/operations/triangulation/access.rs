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

//! Per-vertex lists of the live DAG leaves incident to each vertex.

use smallvec::SmallVec;

use super::dag::NodeId;
use super::store::VertexId;
use crate::error::DelaunayError;

#[derive(Clone, Debug, Default)]
pub struct AccessIndex {
    lists: Vec<SmallVec<[NodeId; 8]>>,
}

impl AccessIndex {
    /// Empty lists for `points` input vertices plus the three synthetic ones.
    pub fn new(points: usize) -> Self {
        Self {
            lists: vec![SmallVec::new(); points + 3],
        }
    }

    #[inline]
    fn position(v: VertexId) -> usize {
        (v + 3) as usize
    }

    pub fn list(&self, v: VertexId) -> &[NodeId] {
        &self.lists[Self::position(v)]
    }

    pub fn push(&mut self, v: VertexId, node: NodeId) {
        self.lists[Self::position(v)].push(node);
    }

    /// Replaces `old` with `new` in place.
    pub fn replace(&mut self, v: VertexId, old: NodeId, new: NodeId) -> Result<(), DelaunayError> {
        let list = &mut self.lists[Self::position(v)];
        let entry = list
            .iter_mut()
            .find(|n| **n == old)
            .ok_or(DelaunayError::MembershipCorrupted { vertex: v })?;
        *entry = new;
        Ok(())
    }

    pub fn remove(&mut self, v: VertexId, old: NodeId) -> Result<(), DelaunayError> {
        let list = &mut self.lists[Self::position(v)];
        let at = list
            .iter()
            .position(|n| *n == old)
            .ok_or(DelaunayError::MembershipCorrupted { vertex: v })?;
        list.remove(at);
        Ok(())
    }

    /// Live leaves incident to both vertices, i.e. the triangles on edge `(a, b)`.
    pub fn shared(&self, a: VertexId, b: VertexId) -> SmallVec<[NodeId; 2]> {
        let other = self.list(b);
        self.list(a)
            .iter()
            .copied()
            .filter(|n| other.contains(n))
            .collect()
    }
}
