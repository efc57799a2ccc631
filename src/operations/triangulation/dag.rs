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

//! History DAG used for point location.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. A node
//! without children is a leaf and mirrors a live triangle in the store; once
//! split or flipped it keeps its triangle as history and gains the nodes that
//! replaced it as children.

use smallvec::SmallVec;

use super::store::Triangle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug)]
pub struct DagNode {
    pub triangle: Triangle,
    /// Store slot the triangle occupied while it was live.
    pub slot: usize,
    children: SmallVec<[NodeId; 3]>,
}

impl DagNode {
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct Dag {
    nodes: Vec<DagNode>,
}

impl Dag {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new(root: Triangle, slot: usize) -> Self {
        Self {
            nodes: vec![DagNode {
                triangle: root,
                slot,
                children: SmallVec::new(),
            }],
        }
    }

    pub fn with_capacity(root: Triangle, slot: usize, points: usize) -> Self {
        let mut dag = Self::new(root, slot);
        dag.nodes.reserve(9 * points);
        dag
    }

    /// Appends a leaf and registers it as a child of every parent.
    pub fn add_leaf(&mut self, triangle: Triangle, slot: usize, parents: &[NodeId]) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(DagNode {
            triangle,
            slot,
            children: SmallVec::new(),
        });
        for parent in parents {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    #[inline]
    pub fn triangle(&self, id: NodeId) -> Triangle {
        self.nodes[id.0].triangle
    }

    #[inline]
    pub fn slot(&self, id: NodeId) -> usize {
        self.nodes[id.0].slot
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes[id.0].children()
    }

    #[inline]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].is_leaf()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_leaf())
            .map(|(i, _)| NodeId(i))
    }
}
