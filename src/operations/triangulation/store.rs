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

//! Flat storage of the current triangles.

/// Vertex handle: input points are `0..n`, the bounding triangle uses `-3, -2, -1`.
pub type VertexId = isize;

/// The three synthetic vertices of the bounding triangle.
pub const SYNTHETIC: [VertexId; 3] = [-3, -2, -1];

/// Index triple, always kept in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle(pub VertexId, pub VertexId, pub VertexId);

impl Triangle {
    pub const ROOT: Triangle = Triangle(-3, -2, -1);

    /// Builds the triangle with its vertices sorted ascending.
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        let mut v = [a, b, c];
        v.sort_unstable();
        Triangle(v[0], v[1], v[2])
    }

    #[inline]
    pub fn vertices(&self) -> [VertexId; 3] {
        [self.0, self.1, self.2]
    }

    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.0 == v || self.1 == v || self.2 == v
    }

    /// Vertex opposite to the edge `(p1, p2)`, `None` if the edge is not one of ours.
    pub fn apex(&self, p1: VertexId, p2: VertexId) -> Option<VertexId> {
        if !(self.contains(p1) && self.contains(p2)) || p1 == p2 {
            return None;
        }
        self.vertices().into_iter().find(|&v| v != p1 && v != p2)
    }

    /// `true` when a vertex belongs to the bounding triangle.
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.0 < 0
    }

    /// Index triple of a triangle made only of input points.
    pub fn to_indices(&self) -> Option<[usize; 3]> {
        if self.is_synthetic() {
            return None;
        }
        Some([self.0 as usize, self.1 as usize, self.2 as usize])
    }
}

/// Append/overwrite vector of live triangles.
///
/// A split or flip reuses the slots of the triangles it destroys and appends
/// the remainder, so every slot always holds a live triangle.
#[derive(Clone, Debug)]
pub struct TriangleStore {
    triangles: Vec<Triangle>,
}

impl TriangleStore {
    pub fn new(root: Triangle) -> Self {
        Self { triangles: vec![root] }
    }

    pub fn with_capacity(root: Triangle, points: usize) -> Self {
        let mut store = Self::new(root);
        store.triangles.reserve(2 * points);
        store
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[cfg(test)]
    pub fn get(&self, slot: usize) -> Option<&Triangle> {
        self.triangles.get(slot)
    }

    pub fn overwrite(&mut self, slot: usize, triangle: Triangle) {
        self.triangles[slot] = triangle;
    }

    /// Appends and returns the new slot.
    pub fn push(&mut self, triangle: Triangle) -> usize {
        self.triangles.push(triangle);
        self.triangles.len() - 1
    }

    /// Triangles without synthetic vertices, in slot order.
    pub fn real_triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.triangles.iter().filter_map(Triangle::to_indices)
    }
}
