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

//! Edge legalization after an insertion.

use tracing::trace;

use super::dag::NodeId;
use super::delaunay::Builder;
use super::params::LegalityRule;
use super::store::{Triangle, VertexId};
use crate::error::DelaunayError;

/// Which vertices of an edge `(p1, p2)` and its opposite vertex `l` are synthetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeConfiguration {
    /// Both endpoints belong to the bounding triangle.
    BothSynthetic,
    /// No synthetic vertex involved.
    Real,
    /// One synthetic endpoint, `l` real.
    SyntheticEndpoint,
    /// Both endpoints real, `l` synthetic.
    SyntheticApex,
    /// One synthetic endpoint and a synthetic `l`.
    SyntheticEndpointAndApex { endpoint: VertexId, apex: VertexId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Legal,
    CircleTest,
}

impl EdgeConfiguration {
    pub fn of(p1: VertexId, p2: VertexId, l: VertexId) -> Self {
        match (p1 < 0, p2 < 0, l < 0) {
            (true, true, _) => Self::BothSynthetic,
            (false, false, false) => Self::Real,
            (true, false, false) | (false, true, false) => Self::SyntheticEndpoint,
            (false, false, true) => Self::SyntheticApex,
            (true, false, true) => Self::SyntheticEndpointAndApex { endpoint: p1, apex: l },
            (false, true, true) => Self::SyntheticEndpointAndApex { endpoint: p2, apex: l },
        }
    }

    pub fn verdict(self, rule: LegalityRule) -> Verdict {
        match (rule, self) {
            (_, Self::BothSynthetic) => Verdict::Legal,
            (LegalityRule::Symbolic | LegalityRule::Circumcircle, _) => Verdict::CircleTest,
            (LegalityRule::CaseTable, Self::Real | Self::SyntheticEndpoint) => Verdict::CircleTest,
            (LegalityRule::CaseTable, Self::SyntheticApex) => Verdict::Legal,
            (LegalityRule::CaseTable, Self::SyntheticEndpointAndApex { endpoint, apex }) => {
                if endpoint < apex {
                    Verdict::Legal
                } else {
                    Verdict::CircleTest
                }
            }
        }
    }
}

impl Builder<'_> {
    /// `true` when the edge `(p1, p2)` between `r` and `l` must be flipped.
    pub(super) fn is_illegal(&self, r: VertexId, p1: VertexId, p2: VertexId, l: VertexId) -> bool {
        match EdgeConfiguration::of(p1, p2, l).verdict(self.params.legality) {
            Verdict::Legal => false,
            Verdict::CircleTest => self.vertices.in_circle(p1, p2, l, r),
        }
    }

    /// Restores the Delaunay property around the freshly inserted `r`.
    ///
    /// `edges` are the edges opposite to `r` in the triangles just created.
    /// They are processed depth first, in the given order.
    pub(super) fn legalize(&mut self, r: VertexId, edges: &[(VertexId, VertexId)]) -> Result<(), DelaunayError> {
        let mut pending: Vec<(VertexId, VertexId)> = edges.iter().rev().copied().collect();
        let mut flips = 0;

        while let Some((p1, p2)) = pending.pop() {
            let shared = self.access.shared(p1, p2);
            let (near, far) = match *shared.as_slice() {
                // hull edge
                [] | [_] => continue,
                [a, b] => match (self.dag.triangle(a).contains(r), self.dag.triangle(b).contains(r)) {
                    (true, false) => (a, b),
                    (false, true) => (b, a),
                    _ => return Err(DelaunayError::MissingApex { p1, p2 }),
                },
                _ => return Err(DelaunayError::NonManifoldEdge { p1, p2 }),
            };
            let l = self
                .dag
                .triangle(far)
                .apex(p1, p2)
                .ok_or(DelaunayError::MissingApex { p1, p2 })?;

            if !self.is_illegal(r, p1, p2, l) {
                continue;
            }

            flips += 1;
            if flips > self.flip_limit {
                return Err(DelaunayError::FlipLimitExceeded {
                    point: r as usize,
                    limit: self.flip_limit,
                });
            }
            trace!(p1, p2, r, l, "flipping edge");
            self.flip(r, p1, p2, l, near, far)?;

            pending.push((l, p2));
            pending.push((p1, l));
        }
        Ok(())
    }

    /// Replaces `(p1, p2, r)` and `(p1, p2, l)` by `(p1, r, l)` and `(p2, r, l)`.
    fn flip(
        &mut self,
        r: VertexId,
        p1: VertexId,
        p2: VertexId,
        l: VertexId,
        near: NodeId,
        far: NodeId,
    ) -> Result<(), DelaunayError> {
        let t1 = Triangle::new(p1, r, l);
        let t2 = Triangle::new(p2, r, l);
        let s1 = self.dag.slot(near);
        let s2 = self.dag.slot(far);

        self.store.overwrite(s1, t1);
        self.store.overwrite(s2, t2);
        let n1 = self.dag.add_leaf(t1, s1, &[near, far]);
        let n2 = self.dag.add_leaf(t2, s2, &[near, far]);

        self.access.replace(p1, near, n1)?;
        self.access.remove(p1, far)?;
        self.access.replace(p2, near, n2)?;
        self.access.remove(p2, far)?;
        self.access.replace(r, near, n1)?;
        self.access.push(r, n2);
        self.access.replace(l, far, n1)?;
        self.access.push(l, n2);

        self.stats.flips += 1;
        Ok(())
    }
}
