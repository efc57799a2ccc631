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

use crate::error::DelaunayError;

/// What to do with a point that lands on an existing vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Leave the point out of the mesh and record its index in
    /// [`Triangulation::skipped`](super::Triangulation::skipped).
    #[default]
    Skip,
    /// Abort with [`DelaunayError::CoincidentPoint`].
    Reject,
}

/// How the synthetic vertices take part in legalization and point location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegalityRule {
    /// The synthetic vertices are points at infinity along their directions
    /// from the box center. Every orientation and circle test touching them is
    /// decided exactly from that limit, so the result does not depend on
    /// `special_points_factor` and always covers the convex hull.
    #[default]
    Symbolic,
    /// Configuration table keyed on which of the edge endpoints and the
    /// opposite vertex are synthetic, over the finite corner coordinates.
    /// Edges between two real points and edges with one synthetic endpoint get
    /// a circle test. Edges between two synthetic points, and edges whose only
    /// synthetic vertex is the opposite one, are legal. With one synthetic
    /// endpoint and a synthetic opposite vertex the edge is legal when the
    /// endpoint has the smaller index and circle-tested otherwise.
    CaseTable,
    /// Circle test over the finite corner coordinates for every edge except
    /// those joining two synthetic points. Points near the hull can still end
    /// up outside the mesh when the bounding triangle is too small.
    Circumcircle,
}

/// Order in which the input points are inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InsertionOrder {
    /// Input order.
    #[default]
    Sequential,
    /// A seeded random permutation of the input.
    Shuffled { seed: u64 },
}

/// Vertex order of every emitted triangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Winding {
    /// Indices sorted ascending.
    #[default]
    Ascending,
    /// Counter-clockwise in the input coordinate frame.
    CounterClockwise,
}

/// Tuning knobs of the incremental triangulator.
#[derive(Clone, Debug, PartialEq)]
pub struct DelaunayParams {
    /// Distance, in input units, under which a point counts as lying on an
    /// input vertex or on an edge between two input points.
    pub epsilon: f64,
    /// Scale of the bounding triangle relative to the padded half-extent of the input.
    pub special_points_factor: f64,
    /// Padding applied to the half-extent before scaling.
    pub margin: f64,
    pub duplicates: DuplicatePolicy,
    pub legality: LegalityRule,
    pub insertion_order: InsertionOrder,
    pub winding: Winding,
    /// Maximum edge flips while legalizing one insertion. `None` means `2 * (n + 3)`.
    pub flip_limit: Option<usize>,
}

impl Default for DelaunayParams {
    fn default() -> Self {
        Self {
            epsilon: 1e-3,
            special_points_factor: 100.0,
            margin: 1.2,
            duplicates: DuplicatePolicy::default(),
            legality: LegalityRule::default(),
            insertion_order: InsertionOrder::default(),
            winding: Winding::default(),
            flip_limit: None,
        }
    }
}

impl DelaunayParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_special_points_factor(mut self, factor: f64) -> Self {
        self.special_points_factor = factor;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn with_legality(mut self, legality: LegalityRule) -> Self {
        self.legality = legality;
        self
    }

    pub fn with_insertion_order(mut self, order: InsertionOrder) -> Self {
        self.insertion_order = order;
        self
    }

    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    pub fn with_flip_limit(mut self, limit: usize) -> Self {
        self.flip_limit = Some(limit);
        self
    }

    /// Checks every numeric parameter against its accepted range.
    pub fn validate(&self) -> Result<(), DelaunayError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(DelaunayError::InvalidParameter {
                name: "epsilon",
                value: self.epsilon,
                reason: "must be finite and positive",
            });
        }
        if !(self.special_points_factor.is_finite() && self.special_points_factor > 3.0) {
            return Err(DelaunayError::InvalidParameter {
                name: "special_points_factor",
                value: self.special_points_factor,
                reason: "must be finite and greater than 3",
            });
        }
        if !(self.margin.is_finite() && self.margin >= 1.0) {
            return Err(DelaunayError::InvalidParameter {
                name: "margin",
                value: self.margin,
                reason: "must be finite and at least 1",
            });
        }
        if self.flip_limit == Some(0) {
            return Err(DelaunayError::InvalidParameter {
                name: "flip_limit",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
