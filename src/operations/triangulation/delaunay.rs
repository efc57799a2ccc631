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

//! Randomized incremental Delaunay triangulation with a history DAG.
//!
//! The input is wrapped in a large synthetic triangle. Points are inserted one
//! at a time: the DAG locates the live triangle holding the point, that
//! triangle is split in three (or, when the point sits on an edge, the two
//! triangles sharing the edge are split in four), and the edges facing the new
//! point are legalized by flipping. Triangles touching a synthetic vertex are
//! dropped at the end.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::access::AccessIndex;
use super::dag::{Dag, NodeId};
use super::locate::{Location, descend};
use super::params::{DelaunayParams, DuplicatePolicy, InsertionOrder, LegalityRule, Winding};
use super::store::{SYNTHETIC, Triangle, TriangleStore, VertexId};
use super::super_triangle::BoundingTriangle;
use super::vertices::Vertices;
use super::{BuildStats, Triangulate2D, Triangulation};
use crate::error::DelaunayError;
use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// Incremental triangulator configured by [`DelaunayParams`].
#[derive(Clone, Debug, Default)]
pub struct Delaunay {
    params: DelaunayParams,
}

impl Delaunay {
    pub fn new(params: DelaunayParams) -> Result<Self, DelaunayError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DelaunayParams {
        &self.params
    }

    fn insertion_order(&self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        if let InsertionOrder::Shuffled { seed } = self.params.insertion_order {
            order.shuffle(&mut StdRng::seed_from_u64(seed));
        }
        order
    }
}

impl Triangulate2D for Delaunay {
    fn triangulate<T: Scalar>(&self, points: &[Point2<T>]) -> Result<Triangulation, DelaunayError> {
        if points.len() < 3 {
            return Err(DelaunayError::InsufficientInput { found: points.len() });
        }
        let working = points
            .iter()
            .enumerate()
            .map(|(index, p)| p.to_f64().ok_or(DelaunayError::NonFiniteCoordinate { index }))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            points = working.len(),
            epsilon = self.params.epsilon,
            legality = ?self.params.legality,
            order = ?self.params.insertion_order,
            "triangulating"
        );

        let mut builder = Builder::new(working, &self.params);
        for index in self.insertion_order(points.len()) {
            builder.insert(index)?;
        }
        let triangulation = builder.finish()?;

        debug!(
            triangles = triangulation.triangles.len(),
            skipped = triangulation.skipped.len(),
            flips = triangulation.stats.flips,
            fallbacks = triangulation.stats.fallbacks,
            "triangulation complete"
        );
        Ok(triangulation)
    }
}

/// An edge `(p1, p2)` of `leaf` with apex `k`, and the triangle `neighbor`
/// across it with apex `l`.
struct SharedEdge {
    p1: VertexId,
    p2: VertexId,
    k: VertexId,
    l: VertexId,
    leaf: NodeId,
    neighbor: NodeId,
}

/// Mutable state of a single triangulation run.
pub(super) struct Builder<'a> {
    pub(super) params: &'a DelaunayParams,
    pub(super) vertices: Vertices,
    pub(super) store: TriangleStore,
    pub(super) dag: Dag,
    pub(super) access: AccessIndex,
    pub(super) flip_limit: usize,
    pub(super) stats: BuildStats,
    skipped: Vec<usize>,
}

impl<'a> Builder<'a> {
    pub(super) fn new(points: Vec<Point2<f64>>, params: &'a DelaunayParams) -> Self {
        let n = points.len();
        let bounding = BoundingTriangle::enclosing(&points, params.margin, params.special_points_factor);
        trace!(?bounding, "bounding triangle");

        let mut access = AccessIndex::new(n);
        for v in SYNTHETIC {
            access.push(v, Dag::ROOT);
        }

        Self {
            params,
            vertices: Vertices::new(points, &bounding, params.legality == LegalityRule::Symbolic),
            store: TriangleStore::with_capacity(Triangle::ROOT, n),
            dag: Dag::with_capacity(Triangle::ROOT, 0, n),
            access,
            flip_limit: params.flip_limit.unwrap_or(2 * (n + 3)),
            stats: BuildStats::default(),
            skipped: Vec::new(),
        }
    }

    /// Inserts input point `index` and legalizes around it.
    pub(super) fn insert(&mut self, index: usize) -> Result<(), DelaunayError> {
        let r = index as VertexId;
        let descent = descend(&self.dag, &self.vertices, r, self.params.epsilon)
            .ok_or(DelaunayError::PointLocationFailed { index })?;

        if descent.fallbacks > 0 {
            debug!(point = index, levels = descent.fallbacks, "no child contains the point, following the nearest");
            self.stats.fallbacks += descent.fallbacks;
        }

        match descent.location {
            Location::Interior | Location::Outside => self.split_1_to_3(r, descent.leaf),
            Location::OnEdge(edge) => {
                let shared = self.shared_edge(descent.leaf, edge)?;
                self.split_2_to_4(r, shared, false)
            }
            Location::NearEdge(edge) => {
                let shared = self.shared_edge(descent.leaf, edge)?;
                if self.is_illegal(r, shared.p1, shared.p2, shared.l) {
                    self.stats.near_edge_splits += 1;
                    self.split_2_to_4(r, shared, true)
                } else {
                    trace!(point = index, "near edge is legal, splitting the triangle");
                    self.split_1_to_3(r, descent.leaf)
                }
            }
            Location::OnVertex => match self.params.duplicates {
                DuplicatePolicy::Skip => {
                    warn!(point = index, "skipping point coincident with an existing vertex");
                    self.skipped.push(index);
                    Ok(())
                }
                DuplicatePolicy::Reject => Err(DelaunayError::CoincidentPoint { index }),
            },
        }
    }

    /// Splits `leaf = (a, b, c)` into `(a, b, r)`, `(b, c, r)` and `(a, c, r)`.
    fn split_1_to_3(&mut self, r: VertexId, leaf: NodeId) -> Result<(), DelaunayError> {
        let Triangle(a, b, c) = self.dag.triangle(leaf);
        trace!(r, a, b, c, "1-3 split");
        let slot = self.dag.slot(leaf);

        let t1 = Triangle::new(a, b, r);
        let t2 = Triangle::new(b, c, r);
        let t3 = Triangle::new(a, c, r);
        self.store.overwrite(slot, t1);
        let s2 = self.store.push(t2);
        let s3 = self.store.push(t3);

        let n1 = self.dag.add_leaf(t1, slot, &[leaf]);
        let n2 = self.dag.add_leaf(t2, s2, &[leaf]);
        let n3 = self.dag.add_leaf(t3, s3, &[leaf]);

        self.access.replace(a, leaf, n1)?;
        self.access.push(a, n3);
        self.access.replace(b, leaf, n1)?;
        self.access.push(b, n2);
        self.access.replace(c, leaf, n2)?;
        self.access.push(c, n3);
        for n in [n1, n2, n3] {
            self.access.push(r, n);
        }

        self.stats.splits_1_to_3 += 1;
        self.legalize(r, &[(a, b), (b, c), (c, a)])
    }

    /// Edge `edge` of `leaf` together with the other triangle holding it.
    fn shared_edge(&self, leaf: NodeId, edge: usize) -> Result<SharedEdge, DelaunayError> {
        let [v0, v1, v2] = self.dag.triangle(leaf).vertices();
        let (p1, p2, k) = match edge {
            0 => (v0, v1, v2),
            1 => (v1, v2, v0),
            _ => (v2, v0, v1),
        };

        let others: SmallVec<[NodeId; 2]> = self
            .access
            .shared(p1, p2)
            .into_iter()
            .filter(|n| *n != leaf)
            .collect();
        let neighbor = match *others.as_slice() {
            [n] => n,
            _ => return Err(DelaunayError::NeighborNotFound { p1, p2 }),
        };
        let l = self
            .dag
            .triangle(neighbor)
            .apex(p1, p2)
            .ok_or(DelaunayError::MissingApex { p1, p2 })?;

        Ok(SharedEdge {
            p1,
            p2,
            k,
            l,
            leaf,
            neighbor,
        })
    }

    /// Replaces the two triangles on `edge` by `(p1, r, k)`, `(p2, r, k)`,
    /// `(p1, r, l)` and `(p2, r, l)`.
    ///
    /// A `straddling` point sits strictly inside `leaf`, so the sliver
    /// `(p1, p2, r)` of `leaf` ends up in the triangles on the `l` side. Those
    /// then descend from `leaf` as well.
    fn split_2_to_4(&mut self, r: VertexId, edge: SharedEdge, straddling: bool) -> Result<(), DelaunayError> {
        let SharedEdge {
            p1,
            p2,
            k,
            l,
            leaf,
            neighbor,
        } = edge;
        trace!(r, p1, p2, k, l, straddling, "2-4 split");

        let s1 = self.dag.slot(leaf);
        let s2 = self.dag.slot(neighbor);
        let t1 = Triangle::new(p1, r, k);
        let t2 = Triangle::new(p2, r, k);
        let t3 = Triangle::new(p1, r, l);
        let t4 = Triangle::new(p2, r, l);

        self.store.overwrite(s1, t1);
        let s1b = self.store.push(t2);
        let n1 = self.dag.add_leaf(t1, s1, &[leaf]);
        let n2 = self.dag.add_leaf(t2, s1b, &[leaf]);

        let parents = [neighbor, leaf];
        let far_parents = if straddling { &parents[..] } else { &parents[..1] };
        self.store.overwrite(s2, t3);
        let s2b = self.store.push(t4);
        let n3 = self.dag.add_leaf(t3, s2, far_parents);
        let n4 = self.dag.add_leaf(t4, s2b, far_parents);

        self.access.replace(p1, leaf, n1)?;
        self.access.replace(p1, neighbor, n3)?;
        self.access.replace(p2, leaf, n2)?;
        self.access.replace(p2, neighbor, n4)?;
        self.access.replace(k, leaf, n1)?;
        self.access.push(k, n2);
        self.access.replace(l, neighbor, n3)?;
        self.access.push(l, n4);
        for n in [n1, n2, n3, n4] {
            self.access.push(r, n);
        }

        self.stats.splits_2_to_4 += 1;
        self.legalize(r, &[(p1, l), (l, p2), (p2, k), (k, p1)])
    }

    /// Drops synthetic triangles and emits the rest.
    pub(super) fn finish(self) -> Result<Triangulation, DelaunayError> {
        let n = self.vertices.len();
        let mut triangles: Vec<[usize; 3]> = self.store.real_triangles().collect();
        if triangles.is_empty() {
            return Err(DelaunayError::Degenerate { points: n });
        }
        if let Some(index) = first_missing(n, &triangles, &self.skipped) {
            return Err(DelaunayError::MissingVertex { index });
        }

        if self.params.winding == Winding::CounterClockwise {
            for t in &mut triangles {
                let [a, b, c] = t.map(|i| i as VertexId);
                if self.vertices.orient(a, b, c) == Ordering::Less {
                    t.swap(1, 2);
                }
            }
        }

        let stats = BuildStats {
            dag_nodes: self.dag.len(),
            ..self.stats
        };
        Ok(Triangulation {
            triangles,
            skipped: self.skipped,
            stats,
        })
    }
}

/// Smallest index below `n` that is neither in `skipped` nor in any triangle.
fn first_missing(n: usize, triangles: &[[usize; 3]], skipped: &[usize]) -> Option<usize> {
    let mut seen = vec![false; n];
    for &i in triangles.iter().flatten().chain(skipped) {
        if let Some(s) = seen.get_mut(i) {
            *s = true;
        }
    }
    seen.iter().position(|s| !s)
}
