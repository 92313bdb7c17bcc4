//! Adjacency-list graph storage.
//!
//! # Overview
//!
//! Graphs map each vertex to the ordered set of its neighbors. Two structural
//! flavours exist, [`DirectedGraph`] and [`UndirectedGraph`], and any of them
//! can be wrapped by [`WeightedGraph`], which keeps a weight side-table keyed
//! by the canonical edge key plus a running total.
//!
//! Capabilities are expressed as traits rather than a type hierarchy:
//!
//! ```text
//! Adjacency        read contract consumed by every algorithm
//!   ├─ EdgeStore   structural add/delete + canonical edge key
//!   ├─ Directed    reverse(), in-degree
//!   ├─ Undirected  marker: adjacency is symmetric
//!   └─ Weighted    weight accessors and running total
//! ```
//!
//! ## Vertex lifecycle
//!
//! A vertex exists while at least one edge touches it, or after an explicit
//! [`EdgeStore::add_vertex`]. Deleting the last edge incident to a vertex
//! drops it from [`Adjacency::vertices`]. Directed sinks are registered when
//! an arc points at them and stay until no arc touches them.
//!
//! ## Reads never fail
//!
//! [`Adjacency::adj`] on an unknown vertex yields an empty sequence, and
//! deleting an absent edge returns `false`. Only weight lookups for an absent
//! edge produce [`GraphError::EdgeNotFound`].

use std::fmt::Debug;

use crate::error::GraphError;

mod adjacency;
pub mod directed;
pub mod undirected;
pub mod weighted;

pub use adjacency::Neighbors;
pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;
pub use weighted::{WeightedDirectedGraph, WeightedGraph, WeightedUndirectedGraph};

/// Read-only view of a graph consumed by traversal and ordering algorithms.
///
/// Every sequence is produced lazily and restarts from the current state on
/// each call. Vertices are enumerated in ascending order and neighbors of a
/// vertex likewise, which makes every algorithm in this crate deterministic.
pub trait Adjacency {
    type Vertex: Ord + Clone + Debug;

    /// All registered vertices.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    /// Neighbors of `v`; empty when `v` is unknown.
    fn adj(&self, v: &Self::Vertex) -> impl Iterator<Item = &Self::Vertex>;

    /// Every edge once. Undirected edges use the canonical `(min, max)` form.
    fn edges(&self) -> impl Iterator<Item = (&Self::Vertex, &Self::Vertex)>;

    fn has_vertex(&self, v: &Self::Vertex) -> bool;

    fn has(&self, v: &Self::Vertex, w: &Self::Vertex) -> bool;

    fn num_vertices(&self) -> usize;

    /// Edge count, maintained incrementally.
    fn num_edges(&self) -> usize;

    /// Number of neighbors of `v` (out-degree for directed graphs).
    fn degree(&self, v: &Self::Vertex) -> usize {
        self.adj(v).count()
    }
}

/// Structural mutation shared by the unweighted graph flavours.
pub trait EdgeStore: Adjacency + Default {
    /// Insert the edge. Returns `false` if it was already present.
    fn add(&mut self, v: Self::Vertex, w: Self::Vertex) -> bool;

    /// Remove the edge. Returns `false` (and changes nothing) if absent.
    fn delete(&mut self, v: &Self::Vertex, w: &Self::Vertex) -> bool;

    /// Register `v` without edges. Returns `false` if already present.
    fn add_vertex(&mut self, v: Self::Vertex) -> bool;

    /// Key identifying the edge `(v, w)` independently of traversal direction.
    fn edge_key(v: &Self::Vertex, w: &Self::Vertex) -> (Self::Vertex, Self::Vertex);
}

/// Graphs whose edges have a direction.
pub trait Directed: Adjacency {
    /// A new graph with every arc flipped. Isolated vertices are kept.
    #[must_use]
    fn reverse(&self) -> Self
    where
        Self: Sized;

    /// Number of arcs pointing at `v`.
    fn in_degree(&self, v: &Self::Vertex) -> usize;
}

/// Marker for graphs whose adjacency is symmetric.
pub trait Undirected: Adjacency {}

/// Weight accessors for graphs carrying one `f64` per edge.
pub trait Weighted: Adjacency {
    /// Neighbors of `v` with the weight of the connecting edge.
    fn weighted_adj(&self, v: &Self::Vertex) -> impl Iterator<Item = (&Self::Vertex, f64)>;

    /// Every edge once, with its weight.
    fn weighted_edges(&self) -> impl Iterator<Item = (&Self::Vertex, &Self::Vertex, f64)>;

    /// Weight of `(v, w)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge is absent.
    fn weight(&self, v: &Self::Vertex, w: &Self::Vertex) -> Result<f64, GraphError>;

    /// Weight of `(v, w)`, or `default` when the edge is absent.
    fn weight_or(&self, v: &Self::Vertex, w: &Self::Vertex, default: f64) -> f64 {
        self.weight(v, w).unwrap_or(default)
    }

    /// Sum of all edge weights, maintained incrementally.
    ///
    /// Equal to summing [`Weighted::weighted_edges`] up to float rounding:
    /// every add, overwrite and delete applies a delta, so fractional weights
    /// can leave the running total a few ulps away from a fresh sum.
    fn total_weight(&self) -> f64;
}
