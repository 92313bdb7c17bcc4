#![forbid(unsafe_code)]
//! adjgraph-algos library.
//!
//! Algorithms that consume `adjgraph-core` graphs through the
//! [`Adjacency`](adjgraph_core::graph::Adjacency) and
//! [`Weighted`](adjgraph_core::graph::Weighted) contracts: union-find,
//! connected components, minimum spanning trees and shortest paths, plus the
//! [`Ring`] buffer used for rolling recurrences.
//!
//! # Conventions
//!
//! - **Errors**: fallible entry points return [`AlgoError`]; ring access
//!   returns [`RingError`]. Both map to the shared
//!   [`ErrorCode`](adjgraph_core::ErrorCode) table.
//! - **Logging**: Use `tracing` macros (`debug!`, `warn!`, `trace!`).

pub mod components;
pub mod error;
pub mod mst;
pub mod ring;
pub mod shortest_path;
pub mod union_find;

mod ordered;

pub use components::{edge_components, vertex_components, weighted_edge_components};
pub use error::AlgoError;
pub use mst::{MstStrategy, boruvka, kruskal, prim, prim_forest};
pub use ring::{Cell, Ring, RingError};
pub use shortest_path::{BellmanFord, Dijkstra, FloydWarshall};
pub use union_find::UnionFind;
