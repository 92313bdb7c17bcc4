#![forbid(unsafe_code)]
//! adjgraph-core library.
//!
//! Adjacency-list graphs and the DFS-based algorithms built directly on
//! them: iterative post-order traversal, topological order, strongly
//! connected components and bridge detection.
//!
//! ```text
//! graph ──▶ traversal ──┬─▶ order::topo
//!                       ├─▶ order::scc
//!                       └─▶ bridges
//! ```
//!
//! # Conventions
//!
//! - **Errors**: structural operations return `thiserror` enums
//!   ([`GraphError`]); configuration loading returns `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`debug!`, `warn!`, `trace!`).
//!   Algorithms are `#[instrument]`ed with vertex and edge counts.

pub mod bridges;
pub mod config;
pub mod error;
pub mod graph;
pub mod interop;
pub mod order;
pub mod traversal;

pub use bridges::{find_bridges, find_bridges_with};
pub use config::GraphConfig;
pub use error::{ErrorCode, GraphError};
pub use graph::{
    Adjacency, Directed, DirectedGraph, EdgeStore, Undirected, UndirectedGraph, Weighted,
    WeightedDirectedGraph, WeightedGraph, WeightedUndirectedGraph,
};
pub use interop::PetgraphExport;
pub use order::{
    Component, Condensation, is_acyclic, strict_topological_sort, strongly_connected_components,
    topological_sort,
};
pub use traversal::{PostOrder, post_order};
