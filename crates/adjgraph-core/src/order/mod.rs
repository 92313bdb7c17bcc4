//! Orderings of directed graphs built on the traversal engine.
//!
//! ## Pipeline
//!
//! ```text
//! DirectedGraph
//!        ↓  traversal::post_order
//! post-order ──reverse──▶ topo::topological_sort
//!        │
//!        └─ on reverse()  ──▶ scc::strongly_connected_components
//!                                  ↓
//!                           scc::Condensation (DAG of components)
//! ```
//!
//! `topological_sort` is only a true topological order for acyclic graphs.
//! Callers that must handle cycles should condense first and order the
//! condensation, or use `strict_topological_sort` to get an error instead.

pub mod scc;
pub mod topo;

pub use scc::{
    Component, Condensation, strongly_connected_components, strongly_connected_components_with,
};
pub use topo::{is_acyclic, strict_topological_sort, topological_sort};
