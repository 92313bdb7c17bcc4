//! Strongly connected components (Kosaraju).
//!
//! # Algorithm
//!
//! 1. Reverse the graph.
//! 2. Compute the post-order of the reversed graph. Read from the end, that
//!    sequence starts in a sink component of the original graph.
//! 3. Walk it from the end; from each vertex not yet claimed, run one DFS on
//!    the original graph. Everything newly reached by that launch is one
//!    component: arcs leaving it can only reach components that were already
//!    claimed.
//! 4. Components are discovered sink-first and prepended to the output, so
//!    every arc between two components points from left to right.
//!
//! # Classification
//!
//! A launch that reaches more than one vertex yields [`Component::Cycle`]
//! with members in discovery order. A launch that reaches only its root
//! yields [`Component::Vertex`], unless the root has a self-loop and
//! [`SccConfig::self_loop_is_cycle`] is set, in which case it is a
//! one-element `Cycle`.

#![allow(clippy::must_use_candidate)]

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument};

use crate::config::{GraphConfig, SccConfig};
use crate::graph::{Adjacency, Directed, DirectedGraph};
use crate::traversal::PostOrder;

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// One entry of the SCC partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component<V> {
    /// A vertex that lies on no cycle.
    Vertex(V),
    /// A strongly connected group, in discovery order.
    Cycle(Vec<V>),
}

impl<V> Component<V> {
    /// `true` for [`Component::Cycle`].
    pub const fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle(_))
    }

    /// Members of this component.
    pub fn members(&self) -> &[V] {
        match self {
            Self::Vertex(v) => std::slice::from_ref(v),
            Self::Cycle(members) => members,
        }
    }

    pub fn len(&self) -> usize {
        self.members().len()
    }

    /// Always `false`; components have at least one member.
    pub fn is_empty(&self) -> bool {
        self.members().is_empty()
    }

    /// The first discovered member.
    pub fn representative(&self) -> Option<&V> {
        self.members().first()
    }
}

// ---------------------------------------------------------------------------
// Kosaraju
// ---------------------------------------------------------------------------

/// Partition `graph` into strongly connected components with the default
/// configuration.
pub fn strongly_connected_components<G: Directed>(graph: &G) -> Vec<Component<G::Vertex>> {
    strongly_connected_components_with(graph, &GraphConfig::default())
}

/// Partition `graph` into strongly connected components.
///
/// The result covers every vertex exactly once and is ordered so that arcs
/// between components point from earlier to later entries.
#[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn strongly_connected_components_with<G: Directed>(
    graph: &G,
    config: &GraphConfig,
) -> Vec<Component<G::Vertex>> {
    let reversed = graph.reverse();
    let finish: Vec<&G::Vertex> =
        PostOrder::with_config(&reversed, reversed.vertices(), &config.traversal).collect();

    let mut claimed: BTreeSet<&G::Vertex> = BTreeSet::new();
    let mut stack: Vec<&G::Vertex> = Vec::with_capacity(config.traversal.stack_capacity);
    let mut components = Vec::new();

    for &root in finish.iter().rev() {
        if claimed.contains(root) {
            continue;
        }

        let mut members = Vec::new();
        let mut reaches_root = false;
        stack.push(root);

        while let Some(x) = stack.pop() {
            if !claimed.insert(x) {
                continue;
            }
            members.push(x.clone());

            let first_child = stack.len();
            for w in graph.adj(x) {
                if w == root {
                    reaches_root = true;
                }
                if !claimed.contains(w) {
                    stack.push(w);
                }
            }
            stack[first_child..].reverse();
        }

        components.push(classify(members, reaches_root, &config.scc));
    }

    components.reverse();
    debug!(
        components = components.len(),
        cycles = components.iter().filter(|c| c.is_cycle()).count(),
        "scc extraction complete"
    );
    components
}

fn classify<V>(mut members: Vec<V>, reaches_root: bool, config: &SccConfig) -> Component<V> {
    let self_loop_cycle = reaches_root && config.self_loop_is_cycle;
    if members.len() == 1 && !self_loop_cycle {
        if let Some(v) = members.pop() {
            return Component::Vertex(v);
        }
    }
    Component::Cycle(members)
}

// ---------------------------------------------------------------------------
// Condensation
// ---------------------------------------------------------------------------

/// The SCC partition together with the DAG of components.
///
/// Component `i` of [`Condensation::components`] is vertex `i` of
/// [`Condensation::dag`].
#[derive(Debug, Clone)]
pub struct Condensation<V> {
    pub components: Vec<Component<V>>,
    /// Arcs between distinct components; always acyclic.
    pub dag: DirectedGraph<usize>,
    index: BTreeMap<V, usize>,
}

impl<V: Ord + Clone + std::fmt::Debug> Condensation<V> {
    /// Condense `graph` with the default configuration.
    pub fn new<G: Directed<Vertex = V>>(graph: &G) -> Self {
        Self::with_config(graph, &GraphConfig::default())
    }

    pub fn with_config<G: Directed<Vertex = V>>(graph: &G, config: &GraphConfig) -> Self {
        let components = strongly_connected_components_with(graph, config);

        let mut index = BTreeMap::new();
        let mut dag = DirectedGraph::new();
        for (i, component) in components.iter().enumerate() {
            dag.add_vertex(i);
            for member in component.members() {
                index.insert(member.clone(), i);
            }
        }

        for (v, w) in graph.edges() {
            let (cv, cw) = (index[v], index[w]);
            if cv != cw {
                dag.add(cv, cw);
            }
        }

        Self {
            components,
            dag,
            index,
        }
    }

    /// Index of the component containing `v`.
    pub fn component_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    pub fn scc_count(&self) -> usize {
        self.components.len()
    }

    pub fn cycle_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_cycle()).count()
    }

    /// Every vertex that belongs to a cycle component.
    pub fn cyclic_vertices(&self) -> Vec<&V> {
        self.components
            .iter()
            .filter(|c| c.is_cycle())
            .flat_map(|c| c.members().iter())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
