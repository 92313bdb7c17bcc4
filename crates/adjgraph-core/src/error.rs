use std::fmt;

/// Machine-readable error codes shared by every adjgraph crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    EdgeNotFound,
    VertexNotFound,
    CycleDetected,
    NegativeWeight,
    NegativeCycle,
    UnknownSlot,
    EmptyRing,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::EdgeNotFound => "E2001",
            Self::VertexNotFound => "E2002",
            Self::CycleDetected => "E2003",
            Self::NegativeWeight => "E3001",
            Self::NegativeCycle => "E3002",
            Self::UnknownSlot => "E4001",
            Self::EmptyRing => "E4002",
        }
    }

    /// Short human-facing summary for logs.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::EdgeNotFound => "Edge not present in graph",
            Self::VertexNotFound => "Vertex not present in graph",
            Self::CycleDetected => "Graph contains a cycle",
            Self::NegativeWeight => "Negative edge weight",
            Self::NegativeCycle => "Graph contains a negative cycle",
            Self::UnknownSlot => "Slot name not in ring schema",
            Self::EmptyRing => "Ring must hold at least one cell",
        }
    }

    /// Optional remediation hint for callers.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix the TOML syntax in the adjgraph config file."),
            Self::EdgeNotFound => Some("Use `weight_or` to fall back to a default weight."),
            Self::VertexNotFound => Some("Add the vertex (or an incident edge) before running the algorithm."),
            Self::CycleDetected => {
                Some("Condense strongly connected components first to obtain a DAG order.")
            }
            Self::NegativeWeight => Some("Use Bellman-Ford for graphs with negative weights."),
            Self::NegativeCycle => None,
            Self::UnknownSlot => Some("Declare every slot name when constructing the ring."),
            Self::EmptyRing => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by graph structures in this crate.
///
/// Vertices are rendered with their `Debug` representation so the error type
/// stays independent of the vertex type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A weight lookup or update named an edge that is not in the graph.
    #[error("edge ({from}, {to}) is not present")]
    EdgeNotFound { from: String, to: String },

    /// An operation required a vertex that is not in the graph.
    #[error("vertex {0} is not present")]
    VertexNotFound(String),

    /// A strict topological order was requested for a cyclic graph.
    #[error("graph is not acyclic: arc ({from}, {to}) points backwards")]
    CycleDetected { from: String, to: String },

    /// Config text is not valid TOML for the config schema.
    #[error("invalid adjgraph config: {0}")]
    ConfigParse(String),
}

impl GraphError {
    pub(crate) fn edge_not_found<V: fmt::Debug>(from: &V, to: &V) -> Self {
        Self::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn cycle<V: fmt::Debug>(from: &V, to: &V) -> Self {
        Self::CycleDetected {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    /// Build a [`GraphError::VertexNotFound`] for `vertex`.
    pub fn vertex_not_found<V: fmt::Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }

    /// The machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EdgeNotFound { .. } => ErrorCode::EdgeNotFound,
            Self::VertexNotFound(_) => ErrorCode::VertexNotFound,
            Self::CycleDetected { .. } => ErrorCode::CycleDetected,
            Self::ConfigParse(_) => ErrorCode::ConfigParseError,
        }
    }

    /// Remediation hint from the code table.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        self.code().hint()
    }
}
