use adjgraph_core::error::{ErrorCode, GraphError};

/// Errors raised by the algorithms in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlgoError {
    /// The requested source or start vertex is not in the graph.
    #[error("source vertex {0} is missing from the graph")]
    MissingSource(String),

    /// An algorithm that requires non-negative weights found a negative edge.
    #[error("edge ({from}, {to}) has negative weight {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Relaxation did not stabilise.
    #[error("the graph contains a negative cycle")]
    NegativeCycle,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl AlgoError {
    pub(crate) fn missing_source<V: std::fmt::Debug>(source: &V) -> Self {
        Self::MissingSource(format!("{source:?}"))
    }

    pub(crate) fn negative_weight<V: std::fmt::Debug>(from: &V, to: &V, weight: f64) -> Self {
        Self::NegativeWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight,
        }
    }

    /// The machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingSource(_) => ErrorCode::VertexNotFound,
            Self::NegativeWeight { .. } => ErrorCode::NegativeWeight,
            Self::NegativeCycle => ErrorCode::NegativeCycle,
            Self::Graph(inner) => inner.code(),
        }
    }
}
