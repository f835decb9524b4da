//! Error Types
//!
//! Every failure the engine reports is a precondition violation caught
//! before a walk begins. Not finding a node is never an error: searches
//! return `None` for that.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type for graph and traversal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something the operation cannot accept.
    InvalidArgument,

    /// A background task died before producing a result.
    Background,
}

/// Errors that can occur while building or walking a graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The node is not a member of the graph.
    #[error("node {node} is not a member of the graph")]
    NodeNotFound {
        /// The missing node.
        node: NodeId,
    },

    /// An edge was requested between nodes the graph does not hold.
    #[error("cannot connect {from} -> {to}: both endpoints must be members of the graph")]
    EdgeEndpointMissing {
        /// Source endpoint.
        from: NodeId,
        /// Target endpoint.
        to: NodeId,
    },

    /// A traversal order name that is not recognized.
    #[error("unrecognized traversal order `{value}`")]
    UnknownOrder {
        /// The rejected input.
        value: String,
    },

    /// A traversal strategy name that is not recognized.
    #[error("unrecognized traversal strategy `{value}`")]
    UnknownStrategy {
        /// The rejected input.
        value: String,
    },

    /// An edge mode name that is not recognized.
    #[error("unrecognized edge mode `{value}`")]
    UnknownEdgeMode {
        /// The rejected input.
        value: String,
    },

    /// A configuration document could not be parsed.
    #[error("invalid traversal config: {reason}")]
    InvalidConfig {
        /// Parser message.
        reason: String,
    },

    /// A traversal or search running on the blocking pool failed.
    #[error("background task failed: {reason}")]
    Background {
        /// Join error message.
        reason: String,
    },
}

impl Error {
    /// Creates a node not found error.
    pub fn node_not_found(node: NodeId) -> Self {
        Self::NodeNotFound { node }
    }

    /// Creates an edge endpoint error.
    pub fn edge_endpoint_missing(from: NodeId, to: NodeId) -> Self {
        Self::EdgeEndpointMissing { from, to }
    }

    /// Creates an invalid config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Background { .. } => ErrorKind::Background,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
