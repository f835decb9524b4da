//! Edge Mode
//!
//! Whether `add_edge(a, b)` connects one way or both ways is a property of
//! the graph, fixed when the graph is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How [`Graph::add_edge`](super::Graph::add_edge) records an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum EdgeMode {
    /// `add_edge(a, b)` makes `b` a neighbor of `a` only.
    #[default]
    Directed,

    /// `add_edge(a, b)` also makes `a` a neighbor of `b`.
    Undirected,
}

impl EdgeMode {
    /// Whether edges are mirrored.
    pub fn is_undirected(self) -> bool {
        self == EdgeMode::Undirected
    }
}

impl fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EdgeMode::Directed => "directed",
            EdgeMode::Undirected => "undirected",
        })
    }
}

impl FromStr for EdgeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "directed" => Ok(EdgeMode::Directed),
            "undirected" | "bidirectional" => Ok(EdgeMode::Undirected),
            _ => Err(Error::UnknownEdgeMode {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for EdgeMode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
