//! Traversal Configuration
//!
//! Order, strategy and edge mode can be chosen from strings or from a JSON
//! document. Both go through the same `FromStr` parsers, so a name accepted
//! in one place is accepted in the other. Unrecognized names are rejected;
//! nothing silently falls back to a default.
//!
//! ```json
//! { "edge_mode": "directed", "order": "post_order", "strategy": "recursive" }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::dfs::Dfs;
use crate::error::{Error, Result};
use crate::graph::{EdgeMode, Graph};

/// When a depth-first walk records a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Order {
    /// Record a node before descending into its neighbors.
    #[default]
    PreOrder,

    /// Record a node after all of its unvisited neighbors are finished.
    PostOrder,
}

/// How a depth-first walk keeps track of where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Strategy {
    /// Native recursion. Depth is bounded by the call stack.
    Recursive,

    /// Explicit heap-allocated stack. Safe for deep or untrusted graphs.
    #[default]
    Iterative,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Order::PreOrder => "pre_order",
            Order::PostOrder => "post_order",
        })
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "preorder" | "pre" => Ok(Order::PreOrder),
            "postorder" | "post" => Ok(Order::PostOrder),
            _ => Err(Error::UnknownOrder {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Order {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Recursive => "recursive",
            Strategy::Iterative => "iterative",
        })
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "recursive" => Ok(Strategy::Recursive),
            "iterative" => Ok(Strategy::Iterative),
            _ => Err(Error::UnknownStrategy {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Lowercase and drop `_`/`-` separators so `Pre-Order` matches `preorder`.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Everything needed to build a graph and a depth-first walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraversalConfig {
    /// Edge mode of graphs built with [`graph`](Self::graph).
    pub edge_mode: EdgeMode,

    /// Depth-first recording order.
    pub order: Order,

    /// Recursive or explicit-stack depth-first walk.
    pub strategy: Strategy,
}

impl TraversalConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Serialize back to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// An empty graph using the configured edge mode.
    pub fn graph(&self) -> Graph {
        Graph::new(self.edge_mode)
    }

    /// A depth-first walker using the configured order and strategy.
    pub fn dfs(&self) -> Dfs {
        Dfs::new(self.order, self.strategy)
    }
}
