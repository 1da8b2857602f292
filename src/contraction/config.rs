//! Configuration for symmetric tensor contraction.

use serde::{Deserialize, Serialize};

/// How a single edge is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeStrategy {
    /// Recursion bounded by the contraction depth.
    #[default]
    Recursive,
    /// Level-by-level worklist, no recursion.
    Worklist,
}

/// Configuration options for contraction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractionConfig {
    /// Expansion used by the general edge contractor.
    pub edge_strategy: EdgeStrategy,
    /// Whether a depth of `order - 1` goes through the closed-form path.
    pub use_fast_path: bool,
}

impl ContractionConfig {
    /// Creates a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge expansion strategy.
    pub fn with_edge_strategy(mut self, strategy: EdgeStrategy) -> Self {
        self.edge_strategy = strategy;
        self
    }

    /// Enables or disables the order-minus-one fast path.
    pub fn with_fast_path(mut self, enabled: bool) -> Self {
        self.use_fast_path = enabled;
        self
    }

    /// Creates a config that takes every available shortcut.
    pub fn fast() -> Self {
        Self {
            edge_strategy: EdgeStrategy::Recursive,
            use_fast_path: true,
        }
    }

    /// Creates a config that avoids recursion, for very high orders.
    pub fn iterative() -> Self {
        Self {
            edge_strategy: EdgeStrategy::Worklist,
            use_fast_path: false,
        }
    }
}
