//! Precondition checks and route selection.

use super::config::{ContractionConfig, EdgeStrategy};
use crate::error::{ContractionError, ContractionResult};

/// Kernel family that processes every edge of a contraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractionRoute {
    /// General edge contraction, recursive form.
    EdgeRecursive,
    /// General edge contraction, worklist form.
    EdgeWorklist,
    /// Closed-form contraction down to order 1.
    OrderMinusOne,
}

impl ContractionRoute {
    /// Returns a human-readable name for this route.
    pub fn name(&self) -> &'static str {
        match self {
            ContractionRoute::EdgeRecursive => "edge_recursive",
            ContractionRoute::EdgeWorklist => "edge_worklist",
            ContractionRoute::OrderMinusOne => "order_minus_one",
        }
    }
}

/// A validated contraction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionPlan {
    order: usize,
    dimension: usize,
    depth: usize,
    route: ContractionRoute,
}

impl ContractionPlan {
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn route(&self) -> ContractionRoute {
        self.route
    }

    /// Order of the result, `order - depth`.
    #[inline]
    pub fn residual_order(&self) -> usize {
        self.order - self.depth
    }

    /// Returns true if the closed-form path is used.
    pub fn uses_fast_path(&self) -> bool {
        self.route == ContractionRoute::OrderMinusOne
    }
}

/// Validates a contraction of `depth` modes and picks its route.
///
/// Fails before any work when the vector length differs from the dimension
/// or the depth lies outside `[1, order]`.
pub fn plan_contraction(
    order: usize,
    dimension: usize,
    vector_len: usize,
    depth: usize,
    config: &ContractionConfig,
) -> ContractionResult<ContractionPlan> {
    ContractionError::check_vector(dimension, vector_len)?;
    ContractionError::check_depth(depth, order)?;

    let route = if config.use_fast_path && depth + 1 == order {
        ContractionRoute::OrderMinusOne
    } else {
        match config.edge_strategy {
            EdgeStrategy::Recursive => ContractionRoute::EdgeRecursive,
            EdgeStrategy::Worklist => ContractionRoute::EdgeWorklist,
        }
    };

    Ok(ContractionPlan {
        order,
        dimension,
        depth,
        route,
    })
}
