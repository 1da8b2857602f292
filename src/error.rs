//! Error types for symmetric tensor contraction.

use alloc::string::String;

/// Errors that can occur while building tensors or contracting them.
///
/// Every contraction entry point checks its preconditions before touching
/// the tensor, so an error never comes with a partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum ContractionError {
    /// Vector length differs from the cubical dimension.
    #[cfg_attr(feature = "std", error("vector length {got} does not match tensor dimension {expected}"))]
    DimensionMismatch { expected: usize, got: usize },

    /// Contraction depth outside `[1, order]`.
    #[cfg_attr(feature = "std", error("contraction depth {depth} outside [1, {order}]"))]
    InvalidDepth { depth: usize, order: usize },

    /// More vectors than the tensor has modes.
    #[cfg_attr(feature = "std", error("{count} vectors supplied for a tensor of order {order}"))]
    TooManyVectors { count: usize, order: usize },

    /// Edge index sequence has the wrong length.
    #[cfg_attr(feature = "std", error("edge has {got} indices, tensor order is {expected}"))]
    EdgeOrderMismatch { expected: usize, got: usize },

    /// Edge index not smaller than the dimension.
    #[cfg_attr(feature = "std", error("index {index} out of range for dimension {dimension}"))]
    IndexOutOfRange { index: usize, dimension: usize },

    /// Tensor parameters that cannot describe any tensor.
    #[cfg_attr(feature = "std", error("invalid tensor: {message}"))]
    InvalidTensor { message: String },

    /// Dense buffer length or rank mismatch.
    #[cfg_attr(feature = "std", error("shape error: {message}"))]
    ShapeError { message: String },
}

impl ContractionError {
    pub fn invalid_tensor(message: impl Into<String>) -> Self {
        Self::InvalidTensor {
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::ShapeError {
            message: message.into(),
        }
    }

    /// Checks a vector length against a dimension.
    pub(crate) fn check_vector(expected: usize, got: usize) -> ContractionResult<()> {
        if expected != got {
            return Err(Self::DimensionMismatch { expected, got });
        }
        Ok(())
    }

    /// Checks `1 <= depth <= order`.
    pub(crate) fn check_depth(depth: usize, order: usize) -> ContractionResult<()> {
        if depth == 0 || depth > order {
            return Err(Self::InvalidDepth { depth, order });
        }
        Ok(())
    }
}

/// Result type for contraction operations.
pub type ContractionResult<T> = core::result::Result<T, ContractionError>;
