//! Finite-element-like approximation spaces.
//!
//! The [`FESpace`] trait is the seam between the generic patch machinery
//! (assembly, multipatch coupling) and a concrete approximation space. This
//! crate ships one implementation, [`TensorProductFESpace`], the NURBS
//! tensor-product space of a single patch.
//!
//! # Compatibility checks and downcasting
//!
//! Spaces are compared through `&dyn FESpace`. A compatibility check first
//! matches the structural [`type_tag`](FESpace::type_tag); only when the tags
//! agree does it downcast (checked, via [`Any`]) and compare per-direction
//! data. A failed downcast yields `false`, never a wild cast into a foreign
//! representation.

use std::any::Any;

use thiserror::Error;

use crate::indexing::IndexingError;
use crate::types::BoundarySide;

mod tensor_product;

pub use tensor_product::TensorProductFESpace;

/// Error type for function-space configuration and boundary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FESpaceError {
    /// A per-direction setter was called with a direction the space does not
    /// have.
    #[error("invalid direction {direction} for a {dim}-dimensional space")]
    InvalidDirection {
        /// The offending direction index.
        direction: usize,
        /// Dimension of the space.
        dim: usize,
    },

    /// The requested side is not a face of a patch of this dimension.
    #[error("side '{side}' is not a face of a {dim}-dimensional parametric domain")]
    InvalidSide {
        /// The requested side.
        side: BoundarySide,
        /// Dimension of the space.
        dim: usize,
    },

    /// A boundary operation ran before the function-id table was sized to
    /// the total number of basis functions.
    #[error("function ids not sized: expected {expected} entries, found {found}")]
    FunctionIdsNotSized {
        /// Required length (`total_number()`).
        expected: usize,
        /// Current length of the id table.
        found: usize,
    },

    /// The id sequence handed to a boundary assignment has the wrong length
    /// for that side.
    #[error("boundary id count mismatch on side '{side}': expected {expected}, found {found}")]
    BoundaryIdCountMismatch {
        /// The side being assigned.
        side: BoundarySide,
        /// Number of functions on that face.
        expected: usize,
        /// Number of ids supplied.
        found: usize,
    },

    /// Spatial dimensions above 3 are not representable.
    #[error("spatial dimension {0} exceeds the supported maximum of 3")]
    UnsupportedDimension(usize),

    /// A tensor coordinate computation failed.
    #[error(transparent)]
    Indexing(#[from] IndexingError),
}

/// Common interface of finite-element-like approximation spaces.
///
/// Object safety matters here: multipatch code holds collections of
/// `Box<dyn FESpace>` and compares them pairwise without knowing the
/// concrete space kind.
pub trait FESpace: Any {
    /// Spatial dimension of the parametric domain, 0 to 3.
    fn dim(&self) -> usize;

    /// Total number of basis functions of the space.
    fn total_number(&self) -> usize;

    /// Structural tag identifying the space kind and dimension.
    ///
    /// Compatibility checks match on this tag before any representation-
    /// specific comparison, so two spaces of different kinds can be compared
    /// cheaply and safely.
    fn type_tag(&self) -> String;

    /// Check internal consistency. Returns `false` (with a diagnostic)
    /// rather than failing hard; the caller decides whether to abort.
    fn validate(&self) -> bool;

    /// Whether `other` describes the same parametric space, making the two
    /// interchangeable for coupling.
    fn is_compatible(&self, other: &dyn FESpace) -> bool;

    /// Upcast for checked downcasting on `dyn FESpace`.
    fn as_any(&self) -> &dyn Any;
}

impl dyn FESpace {
    /// Attempt to downcast a trait object to a concrete space type.
    ///
    /// Returns `None` when the underlying space is of a different kind.
    pub fn downcast_ref<T: FESpace>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downcast_ref_on_matching_type() {
        let space = TensorProductFESpace::point();
        let dynamic: &dyn FESpace = &space;
        assert!(dynamic.downcast_ref::<TensorProductFESpace>().is_some());
    }

    #[test]
    fn test_error_display_names_side() {
        let err = FESpaceError::InvalidSide {
            side: BoundarySide::Top,
            dim: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("top"));
        assert!(msg.contains("2-dimensional"));
    }
}
