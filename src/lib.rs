//! # iga-rs
//!
//! Building blocks for isogeometric analysis: the parametric description of
//! a single NURBS patch used as a finite-element-like approximation space.
//!
//! This crate provides:
//! - Tensor-product index arithmetic (1D/2D/3D, direction 0 fastest)
//! - Knot vector containers
//! - Boundary sides of the parametric cube/square/line
//! - The [`TensorProductFESpace`] with boundary function-index
//!   extraction/assignment and boundary sub-space construction
//!
//! Basis-function evaluation, control-point geometry, rational weighting and
//! refinement are out of scope; this crate covers the combinatorial indexing
//! side of a patch.
//!
//! # Example
//!
//! ```
//! use iga_rs::{BoundarySide, TensorProductFESpace};
//!
//! // A quadratic-linear 2D patch with 3 x 2 basis functions.
//! let mut space = TensorProductFESpace::new(2)?;
//! space.set_info(0, 3, 2)?;
//! space.set_info(1, 2, 1)?;
//! space.set_knot_vector(0, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0])?;
//! space.set_knot_vector(1, &[0.0, 0.0, 1.0, 1.0])?;
//! assert!(space.validate());
//!
//! space.set_function_ids((0..6).collect())?;
//! let front = space.extract_boundary_function_indices(BoundarySide::Front)?;
//! assert_eq!(front, vec![0, 1, 2]);
//!
//! // The edge itself is a 1D space carrying direction 0's data.
//! let edge = space.construct_boundary_fespace(BoundarySide::Front)?;
//! assert_eq!(edge.dim(), 1);
//! assert_eq!(edge.extent(0), 3);
//! # Ok::<(), iga_rs::FESpaceError>(())
//! ```

pub mod fespace;
pub mod indexing;
pub mod knots;
pub mod types;

// Re-export main types for convenience
pub use fespace::{FESpace, FESpaceError, TensorProductFESpace};
pub use indexing::{index_1d, index_2d, index_3d, IndexingError};
pub use knots::KnotVector;
pub use types::BoundarySide;
