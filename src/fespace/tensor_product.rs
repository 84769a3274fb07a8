//! Tensor-product NURBS function space of a single patch.
//!
//! The space is the tensor product of up to three univariate B-spline bases,
//! one per parametric direction, each described by a polynomial order, a
//! basis-function count (the extent) and a knot vector. The patch's global
//! basis-function ids live in a flat table addressed through the
//! [`crate::indexing`] maps, with direction 0 varying fastest.
//!
//! Boundary handling is the heart of the module: every face of the
//! parametric domain carries a lower-dimensional tensor-product structure,
//! and the extraction/assignment pair slices the id table along that face in
//! a fixed boundary-local order so the two operations are exact inverses.
//! Construction of the boundary space itself recurses one dimension down and
//! terminates at the 0-dimensional point space.

use std::any::Any;
use std::fmt;

use crate::indexing::{index_1d, index_2d, index_3d};
use crate::knots::KnotVector;
use crate::types::BoundarySide;

use super::{FESpace, FESpaceError};

/// Directions tangential to a 3D face, in increasing order.
///
/// The first direction varies fastest in the boundary-local layout.
fn tangential_directions_3d(normal: usize) -> (usize, usize) {
    match normal {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

/// NURBS tensor-product approximation space over a parametric line, square
/// or cube.
///
/// The dimension is a runtime value in `0..=3`; the 0-dimensional space is
/// the degenerate point space that terminates boundary recursion. Per-
/// direction data is stored in fixed arrays of arity 3, of which the first
/// `dim` entries are meaningful.
///
/// # Example
///
/// ```
/// use iga_rs::{KnotVector, TensorProductFESpace};
///
/// let mut space = TensorProductFESpace::new(2).unwrap();
/// space.set_info(0, 3, 2).unwrap();
/// space.set_info(1, 2, 1).unwrap();
/// space.set_knot_vector(0, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
/// space.set_knot_vector(1, &[0.0, 0.0, 1.0, 1.0]).unwrap();
/// assert!(space.validate());
/// assert_eq!(space.total_number(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TensorProductFESpace {
    dim: usize,
    orders: [usize; 3],
    extents: [usize; 3],
    knot_vectors: [KnotVector; 3],
    /// Flat map from tensor-product linear index to global function id.
    /// Empty until the surrounding system enumerates the patch; must be
    /// sized to `total_number()` before any boundary read or write.
    function_ids: Vec<usize>,
}

impl TensorProductFESpace {
    /// Create an empty space of the given dimension.
    ///
    /// Per-direction data starts unset; populate it with
    /// [`set_info`](Self::set_info) and
    /// [`set_knot_vector`](Self::set_knot_vector), then check with
    /// [`validate`](Self::validate).
    pub fn new(dim: usize) -> Result<Self, FESpaceError> {
        if dim > 3 {
            return Err(FESpaceError::UnsupportedDimension(dim));
        }
        Ok(Self {
            dim,
            ..Self::default()
        })
    }

    /// The 0-dimensional point space.
    ///
    /// Terminal case of boundary recursion: every query on it returns an
    /// empty or zero result without error.
    pub fn point() -> Self {
        Self::default()
    }

    /// Spatial dimension of the parametric domain.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Polynomial order in direction `d`.
    ///
    /// The point space returns 0 for any `d`. Otherwise `d` must be less
    /// than [`dim`](Self::dim); this panics when it is not.
    pub fn order(&self, d: usize) -> usize {
        if self.dim == 0 {
            return 0;
        }
        assert!(d < self.dim, "direction {} out of range for {}D space", d, self.dim);
        self.orders[d]
    }

    /// Number of basis functions (= control points) in direction `d`.
    ///
    /// Same `d` contract as [`order`](Self::order).
    pub fn extent(&self, d: usize) -> usize {
        if self.dim == 0 {
            return 0;
        }
        assert!(d < self.dim, "direction {} out of range for {}D space", d, self.dim);
        self.extents[d]
    }

    /// Knot vector in direction `d`.
    ///
    /// The point space returns an empty vector for any `d`. Otherwise `d`
    /// must be less than [`dim`](Self::dim); this panics when it is not.
    pub fn knot_vector(&self, d: usize) -> &KnotVector {
        if self.dim == 0 {
            return &self.knot_vectors[0];
        }
        assert!(d < self.dim, "direction {} out of range for {}D space", d, self.dim);
        &self.knot_vectors[d]
    }

    /// Total number of basis functions: the product of all extents.
    ///
    /// The empty product makes this 1 for the point space.
    pub fn total_number(&self) -> usize {
        self.extents[..self.dim].iter().product()
    }

    /// Structural tag of this space, e.g. `"TensorProductFESpace2D"`.
    pub fn type_tag(&self) -> String {
        Self::static_type_tag(self.dim)
    }

    /// Structural tag of a space of dimension `dim`, without an instance.
    pub fn static_type_tag(dim: usize) -> String {
        format!("TensorProductFESpace{}D", dim)
    }

    /// Rebuild the knot vector in direction `d` from raw values.
    ///
    /// On the point space this is accepted as a no-op for any `d`; on higher
    /// dimensions `d >= dim` is a configuration error.
    pub fn set_knot_vector(&mut self, d: usize, values: &[f64]) -> Result<(), FESpaceError> {
        if self.dim == 0 {
            return Ok(());
        }
        self.check_direction(d)?;
        self.knot_vectors[d] = KnotVector::from_values(values);
        Ok(())
    }

    /// Copy an existing knot vector into direction `d`.
    ///
    /// Same `d` contract as [`set_knot_vector`](Self::set_knot_vector).
    pub fn set_knot_vector_from(
        &mut self,
        d: usize,
        knot_vector: &KnotVector,
    ) -> Result<(), FESpaceError> {
        if self.dim == 0 {
            return Ok(());
        }
        self.check_direction(d)?;
        self.knot_vectors[d] = knot_vector.clone();
        Ok(())
    }

    /// Set the basis-function count and polynomial order in direction `d`.
    ///
    /// Same `d` contract as [`set_knot_vector`](Self::set_knot_vector).
    pub fn set_info(&mut self, d: usize, extent: usize, order: usize) -> Result<(), FESpaceError> {
        if self.dim == 0 {
            return Ok(());
        }
        self.check_direction(d)?;
        self.extents[d] = extent;
        self.orders[d] = order;
        Ok(())
    }

    /// Global function ids in tensor-product linear order.
    ///
    /// Empty until assigned with [`set_function_ids`](Self::set_function_ids).
    pub fn function_ids(&self) -> &[usize] {
        &self.function_ids
    }

    /// Assign the global function-id table.
    ///
    /// `ids` must hold exactly [`total_number`](Self::total_number) entries,
    /// direction 0 fastest.
    pub fn set_function_ids(&mut self, ids: Vec<usize>) -> Result<(), FESpaceError> {
        let expected = self.total_number();
        if ids.len() != expected {
            return Err(FESpaceError::FunctionIdsNotSized {
                expected,
                found: ids.len(),
            });
        }
        self.function_ids = ids;
        Ok(())
    }

    /// Check the open-knot-vector compatibility condition in every
    /// direction: `knot_vector.len() == extent + order + 1`.
    ///
    /// Returns `false` with a warning naming the offending direction; the
    /// base contract (function-id table empty or fully sized) is checked as
    /// well, and both must hold.
    pub fn validate(&self) -> bool {
        for d in 0..self.dim {
            let expected = self.extents[d] + self.orders[d] + 1;
            let found = self.knot_vectors[d].len();
            if found != expected {
                tracing::warn!(
                    direction = d,
                    expected,
                    found,
                    "knot vector length incompatible with extent + order + 1"
                );
                return false;
            }
        }
        self.validate_base()
    }

    /// Base-space validation: the function-id table is either unset or sized
    /// to the total number of basis functions.
    fn validate_base(&self) -> bool {
        let expected = self.total_number();
        if !self.function_ids.is_empty() && self.function_ids.len() != expected {
            tracing::warn!(
                expected,
                found = self.function_ids.len(),
                "function-id table has the wrong size"
            );
            return false;
        }
        true
    }

    /// Whether `other` describes the same parametric space.
    ///
    /// The structural tag is matched first; a mismatch is logged and returns
    /// `false` without touching the other space's representation. Tags
    /// agreeing, the per-direction `(extent, order, knot_vector)` triples
    /// must all be equal.
    pub fn is_compatible(&self, other: &dyn FESpace) -> bool {
        if other.type_tag() != self.type_tag() {
            tracing::warn!(
                expected = %self.type_tag(),
                found = %other.type_tag(),
                "function space type mismatch"
            );
            return false;
        }

        let Some(other) = other.as_any().downcast_ref::<TensorProductFESpace>() else {
            // Same tag but a foreign implementation; nothing to compare.
            return false;
        };

        for d in 0..self.dim {
            if self.extents[d] != other.extents[d] {
                return false;
            }
            if self.orders[d] != other.orders[d] {
                return false;
            }
            if self.knot_vectors[d] != other.knot_vectors[d] {
                return false;
            }
        }

        true
    }

    /// Number of basis functions lying on the given side.
    ///
    /// Product of the extents tangential to the side; 1 for a 1D patch
    /// (point boundary) and 0 for the point space.
    pub fn boundary_function_count(&self, side: BoundarySide) -> usize {
        if self.dim == 0 || !side.is_valid_for_dim(self.dim) {
            return 0;
        }
        match self.dim {
            1 => 1,
            2 => self.extents[1 - side.normal_direction()],
            _ => {
                let (t0, t1) = tangential_directions_3d(side.normal_direction());
                self.extents[t0] * self.extents[t1]
            }
        }
    }

    /// Global function ids on the given side, in boundary-local tensor order
    /// (lowest tangential direction varying fastest).
    ///
    /// The point space returns an empty vector for every side. Otherwise the
    /// side must exist for this dimension and the function-id table must be
    /// sized to [`total_number`](Self::total_number).
    pub fn extract_boundary_function_indices(
        &self,
        side: BoundarySide,
    ) -> Result<Vec<usize>, FESpaceError> {
        if self.dim == 0 {
            return Ok(Vec::new());
        }
        self.check_side(side)?;
        self.check_function_ids()?;

        let normal = side.normal_direction();
        let fixed = if side.is_lower() {
            1
        } else {
            self.extents[normal]
        };

        match self.dim {
            1 => {
                let idx = index_1d(fixed, self.extents[0])?;
                Ok(vec![self.function_ids[idx]])
            }
            2 => {
                let t = 1 - normal;
                let (n1, n2) = (self.extents[0], self.extents[1]);
                let mut ids = vec![0; self.extents[t]];
                for a in 1..=self.extents[t] {
                    let mut coord = [0; 2];
                    coord[normal] = fixed;
                    coord[t] = a;
                    ids[index_1d(a, self.extents[t])?] =
                        self.function_ids[index_2d(coord[0], coord[1], n1, n2)?];
                }
                Ok(ids)
            }
            _ => {
                let (t0, t1) = tangential_directions_3d(normal);
                let (m0, m1) = (self.extents[t0], self.extents[t1]);
                let (n1, n2, n3) = (self.extents[0], self.extents[1], self.extents[2]);
                let mut ids = vec![0; m0 * m1];
                for b in 1..=m1 {
                    for a in 1..=m0 {
                        let mut coord = [0; 3];
                        coord[normal] = fixed;
                        coord[t0] = a;
                        coord[t1] = b;
                        ids[index_2d(a, b, m0, m1)?] = self.function_ids
                            [index_3d(coord[0], coord[1], coord[2], n1, n2, n3)?];
                    }
                }
                Ok(ids)
            }
        }
    }

    /// Write `ids` into the function-id table at the positions on `side`.
    ///
    /// Exact inverse of
    /// [`extract_boundary_function_indices`](Self::extract_boundary_function_indices):
    /// `ids` uses the same boundary-local order and must hold exactly
    /// [`boundary_function_count`](Self::boundary_function_count) entries.
    /// The point space accepts only an empty slice, as a no-op.
    pub fn assign_boundary_function_indices(
        &mut self,
        side: BoundarySide,
        ids: &[usize],
    ) -> Result<(), FESpaceError> {
        if self.dim == 0 {
            if !ids.is_empty() {
                return Err(FESpaceError::BoundaryIdCountMismatch {
                    side,
                    expected: 0,
                    found: ids.len(),
                });
            }
            return Ok(());
        }
        self.check_side(side)?;
        self.check_function_ids()?;

        let expected = self.boundary_function_count(side);
        if ids.len() != expected {
            return Err(FESpaceError::BoundaryIdCountMismatch {
                side,
                expected,
                found: ids.len(),
            });
        }

        let normal = side.normal_direction();
        let fixed = if side.is_lower() {
            1
        } else {
            self.extents[normal]
        };

        match self.dim {
            1 => {
                let idx = index_1d(fixed, self.extents[0])?;
                self.function_ids[idx] = ids[0];
            }
            2 => {
                let t = 1 - normal;
                let (n1, n2) = (self.extents[0], self.extents[1]);
                for a in 1..=self.extents[t] {
                    let mut coord = [0; 2];
                    coord[normal] = fixed;
                    coord[t] = a;
                    self.function_ids[index_2d(coord[0], coord[1], n1, n2)?] =
                        ids[index_1d(a, self.extents[t])?];
                }
            }
            _ => {
                let (t0, t1) = tangential_directions_3d(normal);
                let (m0, m1) = (self.extents[t0], self.extents[t1]);
                let (n1, n2, n3) = (self.extents[0], self.extents[1], self.extents[2]);
                for b in 1..=m1 {
                    for a in 1..=m0 {
                        let mut coord = [0; 3];
                        coord[normal] = fixed;
                        coord[t0] = a;
                        coord[t1] = b;
                        self.function_ids[index_3d(coord[0], coord[1], coord[2], n1, n2, n3)?] =
                            ids[index_2d(a, b, m0, m1)?];
                    }
                }
            }
        }

        Ok(())
    }

    /// Build the space describing one boundary of this patch.
    ///
    /// The returned space has dimension `dim - 1` and copies the
    /// `(extent, order, knot_vector)` of the directions tangential to
    /// `side`, in increasing direction order; normal-direction data is
    /// dropped. On a 1D patch the boundary is the point space. The child's
    /// function-id table starts empty; linking it to the parent numbering is
    /// the caller's responsibility.
    pub fn construct_boundary_fespace(
        &self,
        side: BoundarySide,
    ) -> Result<TensorProductFESpace, FESpaceError> {
        if self.dim == 0 {
            return Err(FESpaceError::InvalidSide { side, dim: 0 });
        }
        self.check_side(side)?;

        match self.dim {
            1 => Ok(TensorProductFESpace::point()),
            2 => {
                let t = 1 - side.normal_direction();
                let mut boundary = TensorProductFESpace::new(1)?;
                boundary.set_info(0, self.extents[t], self.orders[t])?;
                boundary.set_knot_vector_from(0, &self.knot_vectors[t])?;
                Ok(boundary)
            }
            _ => {
                let (t0, t1) = tangential_directions_3d(side.normal_direction());
                let mut boundary = TensorProductFESpace::new(2)?;
                boundary.set_info(0, self.extents[t0], self.orders[t0])?;
                boundary.set_info(1, self.extents[t1], self.orders[t1])?;
                boundary.set_knot_vector_from(0, &self.knot_vectors[t0])?;
                boundary.set_knot_vector_from(1, &self.knot_vectors[t1])?;
                Ok(boundary)
            }
        }
    }

    fn check_direction(&self, d: usize) -> Result<(), FESpaceError> {
        if d >= self.dim {
            return Err(FESpaceError::InvalidDirection {
                direction: d,
                dim: self.dim,
            });
        }
        Ok(())
    }

    fn check_side(&self, side: BoundarySide) -> Result<(), FESpaceError> {
        if !side.is_valid_for_dim(self.dim) {
            return Err(FESpaceError::InvalidSide {
                side,
                dim: self.dim,
            });
        }
        Ok(())
    }

    fn check_function_ids(&self) -> Result<(), FESpaceError> {
        let expected = self.total_number();
        if self.function_ids.len() != expected {
            return Err(FESpaceError::FunctionIdsNotSized {
                expected,
                found: self.function_ids.len(),
            });
        }
        Ok(())
    }
}

impl FESpace for TensorProductFESpace {
    fn dim(&self) -> usize {
        self.dim
    }

    fn total_number(&self) -> usize {
        TensorProductFESpace::total_number(self)
    }

    fn type_tag(&self) -> String {
        TensorProductFESpace::type_tag(self)
    }

    fn validate(&self) -> bool {
        TensorProductFESpace::validate(self)
    }

    fn is_compatible(&self, other: &dyn FESpace) -> bool {
        TensorProductFESpace::is_compatible(self, other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for TensorProductFESpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, n = (", self.type_tag())?;
        for d in 0..self.dim {
            write!(f, " {}", self.extents[d])?;
        }
        write!(f, " ), p = (")?;
        for d in 0..self.dim {
            write!(f, " {}", self.orders[d])?;
        }
        writeln!(f, " )")?;

        for d in 0..self.dim {
            writeln!(f, " knot vector {}: {}", d, self.knot_vectors[d])?;
        }

        // The id grid is printed only once the table is fully assigned.
        // A zero extent leaves nothing to print.
        if self.dim > 0
            && self.total_number() > 0
            && self.function_ids.len() == self.total_number()
        {
            writeln!(f, " function indices:")?;
            let n1 = self.extents[0];
            match self.dim {
                1 => {
                    for id in &self.function_ids {
                        write!(f, " {}", id)?;
                    }
                    writeln!(f)?;
                }
                2 => {
                    for row in self.function_ids.chunks(n1) {
                        for id in row {
                            write!(f, " {}", id)?;
                        }
                        writeln!(f)?;
                    }
                }
                _ => {
                    let layer = n1 * self.extents[1];
                    for block in self.function_ids.chunks(layer) {
                        for row in block.chunks(n1) {
                            for id in row {
                                write!(f, " {}", id)?;
                            }
                            writeln!(f)?;
                        }
                        writeln!(f)?;
                    }
                }
            }
        }

        Ok(())
    }
}
