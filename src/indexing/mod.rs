//! Tensor-product index arithmetic.
//!
//! Maps 1-based per-direction tensor coordinates to the flat 0-based linear
//! index used for control-point and basis-function storage, with direction 0
//! varying fastest:
//!
//! - 1D: `index = (i - 1)`
//! - 2D: `index = (i - 1) + (j - 1) * n1`
//! - 3D: `index = (i - 1) + (j - 1) * n1 + (k - 1) * n1 * n2`
//!
//! The fastest-varying-direction convention is load-bearing: the boundary
//! extraction code in [`crate::fespace`] relies on it to address faces of the
//! global layout, so it is kept explicit here rather than hidden behind a
//! multi-dimensional container.
//!
//! All functions reject out-of-range coordinates with an
//! [`IndexingError`] naming the offending axis.
//!
//! # Example
//!
//! ```
//! use iga_rs::indexing::{index_1d, index_2d, index_3d};
//!
//! assert_eq!(index_1d(1, 4).unwrap(), 0);
//! assert_eq!(index_2d(3, 2, 4, 3).unwrap(), 6);
//! assert_eq!(index_3d(1, 1, 2, 4, 3, 2).unwrap(), 12);
//! ```

use thiserror::Error;

/// Error type for tensor-product index computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexingError {
    /// A tensor coordinate fell outside its 1-based valid range.
    #[error("coordinate {coordinate} out of range on axis {axis}: valid range is 1..={extent}")]
    OutOfRange {
        /// Axis the coordinate belongs to (0, 1 or 2).
        axis: usize,
        /// The offending 1-based coordinate.
        coordinate: usize,
        /// Number of basis functions along that axis.
        extent: usize,
    },
}

/// Check a single 1-based coordinate against its extent.
#[inline]
fn check_coordinate(axis: usize, coordinate: usize, extent: usize) -> Result<(), IndexingError> {
    if coordinate < 1 || coordinate > extent {
        return Err(IndexingError::OutOfRange {
            axis,
            coordinate,
            extent,
        });
    }
    Ok(())
}

/// Linear index of the 1-based coordinate `i` in a 1D layout of extent `n1`.
#[inline]
pub fn index_1d(i: usize, n1: usize) -> Result<usize, IndexingError> {
    check_coordinate(0, i, n1)?;
    Ok(i - 1)
}

/// Linear index of `(i, j)` in a 2D layout of extents `(n1, n2)`.
///
/// Direction 0 varies fastest.
#[inline]
pub fn index_2d(i: usize, j: usize, n1: usize, n2: usize) -> Result<usize, IndexingError> {
    check_coordinate(0, i, n1)?;
    check_coordinate(1, j, n2)?;
    Ok((i - 1) + (j - 1) * n1)
}

/// Linear index of `(i, j, k)` in a 3D layout of extents `(n1, n2, n3)`.
///
/// Direction 0 varies fastest, direction 2 slowest.
#[inline]
pub fn index_3d(
    i: usize,
    j: usize,
    k: usize,
    n1: usize,
    n2: usize,
    n3: usize,
) -> Result<usize, IndexingError> {
    check_coordinate(0, i, n1)?;
    check_coordinate(1, j, n2)?;
    check_coordinate(2, k, n3)?;
    Ok((i - 1) + (j - 1) * n1 + (k - 1) * n1 * n2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_1d() {
        assert_eq!(index_1d(1, 5), Ok(0));
        assert_eq!(index_1d(5, 5), Ok(4));
    }

    #[test]
    fn test_index_2d_direction_0_fastest() {
        // Consecutive i values are adjacent in memory.
        assert_eq!(index_2d(1, 1, 4, 3), Ok(0));
        assert_eq!(index_2d(2, 1, 4, 3), Ok(1));
        assert_eq!(index_2d(1, 2, 4, 3), Ok(4));
        assert_eq!(index_2d(4, 3, 4, 3), Ok(11));
    }

    #[test]
    fn test_index_3d_layout() {
        assert_eq!(index_3d(1, 1, 1, 4, 3, 2), Ok(0));
        assert_eq!(index_3d(2, 1, 1, 4, 3, 2), Ok(1));
        assert_eq!(index_3d(1, 2, 1, 4, 3, 2), Ok(4));
        assert_eq!(index_3d(1, 1, 2, 4, 3, 2), Ok(12));
        assert_eq!(index_3d(4, 3, 2, 4, 3, 2), Ok(23));
    }

    #[test]
    fn test_index_3d_enumerates_all_cells() {
        let (n1, n2, n3) = (3, 4, 2);
        let mut seen = vec![false; n1 * n2 * n3];
        for k in 1..=n3 {
            for j in 1..=n2 {
                for i in 1..=n1 {
                    let idx = index_3d(i, j, k, n1, n2, n3).unwrap();
                    assert!(!seen[idx], "duplicate index {}", idx);
                    seen[idx] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_zero_coordinate_rejected() {
        assert_eq!(
            index_1d(0, 5),
            Err(IndexingError::OutOfRange {
                axis: 0,
                coordinate: 0,
                extent: 5
            })
        );
    }

    #[test]
    fn test_out_of_range_names_axis() {
        let err = index_3d(2, 5, 1, 4, 3, 2).unwrap_err();
        assert_eq!(
            err,
            IndexingError::OutOfRange {
                axis: 1,
                coordinate: 5,
                extent: 3
            }
        );
        let err = index_3d(2, 2, 3, 4, 3, 2).unwrap_err();
        assert_eq!(
            err,
            IndexingError::OutOfRange {
                axis: 2,
                coordinate: 3,
                extent: 2
            }
        );
    }

    #[test]
    fn test_zero_extent_has_no_valid_coordinate() {
        assert!(index_1d(1, 0).is_err());
    }
}
