//! Knot vector container.
//!
//! A knot vector is the non-decreasing sequence of parameter values that,
//! together with the polynomial order and the number of basis functions,
//! defines a B-spline basis in one parametric direction. For an open knot
//! vector the lengths satisfy `len == extent + order + 1`; that relation is
//! enforced by [`TensorProductFESpace::validate`](crate::TensorProductFESpace::validate),
//! not here.

use std::fmt;

/// Ordered sequence of knot values in one parametric direction.
///
/// Equality is element-wise value equality, which is what patch
/// compatibility checks need: two patches couple along an interface only if
/// they carry identical knots there.
///
/// # Example
///
/// ```
/// use iga_rs::KnotVector;
///
/// let kv = KnotVector::from_values(&[0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0]);
/// assert_eq!(kv.len(), 7);
/// assert!(kv.is_non_decreasing());
/// assert_eq!(kv[3], 0.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KnotVector {
    values: Vec<f64>,
}

impl KnotVector {
    /// Create an empty knot vector.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create a knot vector from raw values, in the given order.
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Append a knot at the end of the sequence.
    ///
    /// Knot vectors are typically built incrementally while reading a patch
    /// description; ordering is the caller's responsibility and can be
    /// checked afterwards with [`is_non_decreasing`](Self::is_non_decreasing).
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the vector holds no knots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Knot value at position `i`, if in range.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    /// All knot values as a slice.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over knot values.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// True if the knots are sorted in non-decreasing order.
    ///
    /// Every valid spline knot vector satisfies this; it is advisory here
    /// because patch data arrives from external sources that are validated
    /// as a whole, not knot by knot.
    pub fn is_non_decreasing(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl std::ops::Index<usize> for KnotVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl fmt::Display for KnotVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a KnotVector {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values() {
        let kv = KnotVector::from_values(&[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(kv.len(), 4);
        assert_eq!(kv.get(1), Some(0.0));
        assert_eq!(kv.get(4), None);
        assert_eq!(kv.values(), &[0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_incremental_build_matches_from_values() {
        let mut kv = KnotVector::new();
        for v in [0.0, 0.5, 1.0] {
            kv.push(v);
        }
        assert_eq!(kv, KnotVector::from_values(&[0.0, 0.5, 1.0]));
    }

    #[test]
    fn test_value_equality() {
        let a = KnotVector::from_values(&[0.0, 0.5, 1.0]);
        let b = KnotVector::from_values(&[0.0, 0.5, 1.0]);
        let c = KnotVector::from_values(&[0.0, 0.6, 1.0]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, KnotVector::new());
    }

    #[test]
    fn test_non_decreasing() {
        assert!(KnotVector::from_values(&[0.0, 0.0, 0.5, 1.0]).is_non_decreasing());
        assert!(!KnotVector::from_values(&[0.0, 1.0, 0.5]).is_non_decreasing());
        // Trivially sorted
        assert!(KnotVector::new().is_non_decreasing());
        assert!(KnotVector::from_values(&[3.0]).is_non_decreasing());
    }

    #[test]
    fn test_display() {
        let kv = KnotVector::from_values(&[0.0, 0.5, 1.0]);
        assert_eq!(format!("{}", kv), "0 0.5 1");
    }
}
