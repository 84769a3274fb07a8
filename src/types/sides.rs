//! Boundary sides of the parametric domain.
//!
//! A tensor-product patch lives on a parametric line, square or cube. Its
//! boundary pieces are addressed by six symbolic faces; which of them exist
//! depends on the patch dimension:
//!
//! | Side   | Normal direction | Fixed coordinate |
//! |--------|------------------|------------------|
//! | Left   | 0                | 1                |
//! | Right  | 0                | n1               |
//! | Front  | 1                | 1                |
//! | Back   | 1                | n2               |
//! | Bottom | 2                | 1                |
//! | Top    | 2                | n3               |
//!
//! 1D patches have only `Left`/`Right` (point boundaries), 2D patches add
//! `Front`/`Back` (edges), 3D patches all six (faces).

use std::fmt;

/// One face of the parametric cube/square/line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundarySide {
    /// Face at coordinate 1 in direction 0.
    Left,
    /// Face at coordinate n1 in direction 0.
    Right,
    /// Face at coordinate 1 in direction 1.
    Front,
    /// Face at coordinate n2 in direction 1.
    Back,
    /// Face at coordinate 1 in direction 2.
    Bottom,
    /// Face at coordinate n3 in direction 2.
    Top,
}

impl BoundarySide {
    /// All six sides, lower face before upper face per direction.
    pub const ALL: [BoundarySide; 6] = [
        BoundarySide::Left,
        BoundarySide::Right,
        BoundarySide::Front,
        BoundarySide::Back,
        BoundarySide::Bottom,
        BoundarySide::Top,
    ];

    /// Parametric direction this side is normal to.
    pub fn normal_direction(self) -> usize {
        match self {
            BoundarySide::Left | BoundarySide::Right => 0,
            BoundarySide::Front | BoundarySide::Back => 1,
            BoundarySide::Bottom | BoundarySide::Top => 2,
        }
    }

    /// True for the face at the lower parametric end (fixed coordinate 1),
    /// false for the face at the upper end (fixed coordinate = extent).
    pub fn is_lower(self) -> bool {
        matches!(
            self,
            BoundarySide::Left | BoundarySide::Front | BoundarySide::Bottom
        )
    }

    /// Whether this side exists on a `dim`-dimensional patch.
    ///
    /// A side exists iff its normal direction is a direction of the patch,
    /// so a 0-dimensional patch has no sides at all.
    pub fn is_valid_for_dim(self, dim: usize) -> bool {
        self.normal_direction() < dim
    }

    /// The sides of a `dim`-dimensional patch, in [`ALL`](Self::ALL) order.
    pub fn for_dim(dim: usize) -> impl Iterator<Item = BoundarySide> {
        Self::ALL
            .into_iter()
            .filter(move |s| s.is_valid_for_dim(dim))
    }
}

impl fmt::Display for BoundarySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundarySide::Left => "left",
            BoundarySide::Right => "right",
            BoundarySide::Front => "front",
            BoundarySide::Back => "back",
            BoundarySide::Bottom => "bottom",
            BoundarySide::Top => "top",
        };
        write!(f, "{}", name)
    }
}
