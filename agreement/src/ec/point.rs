//! Affine curve points.

use ecfield::FieldElement;

/// Point on a short Weierstrass curve in affine coordinates.
///
/// Points do not carry their curve: use [`Curve::point`][crate::ec::Curve::point]
/// to construct a point validated against a curve equation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Finite point.
    Affine {
        /// x-coordinate
        x: FieldElement,

        /// y-coordinate
        y: FieldElement,
    },
}

impl AffinePoint {
    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Get the x-coordinate, unless this is the identity.
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Self::Identity => None,
            Self::Affine { x, .. } => Some(x),
        }
    }

    /// Get the y-coordinate, unless this is the identity.
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Self::Identity => None,
            Self::Affine { y, .. } => Some(y),
        }
    }
}

