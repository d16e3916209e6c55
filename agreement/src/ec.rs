//! Short Weierstrass curves over prime and binary fields.
//!
//! Over `Fp` (with `p > 3`) the curve equation is `y^2 = x^3 + ax + b`.
//! Over `F2^m` the non-supersingular form `y^2 + xy = x^3 + ax^2 + b` is used.
//!
//! Points are kept in affine coordinates and every group operation performs a
//! field inversion. **All operations are variable time.**

mod point;
mod sec1;

pub use self::point::AffinePoint;

use crate::{Error, Result};
use ecfield::{Field, FieldElement, num_bigint::BigUint};
use num_traits::Zero;

/// Elliptic curve given by its coefficients `a` and `b`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Curve {
    a: FieldElement,
    b: FieldElement,
}

impl Curve {
    /// Create a curve from coefficients in the same field.
    ///
    /// Prime field curves must be non-singular (`4a^3 + 27b^2 != 0`) over a
    /// field of characteristic larger than 3. Binary field curves must have
    /// `b != 0`.
    pub fn new(a: FieldElement, b: FieldElement) -> Result<Self> {
        FieldElement::check_field_elements(&a, &b)?;

        match a.field() {
            Field::Prime(field) => {
                if field.modulus() <= &BigUint::from(3u8) {
                    return Err(ecfield::Error::InvalidParameters(
                        "curve field characteristic must be larger than 3",
                    )
                    .into());
                }

                let field = a.field();
                let discriminant = &(&field.from_u64(4) * &a.square()) * &a
                    + &field.from_u64(27) * &b.square();

                if discriminant.is_zero() {
                    return Err(ecfield::Error::InvalidParameters("curve is singular").into());
                }
            }
            Field::Binary(_) => {
                if b.is_zero() {
                    return Err(ecfield::Error::InvalidParameters(
                        "curve coefficient b must be nonzero",
                    )
                    .into());
                }
            }
        }

        Ok(Self { a, b })
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Field the curve is defined over.
    pub fn field(&self) -> Field {
        self.a.field()
    }

    /// Is this a curve over a binary field?
    pub fn is_binary(&self) -> bool {
        matches!(self.a, FieldElement::Binary(_))
    }

    /// Create a point from affine coordinates, checking it is on the curve.
    pub fn point(&self, x: FieldElement, y: FieldElement) -> Result<AffinePoint> {
        let point = AffinePoint::Affine { x, y };

        if self.is_on_curve(&point) {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Does the point satisfy the curve equation? The identity always does.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        let AffinePoint::Affine { x, y } = point else {
            return true;
        };

        if FieldElement::check_field_elements(x, &self.a).is_err()
            || FieldElement::check_field_elements(y, &self.a).is_err()
        {
            return false;
        }

        let x2 = x.square();

        if self.is_binary() {
            // y^2 + xy = x^3 + ax^2 + b
            y.square() + x * y == &(&x2 * x) + &(&self.a * &x2) + &self.b
        } else {
            // y^2 = x^3 + ax + b
            y.square() == &(&x2 * x) + &(&self.a * x) + &self.b
        }
    }

    /// Negate a point.
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        match point {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Affine { x, y } => {
                let y = if self.is_binary() { x + y } else { -y };

                AffinePoint::Affine { x: x.clone(), y }
            }
        }
    }

    /// Add two points.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (AffinePoint::Identity, _) => return Ok(rhs.clone()),
            (_, AffinePoint::Identity) => return Ok(lhs.clone()),
            (AffinePoint::Affine { x: x1, y: y1 }, AffinePoint::Affine { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        if x1 == x2 {
            // Either the same point, or one is the negation of the other
            return if y1 == y2 {
                self.double(lhs)
            } else {
                Ok(AffinePoint::Identity)
            };
        }

        let (x3, y3) = if self.is_binary() {
            // λ = (y1 + y2) / (x1 + x2)
            // x3 = λ^2 + λ + x1 + x2 + a
            // y3 = λ(x1 + x3) + x3 + y1
            let sum_x = x1 + x2;
            let lambda = (y1 + y2).divide(&sum_x)?;
            let x3 = &(&lambda.square() + &lambda) + &(&sum_x + &self.a);
            let y3 = &(&lambda * &(x1 + &x3)) + &(&x3 + y1);
            (x3, y3)
        } else {
            // λ = (y2 - y1) / (x2 - x1)
            // x3 = λ^2 - x1 - x2
            // y3 = λ(x1 - x3) - y1
            let lambda = (y2 - y1).divide(&(x2 - x1))?;
            let x3 = &(&lambda.square() - x1) - x2;
            let y3 = &(&lambda * &(x1 - &x3)) - y1;
            (x3, y3)
        };

        Ok(AffinePoint::Affine { x: x3, y: y3 })
    }

    /// Double a point.
    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint> {
        let AffinePoint::Affine { x, y } = point else {
            return Ok(AffinePoint::Identity);
        };

        let (x3, y3) = if self.is_binary() {
            // Points with x = 0 have order 2
            if x.is_zero() {
                return Ok(AffinePoint::Identity);
            }

            // λ = x + y / x
            // x3 = λ^2 + λ + a
            // y3 = x^2 + (λ + 1) x3
            let lambda = x + &y.divide(x)?;
            let x3 = &(&lambda.square() + &lambda) + &self.a;
            let y3 = &(&x.square() + &(&lambda * &x3)) + &x3;
            (x3, y3)
        } else {
            // Points with y = 0 have order 2
            if y.is_zero() {
                return Ok(AffinePoint::Identity);
            }

            // λ = (3x^2 + a) / 2y
            // x3 = λ^2 - 2x
            // y3 = λ(x - x3) - y
            let field = self.field();
            let numerator = &(&field.from_u64(3) * &x.square()) + &self.a;
            let lambda = numerator.divide(&y.double())?;
            let x3 = &lambda.square() - &x.double();
            let y3 = &(&lambda * &(x - &x3)) - y;
            (x3, y3)
        };

        Ok(AffinePoint::Affine { x: x3, y: y3 })
    }

    /// Scalar multiplication `[k] point`, by left-to-right double-and-add.
    ///
    /// **This operation is variable time with respect to the scalar `k`.**
    pub fn multiply(&self, point: &AffinePoint, k: &BigUint) -> Result<AffinePoint> {
        let mut acc = AffinePoint::Identity;

        if k.is_zero() || point.is_identity() {
            return Ok(acc);
        }

        for i in (0..k.bits()).rev() {
            acc = self.double(&acc)?;

            if k.bit(i) {
                acc = self.add(&acc, point)?;
            }
        }

        Ok(acc)
    }
}
