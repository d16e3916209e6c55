//! SEC1 elliptic curve point encoding (SEC 1 v2, section 2.3).
//!
//! - `0x00`: the point at infinity.
//! - `0x02` / `0x03`: compressed, x-coordinate only. The low bit of the tag
//!   is `ỹ`, the parity of `y` (prime fields) or of `y / x` (binary fields).
//! - `0x04`: uncompressed, both coordinates.

use super::{AffinePoint, Curve};
use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use ecfield::FieldElement;

const TAG_IDENTITY: u8 = 0x00;
const TAG_COMPRESSED_EVEN_Y: u8 = 0x02;
const TAG_COMPRESSED_ODD_Y: u8 = 0x03;
const TAG_UNCOMPRESSED: u8 = 0x04;

impl Curve {
    /// Encode a point as a SEC1 octet string.
    pub fn encode_point(&self, point: &AffinePoint, compress: bool) -> Result<Vec<u8>> {
        let AffinePoint::Affine { x, y } = point else {
            return Ok(vec![TAG_IDENTITY]);
        };

        let mut out = Vec::with_capacity(1 + 2 * self.field().byte_len());

        if compress {
            let tag = if self.y_tilde(x, y)? {
                TAG_COMPRESSED_ODD_Y
            } else {
                TAG_COMPRESSED_EVEN_Y
            };

            out.push(tag);
            out.extend_from_slice(&x.to_bytes());
        } else {
            out.push(TAG_UNCOMPRESSED);
            out.extend_from_slice(&x.to_bytes());
            out.extend_from_slice(&y.to_bytes());
        }

        Ok(out)
    }

    /// Decode a SEC1 octet string, checking the point is on the curve.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<AffinePoint> {
        let field = self.field();
        let len = field.byte_len();

        let coordinate = |bytes: &[u8]| field.from_bytes(bytes).map_err(|_| Error::InvalidPoint);

        match bytes.split_first() {
            Some((&TAG_IDENTITY, [])) => Ok(AffinePoint::Identity),
            Some((&(tag @ (TAG_COMPRESSED_EVEN_Y | TAG_COMPRESSED_ODD_Y)), x))
                if x.len() == len =>
            {
                let x = coordinate(x)?;
                let y = self.decompress(&x, tag == TAG_COMPRESSED_ODD_Y)?;
                self.point(x, y)
            }
            Some((&TAG_UNCOMPRESSED, xy)) if xy.len() == 2 * len => {
                let (x, y) = xy.split_at(len);
                self.point(coordinate(x)?, coordinate(y)?)
            }
            _ => Err(Error::InvalidPoint),
        }
    }

    /// Compression bit `ỹ` of a finite point.
    fn y_tilde(&self, x: &FieldElement, y: &FieldElement) -> Result<bool> {
        if !self.is_binary() {
            return Ok(y.to_canonical().bit(0));
        }

        if x.is_zero() {
            return Ok(false);
        }

        Ok(y.divide(x)?.to_canonical().bit(0))
    }

    /// Recover `y` from `x` and the compression bit.
    fn decompress(&self, x: &FieldElement, y_tilde: bool) -> Result<FieldElement> {
        if let FieldElement::Binary(xb) = x {
            if xb.is_zero() {
                // y^2 = b
                return Ok(self.b.sqrt()?);
            }

            // z^2 + z = x + a + b / x^2, then y = x z
            let beta = &(x + &self.a) + &self.b.divide(&x.square())?;
            let beta = beta.as_binary().ok_or(Error::InvalidPoint)?;
            let z = beta.solve_quadratic().map_err(|_| Error::InvalidPoint)?;
            let mut z = FieldElement::from(z);

            if z.to_canonical().bit(0) != y_tilde {
                z = &z + &x.field().one();
            }

            return Ok(x * &z);
        }

        // y^2 = x^3 + ax + b
        let alpha = &(&x.square() * x) + &(&(&self.a * x) + &self.b);
        let beta = alpha.sqrt().map_err(|_| Error::InvalidPoint)?;

        if beta.is_zero() && y_tilde {
            return Err(Error::InvalidPoint);
        }

        if beta.to_canonical().bit(0) == y_tilde {
            Ok(beta)
        } else {
            Ok(-beta)
        }
    }
}
