//! Field identity and the element type dispatching over field kinds.

use crate::{BinaryField, BinaryFieldElement, Error, PrimeField, PrimeFieldElement, Result};
use alloc::{sync::Arc, vec::Vec};
use core::fmt;
use num_bigint::BigUint;
use rand_core::RngCore;

/// A finite field: either `Fp` or `F2^m` in polynomial basis.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    /// Prime field `Fp`.
    Prime(Arc<PrimeField>),

    /// Binary extension field `F2^m`.
    Binary(Arc<BinaryField>),
}

impl Field {
    /// Prime field with the given modulus.
    pub fn prime(modulus: BigUint) -> Result<Self> {
        PrimeField::new(modulus).map(|field| Self::Prime(Arc::new(field)))
    }

    /// Binary field with reduction polynomial `z^m + z^k + 1`.
    pub fn trinomial(m: u32, k: u32) -> Result<Self> {
        BinaryField::trinomial(m, k).map(|field| Self::Binary(Arc::new(field)))
    }

    /// Binary field with reduction polynomial `z^m + z^k3 + z^k2 + z^k1 + 1`.
    pub fn pentanomial(m: u32, k1: u32, k2: u32, k3: u32) -> Result<Self> {
        BinaryField::pentanomial(m, k1, k2, k3).map(|field| Self::Binary(Arc::new(field)))
    }

    /// Bit length of a field element.
    pub fn bits(&self) -> u64 {
        match self {
            Self::Prime(field) => field.bits(),
            Self::Binary(field) => field.bits(),
        }
    }

    /// Size of a serialized field element in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            Self::Prime(field) => field.byte_len(),
            Self::Binary(field) => field.byte_len(),
        }
    }

    /// Additive identity.
    pub fn zero(&self) -> FieldElement {
        match self {
            Self::Prime(field) => PrimeFieldElement::zero(Arc::clone(field)).into(),
            Self::Binary(field) => BinaryFieldElement::zero(Arc::clone(field)).into(),
        }
    }

    /// Multiplicative identity.
    pub fn one(&self) -> FieldElement {
        match self {
            Self::Prime(field) => PrimeFieldElement::one(Arc::clone(field)).into(),
            Self::Binary(field) => BinaryFieldElement::one(Arc::clone(field)).into(),
        }
    }

    /// Element with the given canonical value.
    ///
    /// Returns [`Error::NonCanonical`] unless `x < p` (prime) or
    /// `x < 2^m` (binary).
    pub fn element(&self, x: BigUint) -> Result<FieldElement> {
        Ok(match self {
            Self::Prime(field) => PrimeFieldElement::new(Arc::clone(field), x)?.into(),
            Self::Binary(field) => BinaryFieldElement::new(Arc::clone(field), x)?.into(),
        })
    }

    /// Element from a small integer, reduced into the field.
    pub fn from_u64(&self, w: u64) -> FieldElement {
        let x = BigUint::from(w);
        match self {
            Self::Prime(field) => {
                PrimeFieldElement::from_uint_reduced(Arc::clone(field), &x).into()
            }
            Self::Binary(field) => {
                BinaryFieldElement::from_uint_reduced(Arc::clone(field), &x).into()
            }
        }
    }

    /// Decode an element from its fixed-width big-endian encoding of exactly
    /// [`Field::byte_len`] bytes.
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<FieldElement> {
        Ok(match self {
            Self::Prime(field) => PrimeFieldElement::from_bytes(Arc::clone(field), bytes)?.into(),
            Self::Binary(field) => BinaryFieldElement::from_bytes(Arc::clone(field), bytes)?.into(),
        })
    }

    /// Sample a uniformly random element.
    pub fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> FieldElement {
        match self {
            Self::Prime(field) => PrimeFieldElement::random(Arc::clone(field), rng).into(),
            Self::Binary(field) => BinaryFieldElement::random(Arc::clone(field), rng).into(),
        }
    }
}

impl From<PrimeField> for Field {
    fn from(field: PrimeField) -> Field {
        Field::Prime(Arc::new(field))
    }
}

impl From<BinaryField> for Field {
    fn from(field: BinaryField) -> Field {
        Field::Binary(Arc::new(field))
    }
}

/// Element of a [`Field`].
///
/// # Panics
///
/// Arithmetic between an element of a prime field and an element of a binary
/// field panics. Elements of two different fields of the same kind are not
/// detected in release builds; use [`FieldElement::check_field_elements`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum FieldElement {
    /// Element of `Fp`.
    Prime(PrimeFieldElement),

    /// Element of `F2^m`.
    Binary(BinaryFieldElement),
}

impl FieldElement {
    /// Checks that `a` and `b` are elements of the same field.
    pub fn check_field_elements(a: &Self, b: &Self) -> Result<()> {
        match (a, b) {
            (Self::Prime(a), Self::Prime(b)) => PrimeFieldElement::check_field_elements(a, b),
            (Self::Binary(a), Self::Binary(b)) => BinaryFieldElement::check_field_elements(a, b),
            _ => Err(Error::FieldMismatch),
        }
    }

    /// Field this element belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::Prime(fe) => Field::Prime(Arc::clone(fe.field())),
            Self::Binary(fe) => Field::Binary(Arc::clone(fe.field())),
        }
    }

    /// Borrow the prime field element, if this is one.
    pub fn as_prime(&self) -> Option<&PrimeFieldElement> {
        match self {
            Self::Prime(fe) => Some(fe),
            Self::Binary(_) => None,
        }
    }

    /// Borrow the binary field element, if this is one.
    pub fn as_binary(&self) -> Option<&BinaryFieldElement> {
        match self {
            Self::Binary(fe) => Some(fe),
            Self::Prime(_) => None,
        }
    }

    /// Canonical value as a non-negative integer. For binary fields this is
    /// the coefficient bit vector.
    pub fn to_canonical(&self) -> BigUint {
        match self {
            Self::Prime(fe) => fe.to_canonical(),
            Self::Binary(fe) => fe.to_canonical(),
        }
    }

    /// Fixed-width big-endian encoding, [`Field::byte_len`] bytes long.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Prime(fe) => fe.to_bytes(),
            Self::Binary(fe) => fe.to_bytes(),
        }
    }

    /// Is this the additive identity?
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Prime(fe) => fe.is_zero(),
            Self::Binary(fe) => fe.is_zero(),
        }
    }

    /// Is this the multiplicative identity?
    pub fn is_one(&self) -> bool {
        match self {
            Self::Prime(fe) => fe.is_one(),
            Self::Binary(fe) => fe.is_one(),
        }
    }

    /// Add elements.
    pub fn add(&self, rhs: &Self) -> Self {
        self.zip(rhs, PrimeFieldElement::add, BinaryFieldElement::add)
    }

    /// Subtract elements.
    pub fn subtract(&self, rhs: &Self) -> Self {
        self.zip(rhs, PrimeFieldElement::subtract, BinaryFieldElement::subtract)
    }

    /// Multiply elements.
    pub fn multiply(&self, rhs: &Self) -> Self {
        self.zip(rhs, PrimeFieldElement::multiply, BinaryFieldElement::multiply)
    }

    /// Divide elements: `self * rhs^-1`.
    ///
    /// Returns [`Error::ZeroInversion`] if `rhs` is zero.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.multiply(&rhs.invert()?))
    }

    /// Additive inverse.
    pub fn negate(&self) -> Self {
        match self {
            Self::Prime(fe) => fe.negate().into(),
            Self::Binary(fe) => fe.negate().into(),
        }
    }

    /// Double element.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Square element.
    pub fn square(&self) -> Self {
        match self {
            Self::Prime(fe) => fe.square().into(),
            Self::Binary(fe) => fe.square().into(),
        }
    }

    /// Multiplicative inverse.
    ///
    /// Returns [`Error::ZeroInversion`] if `self` is zero.
    pub fn invert(&self) -> Result<Self> {
        Ok(match self {
            Self::Prime(fe) => fe.invert()?.into(),
            Self::Binary(fe) => fe.invert()?.into(),
        })
    }

    /// Square root.
    ///
    /// Returns [`Error::NoSquareRoot`] for quadratic non-residues of `Fp`.
    /// Every element of `F2^m` has a square root.
    pub fn sqrt(&self) -> Result<Self> {
        Ok(match self {
            Self::Prime(fe) => fe.sqrt()?.into(),
            Self::Binary(fe) => fe.sqrt().into(),
        })
    }

    fn zip(
        &self,
        rhs: &Self,
        prime: impl FnOnce(&PrimeFieldElement, &PrimeFieldElement) -> PrimeFieldElement,
        binary: impl FnOnce(&BinaryFieldElement, &BinaryFieldElement) -> BinaryFieldElement,
    ) -> Self {
        match (self, rhs) {
            (Self::Prime(a), Self::Prime(b)) => Self::Prime(prime(a, b)),
            (Self::Binary(a), Self::Binary(b)) => Self::Binary(binary(a, b)),
            _ => panic!("arithmetic between prime and binary field elements"),
        }
    }
}

impl From<PrimeFieldElement> for FieldElement {
    fn from(fe: PrimeFieldElement) -> FieldElement {
        FieldElement::Prime(fe)
    }
}

impl From<BinaryFieldElement> for FieldElement {
    fn from(fe: BinaryFieldElement) -> FieldElement {
        FieldElement::Binary(fe)
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prime(fe) => fmt::LowerHex::fmt(fe, f),
            Self::Binary(fe) => fmt::LowerHex::fmt(fe, f),
        }
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prime(fe) => fmt::UpperHex::fmt(fe, f),
            Self::Binary(fe) => fmt::UpperHex::fmt(fe, f),
        }
    }
}

impl_field_ops!(FieldElement);
