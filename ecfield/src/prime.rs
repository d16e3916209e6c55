//! Prime field `Fp` arithmetic over a runtime-selected odd modulus.

mod sqrt;

use crate::{Error, Result, encoding};
use alloc::{sync::Arc, vec, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::RngCore;

/// Parameters of a prime field: the modulus `p`, plus values derived from it.
#[derive(Clone, Debug)]
pub struct PrimeField {
    modulus: BigUint,
    bits: u64,
    sqrt: sqrt::Algorithm,
}

impl PrimeField {
    /// Create a prime field with the given modulus.
    ///
    /// The modulus must be odd and at least 3. Primality is the caller's
    /// responsibility: it is not tested here.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(3u8) {
            return Err(Error::InvalidParameters("modulus must be at least 3"));
        }

        if !modulus.bit(0) {
            return Err(Error::InvalidParameters("modulus must be odd"));
        }

        Ok(Self {
            bits: modulus.bits(),
            sqrt: sqrt::Algorithm::for_modulus(&modulus),
            modulus,
        })
    }

    /// Field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Size of a serialized field element in bytes.
    pub fn byte_len(&self) -> usize {
        self.bits.div_ceil(8) as usize
    }
}

impl PartialEq for PrimeField {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }
}

impl Eq for PrimeField {}

impl Hash for PrimeField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.modulus.hash(state);
    }
}

/// Element of a prime field, stored as its canonical representative
/// `0 <= x < p`.
#[derive(Clone)]
pub struct PrimeFieldElement {
    field: Arc<PrimeField>,
    x: BigUint,
}

impl PrimeFieldElement {
    /// Create an element from a canonical value.
    ///
    /// Returns [`Error::NonCanonical`] if `x >= p`.
    pub fn new(field: Arc<PrimeField>, x: BigUint) -> Result<Self> {
        if x >= field.modulus {
            return Err(Error::NonCanonical);
        }

        Ok(Self { field, x })
    }

    /// Create an element from an arbitrary integer, reducing it modulo `p`.
    pub fn from_uint_reduced(field: Arc<PrimeField>, x: &BigUint) -> Self {
        let x = x % &field.modulus;
        Self { field, x }
    }

    /// Create an element from a `u64`, reducing it modulo `p`.
    pub fn from_u64(field: Arc<PrimeField>, w: u64) -> Self {
        Self::from_uint_reduced(field, &BigUint::from(w))
    }

    /// Additive identity.
    pub fn zero(field: Arc<PrimeField>) -> Self {
        Self {
            field,
            x: BigUint::zero(),
        }
    }

    /// Multiplicative identity.
    pub fn one(field: Arc<PrimeField>) -> Self {
        Self {
            field,
            x: BigUint::one(),
        }
    }

    /// Decode an element from its fixed-width big-endian encoding.
    pub fn from_bytes(field: Arc<PrimeField>, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != field.byte_len() {
            return Err(Error::InvalidLength);
        }

        Self::new(field, encoding::from_unsigned_bytes(bytes))
    }

    /// Sample a uniformly random element.
    pub fn random<R: RngCore + ?Sized>(field: Arc<PrimeField>, rng: &mut R) -> Self {
        let x = encoding::random_below(&field.modulus, rng);
        Self { field, x }
    }

    /// Checks that `a` and `b` are elements of the same prime field.
    pub fn check_field_elements(a: &Self, b: &Self) -> Result<()> {
        if a.same_field(b) {
            Ok(())
        } else {
            Err(Error::FieldMismatch)
        }
    }

    /// Field this element belongs to.
    pub fn field(&self) -> &Arc<PrimeField> {
        &self.field
    }

    /// Borrow the canonical value.
    pub fn as_canonical(&self) -> &BigUint {
        &self.x
    }

    /// Canonical value of this element as an integer in `[0, p)`.
    pub fn to_canonical(&self) -> BigUint {
        self.x.clone()
    }

    /// Fixed-width big-endian encoding, [`PrimeField::byte_len`] bytes long.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.field.byte_len();
        let bytes = self.x.to_bytes_be();
        let mut out = vec![0u8; len];
        out[len - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Is this the additive identity?
    pub fn is_zero(&self) -> bool {
        self.x.is_zero()
    }

    /// Is this the multiplicative identity?
    pub fn is_one(&self) -> bool {
        self.x.is_one()
    }

    /// Is the canonical value odd?
    pub fn is_odd(&self) -> bool {
        self.x.bit(0)
    }

    /// Add elements.
    pub fn add(&self, rhs: &Self) -> Self {
        self.debug_assert_same_field(rhs);

        let mut x = &self.x + &rhs.x;
        if x >= self.field.modulus {
            x -= &self.field.modulus;
        }

        self.with_value(x)
    }

    /// Subtract elements.
    pub fn subtract(&self, rhs: &Self) -> Self {
        self.debug_assert_same_field(rhs);

        let x = if self.x >= rhs.x {
            &self.x - &rhs.x
        } else {
            &self.field.modulus - &rhs.x + &self.x
        };

        self.with_value(x)
    }

    /// Multiply elements.
    pub fn multiply(&self, rhs: &Self) -> Self {
        self.debug_assert_same_field(rhs);
        self.with_value((&self.x * &rhs.x) % &self.field.modulus)
    }

    /// Divide elements: `self * rhs^-1`.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.multiply(&rhs.invert()?))
    }

    /// Negate element.
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        self.with_value(&self.field.modulus - &self.x)
    }

    /// Double element (add it to itself).
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Compute modular square.
    pub fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Returns `self^(2^n) mod p`.
    pub fn sqn(&self, n: u64) -> Self {
        let mut x = self.clone();
        for _ in 0..n {
            x = x.square();
        }
        x
    }

    /// Returns `self^exp mod p`.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    pub fn pow(&self, exp: &BigUint) -> Self {
        self.with_value(self.x.modpow(exp, &self.field.modulus))
    }

    /// Compute field inversion: `1 / self`, as `self^(p - 2) mod p`.
    ///
    /// Returns [`Error::ZeroInversion`] if `self` is zero.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::ZeroInversion);
        }

        let exp = &self.field.modulus - BigUint::from(2u8);
        Ok(self.pow(&exp))
    }

    fn with_value(&self, x: BigUint) -> Self {
        Self {
            field: Arc::clone(&self.field),
            x,
        }
    }

    fn same_field(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.field, &other.field) || self.field == other.field
    }

    // Field parameters are not compared in release builds.
    #[inline]
    fn debug_assert_same_field(&self, other: &Self) {
        debug_assert!(
            self.same_field(other),
            "field elements are not elements of the same field"
        );
    }
}

impl PartialEq for PrimeFieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other) && self.x == other.x
    }
}

impl Eq for PrimeFieldElement {}

impl Hash for PrimeFieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.x.hash(state);
    }
}

impl fmt::Debug for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimeFieldElement(0x{:x})", self.x)
    }
}

impl fmt::LowerHex for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.x, f)
    }
}

impl fmt::UpperHex for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.x, f)
    }
}

impl_field_ops!(PrimeFieldElement);
