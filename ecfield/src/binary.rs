//! Binary extension field `F2^m` arithmetic in polynomial basis.
//!
//! An element is a polynomial `a(z) = Σ a_i z^i` over GF(2) of degree less
//! than `m`, stored as the bit vector of its coefficients. Arithmetic is
//! performed modulo an irreducible reduction polynomial `f(z)` which is either
//! a trinomial `z^m + z^k + 1` or a pentanomial
//! `z^m + z^k3 + z^k2 + z^k1 + 1`. Gaussian normal basis representation is
//! not supported.

use crate::{Error, Result, encoding};
use alloc::{sync::Arc, vec, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
    mem,
};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::RngCore;

/// Polynomial basis representation of `F2^m`.
///
/// Discriminants are the basis codes assigned by ANSI X9.62.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Basis {
    /// Trinomial basis: `f(z) = z^m + z^k + 1`.
    Trinomial = 2,

    /// Pentanomial basis: `f(z) = z^m + z^k3 + z^k2 + z^k1 + 1`.
    Pentanomial = 3,
}

/// Parameters of a binary extension field `F2^m`.
///
/// For the trinomial basis `k2` and `k3` are always zero.
#[derive(Clone, Debug)]
pub struct BinaryField {
    m: u32,
    k1: u32,
    k2: u32,
    k3: u32,
    basis: Basis,

    /// Reduction polynomial `f(z)`.
    f: BigUint,
}

impl BinaryField {
    /// Field with trinomial reduction polynomial `z^m + z^k + 1`.
    pub fn trinomial(m: u32, k: u32) -> Result<Self> {
        if k == 0 || k >= m {
            return Err(Error::InvalidParameters("k must satisfy 0 < k < m"));
        }

        Ok(Self::with_terms(m, k, 0, 0, Basis::Trinomial))
    }

    /// Field with pentanomial reduction polynomial
    /// `z^m + z^k3 + z^k2 + z^k1 + 1`.
    pub fn pentanomial(m: u32, k1: u32, k2: u32, k3: u32) -> Result<Self> {
        if k1 == 0 {
            return Err(Error::InvalidParameters("k1 must be larger than 0"));
        }

        if k1 >= k2 || k2 >= k3 {
            return Err(Error::InvalidParameters("must satisfy k1 < k2 < k3"));
        }

        if k3 >= m {
            return Err(Error::InvalidParameters("k3 must be smaller than m"));
        }

        Ok(Self::with_terms(m, k1, k2, k3, Basis::Pentanomial))
    }

    fn with_terms(m: u32, k1: u32, k2: u32, k3: u32, basis: Basis) -> Self {
        let mut f = BigUint::one();
        f.set_bit(u64::from(m), true);
        f.set_bit(u64::from(k1), true);

        if basis == Basis::Pentanomial {
            f.set_bit(u64::from(k2), true);
            f.set_bit(u64::from(k3), true);
        }

        Self {
            m,
            k1,
            k2,
            k3,
            basis,
            f,
        }
    }

    /// Extension degree `m`.
    pub fn m(&self) -> u32 {
        self.m
    }

    /// Trinomial: `k`. Pentanomial: `k1`.
    pub fn k1(&self) -> u32 {
        self.k1
    }

    /// Trinomial: always `0`. Pentanomial: `k2`.
    pub fn k2(&self) -> u32 {
        self.k2
    }

    /// Trinomial: always `0`. Pentanomial: `k3`.
    pub fn k3(&self) -> u32 {
        self.k3
    }

    /// Trinomial or pentanomial basis.
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Reduction polynomial `f(z)` as a bit vector.
    pub fn reduction_polynomial(&self) -> &BigUint {
        &self.f
    }

    /// Bit length of a field element.
    pub fn bits(&self) -> u64 {
        u64::from(self.m)
    }

    /// Size of a serialized field element in bytes.
    pub fn byte_len(&self) -> usize {
        self.bits().div_ceil(8) as usize
    }

    /// Computes `z * a(z) mod f(z)`.
    fn mult_z_mod_f(&self, a: BigUint) -> BigUint {
        let mut az = a << 1u32;

        // Coefficient of z^m is set: add f(z), clearing it
        if az.bit(self.bits()) {
            az ^= &self.f;
        }

        az
    }

    /// Reduce a polynomial of arbitrary degree modulo `f(z)`.
    fn reduce(&self, mut c: BigUint) -> BigUint {
        let m = self.bits();

        while c.bits() > m {
            let shift = c.bits() - 1 - m;
            c ^= &self.f << shift;
        }

        c
    }
}

impl PartialEq for BinaryField {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m && self.k1 == other.k1 && self.k2 == other.k2 && self.k3 == other.k3
    }
}

impl Eq for BinaryField {}

impl Hash for BinaryField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.m, self.k1, self.k2, self.k3).hash(state);
    }
}

/// Element of `F2^m` in polynomial basis. The bit vector `x` never has a bit
/// set at position `m` or above.
#[derive(Clone)]
pub struct BinaryFieldElement {
    field: Arc<BinaryField>,
    x: BigUint,
}

impl BinaryFieldElement {
    /// Create an element from a reduced bit vector.
    ///
    /// Returns [`Error::NonCanonical`] if `x` has bits set at position `m` or above.
    pub fn new(field: Arc<BinaryField>, x: BigUint) -> Result<Self> {
        if x.bits() > field.bits() {
            return Err(Error::NonCanonical);
        }

        Ok(Self { field, x })
    }

    /// Create an element from a polynomial of arbitrary degree, reducing it
    /// modulo `f(z)`.
    pub fn from_uint_reduced(field: Arc<BinaryField>, x: &BigUint) -> Self {
        let x = field.reduce(x.clone());
        Self { field, x }
    }

    /// Additive identity.
    pub fn zero(field: Arc<BinaryField>) -> Self {
        Self {
            field,
            x: BigUint::zero(),
        }
    }

    /// Multiplicative identity.
    pub fn one(field: Arc<BinaryField>) -> Self {
        Self {
            field,
            x: BigUint::one(),
        }
    }

    /// Decode an element from its fixed-width big-endian encoding.
    pub fn from_bytes(field: Arc<BinaryField>, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != field.byte_len() {
            return Err(Error::InvalidLength);
        }

        Self::new(field, encoding::from_unsigned_bytes(bytes))
    }

    /// Sample a uniformly random element.
    pub fn random<R: RngCore + ?Sized>(field: Arc<BinaryField>, rng: &mut R) -> Self {
        let mut bound = BigUint::zero();
        bound.set_bit(field.bits(), true);

        let x = encoding::random_below(&bound, rng);
        Self { field, x }
    }

    /// Checks that `a` and `b` are elements of the same field `F2^m`, having
    /// the same representation.
    ///
    /// Arithmetic does not perform this check itself. Callers operating on
    /// untrusted inputs should invoke it first.
    pub fn check_field_elements(a: &Self, b: &Self) -> Result<()> {
        if a.same_field(b) && a.field.basis == b.field.basis {
            Ok(())
        } else {
            Err(Error::FieldMismatch)
        }
    }

    /// Field this element belongs to.
    pub fn field(&self) -> &Arc<BinaryField> {
        &self.field
    }

    /// Borrow the bit vector.
    pub fn as_canonical(&self) -> &BigUint {
        &self.x
    }

    /// Bit vector of this element reinterpreted as an integer.
    pub fn to_canonical(&self) -> BigUint {
        self.x.clone()
    }

    /// Fixed-width big-endian encoding, [`BinaryField::byte_len`] bytes long.
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

    /// Coefficient of `z^i`.
    pub fn test_bit(&self, i: u64) -> bool {
        self.x.bit(i)
    }

    /// Add elements: bitwise XOR.
    pub fn add(&self, rhs: &Self) -> Self {
        self.debug_assert_same_field(rhs);

        if rhs.is_zero() {
            return self.clone();
        }

        self.with_value(&self.x ^ &rhs.x)
    }

    /// Subtract elements. Identical to addition in characteristic 2.
    pub fn subtract(&self, rhs: &Self) -> Self {
        self.add(rhs)
    }

    /// Multiply elements.
    ///
    /// Left-to-right shift-and-add: for each coefficient `a_i` of `a(z)`,
    /// `b(z)` is advanced to `z^i * b(z) mod f(z)` and added to the running
    /// product when `a_i = 1`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        self.debug_assert_same_field(rhs);

        let az = &self.x;
        let mut bz = rhs.x.clone();
        let mut cz = if az.bit(0) {
            bz.clone()
        } else {
            BigUint::zero()
        };

        for i in 1..self.field.bits() {
            bz = self.field.mult_z_mod_f(bz);

            if az.bit(i) {
                cz ^= &bz;
            }
        }

        self.with_value(cz)
    }

    /// Divide elements: `self * rhs^-1`.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.multiply(&rhs.invert()?))
    }

    /// Negate element: `-x == x` holds for all `x` in `F2^m`.
    pub fn negate(&self) -> Self {
        self.clone()
    }

    /// Compute the square.
    ///
    /// Squaring is linear in characteristic 2: the coefficients are spread
    /// to the even positions and the result is reduced modulo `f(z)`.
    pub fn square(&self) -> Self {
        let digits = self
            .x
            .to_u32_digits()
            .into_iter()
            .flat_map(|digit| {
                let wide = spread_bits(digit);
                [wide as u32, (wide >> 32) as u32]
            })
            .collect::<Vec<u32>>();

        self.with_value(self.field.reduce(BigUint::new(digits)))
    }

    /// Returns `self^(2^n)`.
    pub fn sqn(&self, n: u64) -> Self {
        let mut x = self.clone();
        for _ in 0..n {
            x = x.square();
        }
        x
    }

    /// Compute field inversion: `1 / self`.
    ///
    /// Extended Euclidean algorithm over GF(2)[z]. Returns
    /// [`Error::ZeroInversion`] if `self` is zero.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::ZeroInversion);
        }

        let mut uz = self.x.clone();
        let mut vz = self.field.f.clone();
        let mut g1z = BigUint::one();
        let mut g2z = BigUint::zero();

        while !uz.is_zero() {
            let mut j = uz.bits() as i64 - vz.bits() as i64;

            if j < 0 {
                mem::swap(&mut uz, &mut vz);
                mem::swap(&mut g1z, &mut g2z);
                j = -j;
            }

            // deg(u + z^j * v) <= deg(u), so no reduction modulo f(z) is needed
            let j = j as u64;
            uz ^= &vz << j;
            g1z ^= &g2z << j;
        }

        Ok(self.with_value(self.field.reduce(g2z)))
    }

    /// Square root: `self^(2^(m-1))`.
    ///
    /// Squaring is a bijection on `F2^m`, so every element has exactly one
    /// square root and this never fails.
    pub fn sqrt(&self) -> Self {
        self.sqn(self.field.bits() - 1)
    }

    /// Absolute trace `Tr(a) = a + a^2 + a^4 + ... + a^(2^(m-1))`, which is
    /// always `0` or `1`.
    pub fn trace(&self) -> u8 {
        let mut t = self.clone();
        let mut sum = self.clone();

        for _ in 1..self.field.bits() {
            t = t.square();
            sum = sum.add(&t);
        }

        u8::from(sum.is_one())
    }

    /// Find `z` such that `z^2 + z = self`.
    ///
    /// The other solution is `z + 1`. Returns [`Error::NoSolution`] when
    /// `Tr(self) = 1`.
    pub fn solve_quadratic(&self) -> Result<Self> {
        if self.is_zero() {
            return Ok(self.clone());
        }

        let m = self.field.bits();
        let z = if m % 2 == 1 {
            self.half_trace()
        } else {
            // IEEE P1363 A.4.7, with tau drawn from the monomials z^i
            let tau = (0..m)
                .map(|i| {
                    let mut x = BigUint::zero();
                    x.set_bit(i, true);
                    self.with_value(x)
                })
                .find(|tau| tau.trace() == 1)
                .ok_or(Error::NoSolution)?;

            let mut z = Self::zero(Arc::clone(&self.field));
            let mut w = tau.clone();

            for _ in 1..m {
                let w2 = w.square();
                z = z.square().add(&w2.multiply(self));
                w = w2.add(&tau);
            }

            z
        };

        if z.square().add(&z) == *self {
            Ok(z)
        } else {
            Err(Error::NoSolution)
        }
    }

    /// Half-trace `H(a) = Σ a^(2^(2i))` for `i = 0..=(m-1)/2`. Only defined
    /// for odd `m`.
    fn half_trace(&self) -> Self {
        let mut t = self.clone();
        let mut sum = self.clone();

        for _ in 0..(self.field.bits() - 1) / 2 {
            t = t.sqn(2);
            sum = sum.add(&t);
        }

        sum
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
            "field elements are not elements of the same field F2m"
        );
    }
}

/// Interleave the bits of `x` with zeroes: bit `i` moves to bit `2i`.
const fn spread_bits(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
    x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

impl PartialEq for BinaryFieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other) && self.x == other.x
    }
}

impl Eq for BinaryFieldElement {}

impl Hash for BinaryFieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.x.hash(state);
    }
}

impl fmt::Debug for BinaryFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryFieldElement(0x{:x})", self.x)
    }
}

impl fmt::LowerHex for BinaryFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.x, f)
    }
}

impl fmt::UpperHex for BinaryFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.x, f)
    }
}

impl fmt::Binary for BinaryFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.x, f)
    }
}

impl_field_ops!(BinaryFieldElement);
