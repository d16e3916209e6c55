//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use super::PrimeFieldElement;
use crate::{Error, Result};
use num_bigint::BigUint;
use num_traits::One;

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub(super) enum Algorithm {
    /// Atkin's algorithm for `q ≡ 5 (mod 8)`.
    Atkin,

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    #[default]
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    pub(super) fn for_modulus(p: &BigUint) -> Self {
        if mod_residue(p, 4) == 3 {
            Self::Shanks
        } else if mod_residue(p, 8) == 5 {
            Self::Atkin
        } else {
            Self::TonelliShanks
        }
    }
}

impl PrimeFieldElement {
    /// Returns the square root of `self` mod p.
    ///
    /// Returns [`Error::NoSquareRoot`] if `self` is a quadratic non-residue.
    ///
    /// **This operation is variable time.**
    pub fn sqrt(&self) -> Result<Self> {
        let root = match self.field.sqrt {
            Algorithm::Atkin => self.sqrt_atkin(),
            Algorithm::Shanks => self.sqrt_shanks(),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks()?,
        };

        if root.square() == *self {
            Ok(root)
        } else {
            Err(Error::NoSquareRoot)
        }
    }

    /// Is this element a square (including zero)? Evaluates Euler's criterion.
    pub fn is_square(&self) -> bool {
        if self.is_zero() {
            return true;
        }

        let exp = (self.field.modulus() - BigUint::one()) >> 1u32;
        self.pow(&exp).is_one()
    }

    /// Atkin's algorithm for `q ≡ 5 (mod 8)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
    fn sqrt_atkin(&self) -> Self {
        debug_assert_eq!(mod_residue(self.field.modulus(), 8), 5);

        let mod_minus_5_over_8 = (self.field.modulus() - BigUint::from(5u8)) >> 3u32;

        let one = Self::one(self.field.clone());
        let two = Self::from_u64(self.field.clone(), 2);
        let t = two.pow(&mod_minus_5_over_8);
        let a1 = self.pow(&mod_minus_5_over_8);
        let b = &t * &a1;
        let ab = self * &b;
        let i = &(&two * &ab) * &b;
        &ab * &(&i - &one)
    }

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    ///
    /// For `q = 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `self^((q + 1) / 4) (mod q)`.
    fn sqrt_shanks(&self) -> Self {
        debug_assert_eq!(mod_residue(self.field.modulus(), 4), 3);

        let mod_plus_1_over_4 = (self.field.modulus() + BigUint::one()) >> 2u32;
        self.pow(&mod_plus_1_over_4)
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    fn sqrt_tonelli_shanks(&self) -> Result<Self> {
        if self.is_zero() {
            return Ok(self.clone());
        }

        if !self.is_square() {
            return Err(Error::NoSquareRoot);
        }

        // p - 1 = t * 2^s with t odd
        let p_minus_1 = self.field.modulus() - BigUint::one();
        let s = p_minus_1.trailing_zeros().unwrap_or(0);
        let t = &p_minus_1 >> s;

        let mut n = 2u64;
        let non_residue = loop {
            let candidate = Self::from_u64(self.field.clone(), n);
            if !candidate.is_square() {
                break candidate;
            }
            n += 1;
        };

        let mut v = s;
        let mut z = non_residue.pow(&t);
        let mut b = self.pow(&t);
        let mut x = self.pow(&((t + BigUint::one()) >> 1u32));

        while !b.is_one() {
            let mut k = 0;
            let mut b2k = b.clone();
            while !b2k.is_one() {
                b2k = b2k.square();
                k += 1;
            }

            if k >= v {
                return Err(Error::NoSquareRoot);
            }

            let w = z.sqn(v - k - 1);
            z = w.square();
            b = &b * &z;
            x = &x * &w;
            v = k;
        }

        Ok(x)
    }
}

/// Compute residue classes of the modulus for selecting particular square root algorithms.
fn mod_residue(p: &BigUint, n: u32) -> u32 {
    p.to_u32_digits().first().copied().unwrap_or(0) % n
}
