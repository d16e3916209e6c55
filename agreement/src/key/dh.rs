//! Finite field Diffie-Hellman keys.

use crate::{Error, Result};
use alloc::{sync::Arc, vec::Vec};
use core::fmt;
use ecfield::{PrimeField, PrimeFieldElement, encoding, num_bigint::BigUint};
use num_traits::{One, Zero};
use rand_core::CryptoRng;
use zeroize::Zeroizing;

/// Diffie-Hellman group parameters: prime modulus `p`, generator `g` and,
/// when known, the order `q` of the subgroup generated by `g`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DhParameters {
    field: Arc<PrimeField>,
    g: BigUint,
    q: Option<BigUint>,
}

impl DhParameters {
    /// Parameters without a known subgroup order.
    pub fn new(p: BigUint, g: BigUint) -> Result<Self> {
        let field = Arc::new(PrimeField::new(p)?);
        let p_minus_1 = field.modulus() - BigUint::one();

        if g <= BigUint::one() || g >= p_minus_1 {
            return Err(Error::InvalidArgument {
                argument: "g",
                reason: "must satisfy 1 < g < p - 1",
            });
        }

        Ok(Self { field, g, q: None })
    }

    /// Parameters where `g` generates a subgroup of order `q`.
    pub fn with_order(p: BigUint, g: BigUint, q: BigUint) -> Result<Self> {
        let mut params = Self::new(p, g)?;

        if q <= BigUint::one() || &q >= params.p() {
            return Err(Error::InvalidArgument {
                argument: "q",
                reason: "must satisfy 1 < q < p",
            });
        }

        params.q = Some(q);
        Ok(params)
    }

    /// Prime modulus `p`.
    pub fn p(&self) -> &BigUint {
        self.field.modulus()
    }

    /// Generator `g`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Subgroup order `q`, if known.
    pub fn q(&self) -> Option<&BigUint> {
        self.q.as_ref()
    }

    /// The field `Fp`.
    pub fn field(&self) -> &Arc<PrimeField> {
        &self.field
    }

    /// Exclusive upper bound on private exponents: `q` if known, else `p - 1`.
    fn exponent_bound(&self) -> BigUint {
        match &self.q {
            Some(q) => q.clone(),
            None => self.p() - BigUint::one(),
        }
    }

    /// `g^x mod p`
    fn exp_generator(&self, x: &BigUint) -> BigUint {
        PrimeFieldElement::from_uint_reduced(Arc::clone(&self.field), &self.g)
            .pow(x)
            .to_canonical()
    }
}

/// Diffie-Hellman private key: an exponent `0 < x < q` (or `x < p - 1`).
#[derive(Clone)]
pub struct DhPrivateKey {
    params: DhParameters,
    x: Zeroizing<Vec<u8>>,
}

impl DhPrivateKey {
    /// Create a private key from an exponent.
    pub fn new(params: DhParameters, x: &BigUint) -> Result<Self> {
        if x.is_zero() || x >= &params.exponent_bound() {
            return Err(Error::InvalidArgument {
                argument: "x",
                reason: "private exponent out of range",
            });
        }

        Ok(Self {
            params,
            x: Zeroizing::new(encoding::to_unsigned_bytes(x)),
        })
    }

    /// Generate a random private key.
    pub fn generate<R: CryptoRng + ?Sized>(params: DhParameters, rng: &mut R) -> Self {
        let bound = params.exponent_bound() - BigUint::one();
        let x = encoding::random_below(&bound, rng) + BigUint::one();

        Self {
            params,
            x: Zeroizing::new(encoding::to_unsigned_bytes(&x)),
        }
    }

    /// Group parameters.
    pub fn params(&self) -> &DhParameters {
        &self.params
    }

    /// Corresponding public key `y = g^x mod p`.
    pub fn public_key(&self) -> Result<DhPublicKey> {
        let y = self.params.exp_generator(&self.exponent());
        DhPublicKey::new(self.params.clone(), y)
    }

    pub(crate) fn exponent(&self) -> BigUint {
        encoding::from_unsigned_bytes(&self.x)
    }
}

impl fmt::Debug for DhPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DhPrivateKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Diffie-Hellman public key: `1 < y < p - 1`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DhPublicKey {
    params: DhParameters,
    y: BigUint,
}

impl DhPublicKey {
    /// Create a public key, rejecting the degenerate values `0`, `1` and `p - 1`.
    pub fn new(params: DhParameters, y: BigUint) -> Result<Self> {
        if y <= BigUint::one() || y >= params.p() - BigUint::one() {
            return Err(Error::InvalidArgument {
                argument: "y",
                reason: "must satisfy 1 < y < p - 1",
            });
        }

        Ok(Self { params, y })
    }

    /// Group parameters.
    pub fn params(&self) -> &DhParameters {
        &self.params
    }

    /// Public value `y`.
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

#[cfg(test)]
mod tests {
    use super::{DhParameters, DhPrivateKey, DhPublicKey};
    use crate::Error;
    use alloc::format;
    use ecfield::num_bigint::BigUint;
    use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};

    fn toy() -> DhParameters {
        DhParameters::new(BigUint::from(23u8), BigUint::from(5u8)).unwrap()
    }

    #[test]
    fn parameter_validation() {
        for g in [0u8, 1, 22, 23] {
            assert!(matches!(
                DhParameters::new(BigUint::from(23u8), BigUint::from(g)),
                Err(Error::InvalidArgument { argument: "g", .. })
            ));
        }

        assert!(matches!(
            DhParameters::new(BigUint::from(24u8), BigUint::from(5u8)),
            Err(Error::Field(_))
        ));

        // 2 generates the subgroup of order 11
        let params =
            DhParameters::with_order(BigUint::from(23u8), BigUint::from(2u8), BigUint::from(11u8))
                .unwrap();
        assert_eq!(params.q(), Some(&BigUint::from(11u8)));
        assert!(DhPrivateKey::new(params.clone(), &BigUint::from(10u8)).is_ok());
        assert!(DhPrivateKey::new(params, &BigUint::from(11u8)).is_err());
    }

    #[test]
    fn public_key() {
        let sk = DhPrivateKey::new(toy(), &BigUint::from(6u8)).unwrap();
        // 5^6 = 15625 = 8 mod 23
        assert_eq!(sk.public_key().unwrap().y(), &BigUint::from(8u8));
    }

    #[test]
    fn rejects_degenerate_values() {
        for x in [0u8, 22, 23] {
            assert!(DhPrivateKey::new(toy(), &BigUint::from(x)).is_err());
        }

        for y in [0u8, 1, 22, 23] {
            assert!(DhPublicKey::new(toy(), BigUint::from(y)).is_err());
        }
    }

    #[test]
    fn generated_keys_are_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(23);

        for _ in 0..64 {
            let x = DhPrivateKey::generate(toy(), &mut rng).exponent();
            assert!(x >= BigUint::from(1u8) && x < BigUint::from(22u8));
        }
    }

    #[test]
    fn debug_omits_exponent() {
        let sk = DhPrivateKey::new(toy(), &BigUint::from(6u8)).unwrap();
        assert!(!format!("{:?}", sk).contains("x:"));
    }
}
