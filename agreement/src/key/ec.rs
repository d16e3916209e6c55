//! Elliptic curve keys.

use crate::{
    Error, Result,
    ec::{AffinePoint, Curve},
};
use alloc::vec::Vec;
use core::fmt;
use ecfield::{encoding, num_bigint::BigUint};
use num_traits::{One, Zero};
use rand_core::CryptoRng;
use zeroize::Zeroizing;

/// Elliptic curve domain parameters: a curve, a base point `G` of prime
/// order `n`, and the cofactor `h`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EcDomainParameters {
    curve: Curve,
    generator: AffinePoint,
    order: BigUint,
    cofactor: BigUint,
}

impl EcDomainParameters {
    /// Create domain parameters.
    ///
    /// The generator must be a finite point on the curve with `[n] G` equal to
    /// the identity.
    pub fn new(
        curve: Curve,
        generator: AffinePoint,
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        if generator.is_identity() || !curve.is_on_curve(&generator) {
            return Err(Error::InvalidArgument {
                argument: "generator",
                reason: "must be a finite point on the curve",
            });
        }

        if order <= BigUint::one() {
            return Err(Error::InvalidArgument {
                argument: "order",
                reason: "must be larger than 1",
            });
        }

        if cofactor.is_zero() {
            return Err(Error::InvalidArgument {
                argument: "cofactor",
                reason: "must be nonzero",
            });
        }

        if !curve.multiply(&generator, &order)?.is_identity() {
            return Err(Error::InvalidArgument {
                argument: "order",
                reason: "is not the order of the generator",
            });
        }

        Ok(Self {
            curve,
            generator,
            order,
            cofactor,
        })
    }

    /// The curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }
}

/// Elliptic curve private key: a scalar `0 < d < n`.
#[derive(Clone)]
pub struct EcPrivateKey {
    domain: EcDomainParameters,
    d: Zeroizing<Vec<u8>>,
}

impl EcPrivateKey {
    /// Create a private key from a scalar.
    pub fn new(domain: EcDomainParameters, d: &BigUint) -> Result<Self> {
        if d.is_zero() || d >= &domain.order {
            return Err(Error::InvalidArgument {
                argument: "d",
                reason: "private scalar out of range",
            });
        }

        Ok(Self {
            domain,
            d: Zeroizing::new(encoding::to_unsigned_bytes(d)),
        })
    }

    /// Generate a random private key.
    pub fn generate<R: CryptoRng + ?Sized>(domain: EcDomainParameters, rng: &mut R) -> Self {
        let bound = &domain.order - BigUint::one();
        let d = encoding::random_below(&bound, rng) + BigUint::one();

        Self {
            domain,
            d: Zeroizing::new(encoding::to_unsigned_bytes(&d)),
        }
    }

    /// Domain parameters.
    pub fn domain(&self) -> &EcDomainParameters {
        &self.domain
    }

    /// Corresponding public key `Q = [d] G`.
    pub fn public_key(&self) -> Result<EcPublicKey> {
        let q = self
            .domain
            .curve
            .multiply(&self.domain.generator, &self.scalar())?;

        EcPublicKey::new(self.domain.clone(), q)
    }

    pub(crate) fn scalar(&self) -> BigUint {
        encoding::from_unsigned_bytes(&self.d)
    }
}

impl fmt::Debug for EcPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPrivateKey")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

/// Elliptic curve public key: a finite point `Q` on the curve.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EcPublicKey {
    domain: EcDomainParameters,
    q: AffinePoint,
}

impl EcPublicKey {
    /// Create a public key, checking the point is finite and on the curve.
    pub fn new(domain: EcDomainParameters, q: AffinePoint) -> Result<Self> {
        if q.is_identity() {
            return Err(Error::PointAtInfinity);
        }

        if !domain.curve.is_on_curve(&q) {
            return Err(Error::InvalidPoint);
        }

        Ok(Self { domain, q })
    }

    /// Decode a public key from a SEC1 encoded point.
    pub fn from_sec1_bytes(domain: EcDomainParameters, bytes: &[u8]) -> Result<Self> {
        let q = domain.curve.decode_point(bytes)?;
        Self::new(domain, q)
    }

    /// Encode the public key as a SEC1 point.
    pub fn to_sec1_bytes(&self, compress: bool) -> Result<Vec<u8>> {
        self.domain.curve.encode_point(&self.q, compress)
    }

    /// Domain parameters.
    pub fn domain(&self) -> &EcDomainParameters {
        &self.domain
    }

    /// Public point `Q`.
    pub fn q(&self) -> &AffinePoint {
        &self.q
    }
}
