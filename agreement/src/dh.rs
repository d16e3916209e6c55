//! Finite field Diffie-Hellman agreement.
//!
//! The shared value is `y^x mod p` for the peer's public value `y` and the
//! local private exponent `x`.

use crate::{AsymmetricKey, BasicAgreement, DhPrivateKey, Error, Result};
use alloc::sync::Arc;
use ecfield::{PrimeFieldElement, num_bigint::BigUint};

/// Diffie-Hellman [`BasicAgreement`].
#[derive(Clone, Debug, Default)]
pub struct DhBasicAgreement {
    key: Option<DhPrivateKey>,
}

impl DhBasicAgreement {
    /// Create an uninitialized agreement.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BasicAgreement for DhBasicAgreement {
    fn init(&mut self, private_key: &AsymmetricKey) -> Result<()> {
        match private_key {
            AsymmetricKey::DhPrivate(key) => {
                self.key = Some(key.clone());
                Ok(())
            }
            _ => Err(Error::KeyMismatch),
        }
    }

    fn calculate_agreement(&self, peer_public_key: &AsymmetricKey) -> Result<BigUint> {
        let key = self.key.as_ref().ok_or(Error::NotInitialized)?;

        let AsymmetricKey::DhPublic(peer) = peer_public_key else {
            return Err(Error::KeyMismatch);
        };

        if peer.params() != key.params() {
            return Err(Error::DomainMismatch);
        }

        let y = PrimeFieldElement::new(Arc::clone(key.params().field()), peer.y().clone())?;
        let shared = y.pow(&key.exponent());

        if shared.is_one() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(shared.to_canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::DhBasicAgreement;
    use crate::{
        AsymmetricKey, BasicAgreement, DhParameters, DhPrivateKey, DhPublicKey, Error, OpaqueKey,
    };
    use ecfield::num_bigint::BigUint;

    fn toy() -> DhParameters {
        DhParameters::new(BigUint::from(23u8), BigUint::from(5u8)).unwrap()
    }

    fn private_key(params: DhParameters, x: u8) -> AsymmetricKey {
        DhPrivateKey::new(params, &BigUint::from(x)).unwrap().into()
    }

    fn public_key(params: DhParameters, y: u8) -> AsymmetricKey {
        DhPublicKey::new(params, BigUint::from(y)).unwrap().into()
    }

    #[test]
    fn toy_agreement() {
        // 5^6 = 8, 5^15 = 19, 8^15 = 19^6 = 2 (mod 23)
        let mut agreement = DhBasicAgreement::new();
        agreement.init(&private_key(toy(), 6)).unwrap();
        assert_eq!(
            agreement.calculate_agreement(&public_key(toy(), 19)).unwrap(),
            BigUint::from(2u8)
        );

        agreement.init(&private_key(toy(), 15)).unwrap();
        assert_eq!(
            agreement.calculate_agreement(&public_key(toy(), 8)).unwrap(),
            BigUint::from(2u8)
        );
    }

    #[test]
    fn not_initialized() {
        assert_eq!(
            DhBasicAgreement::new().calculate_agreement(&public_key(toy(), 8)),
            Err(Error::NotInitialized)
        );
    }

    #[test]
    fn key_mismatch() {
        let mut agreement = DhBasicAgreement::new();
        assert_eq!(agreement.init(&public_key(toy(), 8)), Err(Error::KeyMismatch));
        assert_eq!(
            agreement.init(&OpaqueKey::new("DsaPrivateKey", true).into()),
            Err(Error::KeyMismatch)
        );

        agreement.init(&private_key(toy(), 6)).unwrap();
        assert_eq!(
            agreement.calculate_agreement(&private_key(toy(), 15)),
            Err(Error::KeyMismatch)
        );
    }

    #[test]
    fn domain_mismatch() {
        let other = DhParameters::new(BigUint::from(23u8), BigUint::from(7u8)).unwrap();
        let mut agreement = DhBasicAgreement::new();
        agreement.init(&private_key(toy(), 6)).unwrap();
        assert_eq!(
            agreement.calculate_agreement(&public_key(other, 8)),
            Err(Error::DomainMismatch)
        );
    }

    #[test]
    fn rejects_small_subgroup_result() {
        // 2 has order 11 mod 23, so 2^11 = 1
        let mut agreement = DhBasicAgreement::new();
        agreement.init(&private_key(toy(), 11)).unwrap();
        assert_eq!(
            agreement.calculate_agreement(&public_key(toy(), 2)),
            Err(Error::InvalidPublicKey)
        );
    }
}
