//! Basic key agreement: the raw shared value of a private and a public key.

use crate::{AsymmetricKey, DhBasicAgreement, EcdhBasicAgreement, Result};
use ecfield::num_bigint::BigUint;

/// A key agreement algorithm.
///
/// [`BasicAgreement::init`] binds a private key and may be called any number
/// of times, each call replacing the previous key.
pub trait BasicAgreement {
    /// Bind the private key used by subsequent agreements.
    fn init(&mut self, private_key: &AsymmetricKey) -> Result<()>;

    /// Compute the shared value with a peer's public key.
    fn calculate_agreement(&self, peer_public_key: &AsymmetricKey) -> Result<BigUint>;
}

/// Agreement strategy chosen by private key family.
#[derive(Clone, Debug)]
pub enum AgreementStrategy {
    /// Finite field Diffie-Hellman.
    Dh(DhBasicAgreement),

    /// Elliptic curve Diffie-Hellman.
    Ecdh(EcdhBasicAgreement),
}

impl AgreementStrategy {
    /// Select the strategy for a private key's family, or `None` if the family
    /// has no agreement strategy.
    pub fn for_private_key(private_key: &AsymmetricKey) -> Option<Self> {
        match private_key {
            AsymmetricKey::DhPrivate(_) => Some(Self::Dh(DhBasicAgreement::new())),
            AsymmetricKey::EcPrivate(_) => Some(Self::Ecdh(EcdhBasicAgreement::new())),
            _ => None,
        }
    }

    /// Name of the algorithm.
    pub fn algorithm(&self) -> &'static str {
        match self {
            Self::Dh(_) => "DH",
            Self::Ecdh(_) => "ECDH",
        }
    }
}

impl BasicAgreement for AgreementStrategy {
    fn init(&mut self, private_key: &AsymmetricKey) -> Result<()> {
        match self {
            Self::Dh(agreement) => agreement.init(private_key),
            Self::Ecdh(agreement) => agreement.init(private_key),
        }
    }

    fn calculate_agreement(&self, peer_public_key: &AsymmetricKey) -> Result<BigUint> {
        match self {
            Self::Dh(agreement) => agreement.calculate_agreement(peer_public_key),
            Self::Ecdh(agreement) => agreement.calculate_agreement(peer_public_key),
        }
    }
}
