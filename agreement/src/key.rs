//! Asymmetric keys.
//!
//! Key families are a closed set: finite field Diffie-Hellman and elliptic
//! curve keys have agreement strategies. Any other family is represented by
//! an [`OpaqueKey`], which carries only enough to identify it.

mod dh;
mod ec;

pub use self::{
    dh::{DhParameters, DhPrivateKey, DhPublicKey},
    ec::{EcDomainParameters, EcPrivateKey, EcPublicKey},
};

/// Key of a family with no agreement strategy, e.g. RSA or DSA.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct OpaqueKey {
    algorithm: &'static str,
    private: bool,
}

impl OpaqueKey {
    /// Create an opaque key of the named algorithm.
    pub fn new(algorithm: &'static str, private: bool) -> Self {
        Self { algorithm, private }
    }

    /// Algorithm name.
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Is this a private key?
    pub fn is_private(&self) -> bool {
        self.private
    }
}

/// Public or private key of any family.
#[derive(Clone, Debug)]
pub enum AsymmetricKey {
    /// Diffie-Hellman private key.
    DhPrivate(DhPrivateKey),

    /// Diffie-Hellman public key.
    DhPublic(DhPublicKey),

    /// Elliptic curve private key.
    EcPrivate(EcPrivateKey),

    /// Elliptic curve public key.
    EcPublic(EcPublicKey),

    /// Key of a family with no agreement strategy.
    Opaque(OpaqueKey),
}

impl AsymmetricKey {
    /// Is this a private key?
    pub fn is_private(&self) -> bool {
        match self {
            Self::DhPrivate(_) | Self::EcPrivate(_) => true,
            Self::DhPublic(_) | Self::EcPublic(_) => false,
            Self::Opaque(key) => key.is_private(),
        }
    }

    /// Name of the concrete key type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::DhPrivate(_) => "DhPrivateKey",
            Self::DhPublic(_) => "DhPublicKey",
            Self::EcPrivate(_) => "EcPrivateKey",
            Self::EcPublic(_) => "EcPublicKey",
            Self::Opaque(key) => key.algorithm(),
        }
    }
}

impl From<DhPrivateKey> for AsymmetricKey {
    fn from(key: DhPrivateKey) -> AsymmetricKey {
        AsymmetricKey::DhPrivate(key)
    }
}

impl From<DhPublicKey> for AsymmetricKey {
    fn from(key: DhPublicKey) -> AsymmetricKey {
        AsymmetricKey::DhPublic(key)
    }
}

impl From<EcPrivateKey> for AsymmetricKey {
    fn from(key: EcPrivateKey) -> AsymmetricKey {
        AsymmetricKey::EcPrivate(key)
    }
}

impl From<EcPublicKey> for AsymmetricKey {
    fn from(key: EcPublicKey) -> AsymmetricKey {
        AsymmetricKey::EcPublic(key)
    }
}

impl From<OpaqueKey> for AsymmetricKey {
    fn from(key: OpaqueKey) -> AsymmetricKey {
        AsymmetricKey::Opaque(key)
    }
}
