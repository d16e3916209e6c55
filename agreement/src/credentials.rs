//! TLS agreement credentials.

use crate::{AgreementStrategy, AsymmetricKey, BasicAgreement, Certificate, Error, Result};
use alloc::vec::Vec;
use core::fmt;
use ecfield::encoding;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

/// Credentials presented during a TLS handshake.
pub trait TlsCredentials {
    /// Certificate chain.
    fn certificate(&self) -> &Certificate;
}

/// Credentials which authenticate by key agreement.
pub trait TlsAgreementCredentials: TlsCredentials {
    /// Compute the shared secret with a peer's public key.
    fn generate_agreement(&mut self, peer_public_key: &AsymmetricKey) -> Result<SharedSecret>;
}

/// Shared secret value computed via key agreement.
///
/// The secret is the unsigned big-endian encoding of the agreed value, without
/// leading zeroes (zero encodes as a single `0x00` byte). It is zeroized on
/// drop.
#[derive(Clone)]
pub struct SharedSecret {
    secret_bytes: Zeroizing<Vec<u8>>,
}

impl SharedSecret {
    fn new(secret_bytes: Vec<u8>) -> Self {
        Self {
            secret_bytes: Zeroizing::new(secret_bytes),
        }
    }

    /// Shared secret value, serialized as bytes.
    ///
    /// This value is not uniformly random and should be used as input to a
    /// key derivation function.
    pub fn raw_secret_bytes(&self) -> &[u8] {
        &self.secret_bytes
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_bytes.as_slice().ct_eq(other.secret_bytes.as_slice())
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

/// Certificate and private key bound to the agreement strategy of the key's
/// family.
#[derive(Clone, Debug)]
pub struct AgreementCredentials {
    certificate: Certificate,
    private_key: AsymmetricKey,
    strategy: AgreementStrategy,
}

impl AgreementCredentials {
    /// Create credentials from a non-empty certificate chain and a private
    /// key.
    ///
    /// Fails if the key is not private, or if there is no agreement strategy
    /// for its family.
    pub fn new(certificate: Certificate, private_key: AsymmetricKey) -> Result<Self> {
        if certificate.is_empty() {
            return Err(Error::InvalidArgument {
                argument: "client_certificate",
                reason: "cannot be empty",
            });
        }

        if !private_key.is_private() {
            return Err(Error::InvalidArgument {
                argument: "client_private_key",
                reason: "must be private",
            });
        }

        let strategy = AgreementStrategy::for_private_key(&private_key).ok_or(
            Error::UnsupportedKeyType {
                argument: "client_private_key",
                type_name: private_key.type_name(),
            },
        )?;

        tracing::debug!(
            key_type = private_key.type_name(),
            algorithm = strategy.algorithm(),
            certificates = certificate.len(),
            "bound agreement strategy"
        );

        Ok(Self {
            certificate,
            private_key,
            strategy,
        })
    }

    /// Private key.
    pub fn private_key(&self) -> &AsymmetricKey {
        &self.private_key
    }

    /// Bound agreement strategy.
    pub fn strategy(&self) -> &AgreementStrategy {
        &self.strategy
    }
}

impl TlsCredentials for AgreementCredentials {
    fn certificate(&self) -> &Certificate {
        &self.certificate
    }
}

impl TlsAgreementCredentials for AgreementCredentials {
    fn generate_agreement(&mut self, peer_public_key: &AsymmetricKey) -> Result<SharedSecret> {
        self.strategy.init(&self.private_key)?;

        let value = self
            .strategy
            .calculate_agreement(peer_public_key)
            .inspect_err(|err| {
                tracing::trace!(algorithm = self.strategy.algorithm(), %err, "agreement failed");
            })?;

        tracing::trace!(algorithm = self.strategy.algorithm(), "agreement calculated");
        Ok(SharedSecret::new(encoding::to_unsigned_bytes(&value)))
    }
}
