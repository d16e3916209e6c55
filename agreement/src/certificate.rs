//! Certificate chains.

use alloc::vec::Vec;

/// Chain of DER-encoded certificates, end-entity certificate first.
///
/// The certificates are not parsed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Certificate {
    chain: Vec<Vec<u8>>,
}

impl Certificate {
    /// Create a certificate chain.
    pub fn new(chain: Vec<Vec<u8>>) -> Self {
        Self { chain }
    }

    /// Empty certificate chain.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Is the chain empty?
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Number of certificates in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// DER encodings of the certificates.
    pub fn chain(&self) -> &[Vec<u8>] {
        &self.chain
    }
}

impl From<Vec<Vec<u8>>> for Certificate {
    fn from(chain: Vec<Vec<u8>>) -> Certificate {
        Certificate::new(chain)
    }
}
