//! Key agreement credentials for TLS.
//!
//! [`AgreementCredentials`] binds a certificate chain and a private key to the
//! agreement algorithm of the key's family: finite field Diffie-Hellman for
//! [`DhPrivateKey`], Elliptic Curve Diffie-Hellman for [`EcPrivateKey`]. The
//! shared secret is returned as the unsigned big-endian encoding of the agreed
//! value.
//!
//! Domain parameters are supplied at runtime: DH groups over any odd prime
//! modulus, and elliptic curves over prime fields or binary fields in
//! polynomial basis (see [`ecfield`]).
//!
//! # ⚠️ Security Warning
//!
//! All arithmetic is variable time.
//!
//! # Usage
//!
//! ```
//! use agreement::{
//!     AgreementCredentials, Certificate, DhParameters, DhPrivateKey, TlsAgreementCredentials,
//! };
//! use agreement::ecfield::num_bigint::BigUint;
//!
//! let params = DhParameters::new(BigUint::from(23u8), BigUint::from(5u8))?;
//! let alice = DhPrivateKey::new(params.clone(), &BigUint::from(6u8))?;
//! let bob = DhPrivateKey::new(params, &BigUint::from(15u8))?;
//!
//! let certificate = Certificate::new(vec![b"alice certificate".to_vec()]);
//! let mut credentials = AgreementCredentials::new(certificate, alice.into())?;
//!
//! let shared = credentials.generate_agreement(&bob.public_key()?.into())?;
//! assert_eq!(shared.raw_secret_bytes(), [0x02]);
//! # Ok::<(), agreement::Error>(())
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ec;
pub mod error;
pub mod key;

mod basic;
mod certificate;
mod credentials;
mod dh;
mod ecdh;

pub use crate::{
    basic::{AgreementStrategy, BasicAgreement},
    certificate::Certificate,
    credentials::{AgreementCredentials, SharedSecret, TlsAgreementCredentials, TlsCredentials},
    dh::DhBasicAgreement,
    ecdh::EcdhBasicAgreement,
    error::{Error, Result},
    key::{
        AsymmetricKey, DhParameters, DhPrivateKey, DhPublicKey, EcDomainParameters, EcPrivateKey,
        EcPublicKey, OpaqueKey,
    },
};
pub use ecfield;
