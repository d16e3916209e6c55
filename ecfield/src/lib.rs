//! Finite field arithmetic for elliptic curve cryptography.
//!
//! Field elements live either in a prime field `Fp` or in a binary extension
//! field `F2^m` represented in polynomial basis, where the reduction
//! polynomial is a trinomial or a pentanomial. Unlike fixed-curve crates the
//! field parameters are chosen at runtime, so a single element type covers
//! every curve a protocol may negotiate.
//!
//! The [`FieldElement`] enum dispatches over the two concrete element types,
//! [`PrimeFieldElement`] and [`BinaryFieldElement`], which may also be used
//! directly when the field kind is known statically.
//!
//! # Field compatibility
//!
//! Arithmetic assumes both operands belong to the same field. Checking the
//! field parameters on every operation is skipped; callers operating on
//! untrusted inputs should validate with
//! [`FieldElement::check_field_elements`] before doing arithmetic.
//!
//! # ⚠️ Security Warning
//!
//! Values are stored as arbitrary-precision integers and all operations run
//! in variable time.
//!
//! ## Usage
//!
//! ```
//! use ecfield::{Field, num_bigint::BigUint};
//!
//! // F2^8 with f(z) = z^8 + z^4 + z^3 + z + 1
//! let field = Field::pentanomial(8, 1, 3, 4)?;
//! let a = field.element(BigUint::from(0x57u8))?;
//! let b = field.element(BigUint::from(0x83u8))?;
//! assert_eq!((&a * &b).to_canonical(), BigUint::from(0xc1u8));
//! # Ok::<(), ecfield::Error>(())
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

#[macro_use]
mod macros;

pub mod binary;
pub mod encoding;
pub mod error;
pub mod prime;

mod field;

pub use crate::{
    binary::{Basis, BinaryField, BinaryFieldElement},
    error::{Error, Result},
    field::{Field, FieldElement},
    prime::{PrimeField, PrimeFieldElement},
};
pub use num_bigint;
pub use rand_core;
