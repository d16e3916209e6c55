//! Conversions between canonical integers and bytestrings.
//!
//! All encodings are unsigned and big-endian: field values are never
//! negative, so no sign byte is ever emitted or expected.

use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::RngCore;

/// Encode `x` as an unsigned big-endian bytestring of minimal length.
///
/// Zero encodes as the single byte `0x00`.
pub fn to_unsigned_bytes(x: &BigUint) -> Vec<u8> {
    x.to_bytes_be()
}

/// Encode `x` as an unsigned big-endian bytestring left-padded with zeroes
/// to exactly `len` bytes.
///
/// Returns [`Error::InvalidLength`] if `x` does not fit.
pub fn to_fixed_bytes(x: &BigUint, len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; len];

    if x.is_zero() {
        return Ok(out);
    }

    let bytes = x.to_bytes_be();
    if bytes.len() > len {
        return Err(Error::InvalidLength);
    }

    out[len - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Decode an unsigned big-endian bytestring. The empty slice decodes to zero.
pub fn from_unsigned_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Sample an integer uniformly from `[0, bound)` by rejection sampling.
///
/// Returns zero when `bound` is zero or one.
pub fn random_below<R: RngCore + ?Sized>(bound: &BigUint, rng: &mut R) -> BigUint {
    let bits = bound.bits();
    if bits <= 1 {
        return BigUint::zero();
    }

    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;
    let mut buf = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xff >> excess;

        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < bound {
            return candidate;
        }
    }
}
