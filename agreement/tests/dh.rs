//! Diffie-Hellman agreement credentials tests.

use agreement::{
    AgreementCredentials, AsymmetricKey, Certificate, DhParameters, DhPrivateKey, DhPublicKey,
    Error, OpaqueKey, TlsAgreementCredentials, TlsCredentials,
};
use agreement::ecfield::num_bigint::BigUint;
use proptest::prelude::*;
use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};

fn certificate() -> Certificate {
    Certificate::new(vec![b"end entity".to_vec(), b"issuer".to_vec()])
}

fn toy() -> DhParameters {
    DhParameters::new(BigUint::from(23u8), BigUint::from(5u8)).unwrap()
}

/// `p = 2^127 - 1`, a Mersenne prime.
fn m127() -> DhParameters {
    let p = (BigUint::from(1u8) << 127u32) - BigUint::from(1u8);
    DhParameters::new(p, BigUint::from(3u8)).unwrap()
}

fn credentials(key: &DhPrivateKey) -> AgreementCredentials {
    AgreementCredentials::new(certificate(), key.clone().into()).unwrap()
}

fn public(key: &DhPrivateKey) -> AsymmetricKey {
    key.public_key().unwrap().into()
}

#[test]
fn toy_agreement_is_symmetric() {
    let alice = DhPrivateKey::new(toy(), &BigUint::from(6u8)).unwrap();
    let bob = DhPrivateKey::new(toy(), &BigUint::from(15u8)).unwrap();

    let alice_shared = credentials(&alice).generate_agreement(&public(&bob)).unwrap();
    let bob_shared = credentials(&bob).generate_agreement(&public(&alice)).unwrap();

    // 5^(6 * 15) mod 23 = 2
    assert_eq!(alice_shared.raw_secret_bytes(), [0x02]);
    assert_eq!(bob_shared.raw_secret_bytes(), [0x02]);
}

#[test]
fn repeated_agreement_is_deterministic() {
    let mut rng = ChaCha20Rng::seed_from_u64(127);
    let alice = DhPrivateKey::generate(m127(), &mut rng);
    let bob = DhPrivateKey::generate(m127(), &mut rng);

    let mut credentials = credentials(&alice);
    let peer = public(&bob);
    let first = credentials.generate_agreement(&peer).unwrap();

    for _ in 0..4 {
        let again = credentials.generate_agreement(&peer).unwrap();
        assert_eq!(again.raw_secret_bytes(), first.raw_secret_bytes());
    }
}

#[test]
fn secret_is_minimal_big_endian() {
    let alice = DhPrivateKey::new(m127(), &BigUint::from(2u8)).unwrap();
    let peer = DhPublicKey::new(m127(), BigUint::from(0x0100u16)).unwrap();

    // (2^8)^2 = 2^16
    let shared = credentials(&alice).generate_agreement(&peer.into()).unwrap();
    assert_eq!(shared.raw_secret_bytes(), [0x01, 0x00, 0x00]);
}

#[test]
fn exposes_certificate_and_strategy() {
    let alice = DhPrivateKey::new(toy(), &BigUint::from(6u8)).unwrap();
    let credentials = credentials(&alice);

    assert_eq!(credentials.certificate(), &certificate());
    assert_eq!(credentials.certificate().len(), 2);
    assert_eq!(credentials.strategy().algorithm(), "DH");
    assert!(credentials.private_key().is_private());
}

#[test]
fn rejects_empty_certificate() {
    let alice = DhPrivateKey::new(toy(), &BigUint::from(6u8)).unwrap();

    assert_eq!(
        AgreementCredentials::new(Certificate::empty(), alice.into()).unwrap_err(),
        Error::InvalidArgument {
            argument: "client_certificate",
            reason: "cannot be empty",
        }
    );
}

#[test]
fn rejects_public_key() {
    let alice = DhPrivateKey::new(toy(), &BigUint::from(6u8)).unwrap();

    assert_eq!(
        AgreementCredentials::new(certificate(), public(&alice)).unwrap_err(),
        Error::InvalidArgument {
            argument: "client_private_key",
            reason: "must be private",
        }
    );

    assert_eq!(
        AgreementCredentials::new(certificate(), OpaqueKey::new("RsaKey", false).into())
            .unwrap_err(),
        Error::InvalidArgument {
            argument: "client_private_key",
            reason: "must be private",
        }
    );
}

#[test]
fn rejects_unsupported_key_type() {
    let err = AgreementCredentials::new(
        certificate(),
        OpaqueKey::new("RsaPrivateCrtKey", true).into(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        Error::UnsupportedKeyType {
            argument: "client_private_key",
            type_name: "RsaPrivateCrtKey",
        }
    );
    assert_eq!(
        err.to_string(),
        "'client_private_key' type not supported: RsaPrivateCrtKey"
    );
}

#[test]
fn failed_agreement_is_an_error() {
    let alice = DhPrivateKey::new(toy(), &BigUint::from(6u8)).unwrap();
    let other = DhPrivateKey::new(m127(), &BigUint::from(6u8)).unwrap();
    let mut credentials = credentials(&alice);

    assert_eq!(
        credentials.generate_agreement(&public(&other)).unwrap_err(),
        Error::DomainMismatch
    );
    assert_eq!(
        credentials.generate_agreement(&alice.clone().into()).unwrap_err(),
        Error::KeyMismatch
    );

    // Credentials stay usable after a failure
    let bob = DhPrivateKey::new(toy(), &BigUint::from(15u8)).unwrap();
    assert_eq!(
        credentials.generate_agreement(&public(&bob)).unwrap().raw_secret_bytes(),
        [0x02]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn agreement_is_symmetric(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let alice = DhPrivateKey::generate(m127(), &mut rng);
        let bob = DhPrivateKey::generate(m127(), &mut rng);

        let alice_shared = credentials(&alice).generate_agreement(&public(&bob));
        let bob_shared = credentials(&bob).generate_agreement(&public(&alice));

        match (alice_shared, bob_shared) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.raw_secret_bytes(), b.raw_secret_bytes()),
            // Both sides reject a degenerate public key, or a shared value of 1
            (a, b) => prop_assert_eq!(a.is_err(), b.is_err()),
        }
    }
}
