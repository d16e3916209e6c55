//! Elliptic Curve Diffie-Hellman agreement.
//!
//! The shared value is the x-coordinate of `[d] Q` for the peer's public point
//! `Q` and the local private scalar `d`, as a canonical integer. For binary
//! curves this is the coefficient bit vector of the x-coordinate.

use crate::{AsymmetricKey, BasicAgreement, EcPrivateKey, Error, Result};
use ecfield::num_bigint::BigUint;

/// Elliptic Curve Diffie-Hellman [`BasicAgreement`].
#[derive(Clone, Debug, Default)]
pub struct EcdhBasicAgreement {
    key: Option<EcPrivateKey>,
}

impl EcdhBasicAgreement {
    /// Create an uninitialized agreement.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BasicAgreement for EcdhBasicAgreement {
    fn init(&mut self, private_key: &AsymmetricKey) -> Result<()> {
        match private_key {
            AsymmetricKey::EcPrivate(key) => {
                self.key = Some(key.clone());
                Ok(())
            }
            _ => Err(Error::KeyMismatch),
        }
    }

    fn calculate_agreement(&self, peer_public_key: &AsymmetricKey) -> Result<BigUint> {
        let key = self.key.as_ref().ok_or(Error::NotInitialized)?;

        let AsymmetricKey::EcPublic(peer) = peer_public_key else {
            return Err(Error::KeyMismatch);
        };

        if peer.domain() != key.domain() {
            return Err(Error::DomainMismatch);
        }

        let curve = key.domain().curve();
        let shared = curve.multiply(peer.q(), &key.scalar())?;

        shared
            .x()
            .map(|x| x.to_canonical())
            .ok_or(Error::PointAtInfinity)
    }
}

#[cfg(test)]
mod tests {
    use super::EcdhBasicAgreement;
    use crate::{
        AgreementCredentials, AsymmetricKey, BasicAgreement, Certificate, DhParameters,
        DhPrivateKey, EcDomainParameters, EcPrivateKey, EcPublicKey, Error, OpaqueKey,
        TlsAgreementCredentials,
        ec::{AffinePoint, Curve},
    };
    use alloc::vec;
    use ecfield::{Field, num_bigint::BigUint};

    /// Domain over a small curve whose `size`-element field is enumerated,
    /// using a point of largest order as the generator.
    fn domain(curve: Curve, size: u64) -> EcDomainParameters {
        let field = curve.field();
        let mut points = vec![AffinePoint::Identity];

        for x in 0..size {
            for y in 0..size {
                if let Ok(point) = curve.point(field.from_u64(x), field.from_u64(y)) {
                    points.push(point);
                }
            }
        }

        let order_of = |point: &AffinePoint| {
            let mut acc = point.clone();
            let mut order = 1u64;

            while !acc.is_identity() {
                acc = curve.add(&acc, point).unwrap();
                order += 1;
            }

            order
        };

        let (order, generator) = points
            .iter()
            .map(|point| (order_of(point), point.clone()))
            .max_by_key(|(order, _)| *order)
            .unwrap();
        let cofactor = points.len() as u64 / order;

        EcDomainParameters::new(
            curve,
            generator,
            BigUint::from(order),
            BigUint::from(cofactor),
        )
        .unwrap()
    }

    /// `y^2 = x^3 + x + 1` over `F_23`.
    fn e23() -> EcDomainParameters {
        let field = Field::prime(BigUint::from(23u8)).unwrap();
        domain(Curve::new(field.from_u64(1), field.from_u64(1)).unwrap(), 23)
    }

    /// `y^2 + xy = x^3 + 1` over `F_2^5`, `f(z) = z^5 + z^2 + 1`.
    fn e32() -> EcDomainParameters {
        let field = Field::trinomial(5, 2).unwrap();
        domain(Curve::new(field.zero(), field.one()).unwrap(), 32)
    }

    fn private_key(domain: EcDomainParameters, d: u8) -> AsymmetricKey {
        EcPrivateKey::new(domain, &BigUint::from(d)).unwrap().into()
    }

    fn public_key(domain: EcDomainParameters, d: u8) -> AsymmetricKey {
        EcPrivateKey::new(domain, &BigUint::from(d))
            .unwrap()
            .public_key()
            .unwrap()
            .into()
    }

    /// `(0, sqrt(b))`, the point of order 2 on a binary curve.
    fn order_two_point(domain: &EcDomainParameters) -> AsymmetricKey {
        let curve = domain.curve();
        let y = curve.b().sqrt().unwrap();
        let point = curve.point(curve.field().zero(), y).unwrap();

        EcPublicKey::new(domain.clone(), point).unwrap().into()
    }

    #[test]
    fn shared_value_is_x_coordinate() {
        for domain in [e23(), e32()] {
            let mut agreement = EcdhBasicAgreement::new();
            agreement.init(&private_key(domain.clone(), 3)).unwrap();

            let peer = EcPrivateKey::new(domain.clone(), &BigUint::from(2u8)).unwrap();
            let expected = domain
                .curve()
                .multiply(domain.generator(), &BigUint::from(6u8))
                .unwrap();

            assert_eq!(
                agreement
                    .calculate_agreement(&peer.public_key().unwrap().into())
                    .unwrap(),
                expected.x().unwrap().to_canonical()
            );
        }
    }

    #[test]
    fn not_initialized() {
        assert_eq!(
            EcdhBasicAgreement::new().calculate_agreement(&public_key(e23(), 2)),
            Err(Error::NotInitialized)
        );
    }

    #[test]
    fn key_mismatch() {
        let dh_params = DhParameters::new(BigUint::from(23u8), BigUint::from(5u8)).unwrap();
        let dh_key = DhPrivateKey::new(dh_params, &BigUint::from(6u8)).unwrap();

        let mut agreement = EcdhBasicAgreement::new();
        assert_eq!(agreement.init(&dh_key.clone().into()), Err(Error::KeyMismatch));
        assert_eq!(agreement.init(&public_key(e23(), 2)), Err(Error::KeyMismatch));
        assert_eq!(
            agreement.init(&OpaqueKey::new("EdPrivateKey", true).into()),
            Err(Error::KeyMismatch)
        );

        agreement.init(&private_key(e23(), 3)).unwrap();
        assert_eq!(
            agreement.calculate_agreement(&private_key(e23(), 2)),
            Err(Error::KeyMismatch)
        );
        assert_eq!(
            agreement.calculate_agreement(&dh_key.public_key().unwrap().into()),
            Err(Error::KeyMismatch)
        );
    }

    #[test]
    fn domain_mismatch() {
        let mut agreement = EcdhBasicAgreement::new();
        agreement.init(&private_key(e23(), 3)).unwrap();
        assert_eq!(
            agreement.calculate_agreement(&public_key(e32(), 2)),
            Err(Error::DomainMismatch)
        );
    }

    #[test]
    fn identity_result_is_rejected() {
        let domain = e32();
        let peer = order_two_point(&domain);

        // Even multiples of a point of order 2 are the identity
        for d in [2u8, 4, 6] {
            let mut agreement = EcdhBasicAgreement::new();
            agreement.init(&private_key(domain.clone(), d)).unwrap();
            assert_eq!(agreement.calculate_agreement(&peer), Err(Error::PointAtInfinity));

            let mut credentials = AgreementCredentials::new(
                Certificate::new(vec![vec![0x30]]),
                private_key(domain.clone(), d),
            )
            .unwrap();
            assert_eq!(
                credentials.generate_agreement(&peer).unwrap_err(),
                Error::PointAtInfinity
            );
        }

        // Odd multiples are the point itself, with x = 0
        let mut credentials = AgreementCredentials::new(
            Certificate::new(vec![vec![0x30]]),
            private_key(domain, 3),
        )
        .unwrap();
        assert_eq!(
            credentials.generate_agreement(&peer).unwrap().raw_secret_bytes(),
            [0x00]
        );
    }
}
