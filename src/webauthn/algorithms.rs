//! Signature algorithm policy
//!
//! `pubKeyCredParams` is ordered from most to least preferred and the client
//! picks the first entry its authenticator supports, so the most broadly
//! supported algorithm must stay first when this list grows.

use serde::{Deserialize, Serialize};

use super::types::PublicKeyCredentialType;

/// COSE algorithm identifiers (IANA "COSE Algorithms" registry)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(into = "i64", try_from = "i64")]
pub enum COSEAlgorithm {
    /// ECDSA w/ SHA-256 on P-256
    ES256,
    /// ECDSA w/ SHA-384
    ES384,
    /// ECDSA w/ SHA-512
    ES512,
    /// `EdDSA`
    EdDSA,
    /// RSASSA-PSS w/ SHA-256
    PS256,
    /// RSASSA-PKCS1-v1_5 w/ SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 w/ SHA-1, legacy TPM attestation only
    RS1,
}

impl COSEAlgorithm {
    /// The signed registry identifier
    #[must_use]
    pub const fn identifier(self) -> i64 {
        match self {
            Self::ES256 => -7,
            Self::EdDSA => -8,
            Self::ES384 => -35,
            Self::ES512 => -36,
            Self::PS256 => -37,
            Self::RS256 => -257,
            Self::RS1 => -65535,
        }
    }
}

impl From<COSEAlgorithm> for i64 {
    fn from(alg: COSEAlgorithm) -> Self {
        alg.identifier()
    }
}

impl TryFrom<i64> for COSEAlgorithm {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -7 => Ok(Self::ES256),
            -8 => Ok(Self::EdDSA),
            -35 => Ok(Self::ES384),
            -36 => Ok(Self::ES512),
            -37 => Ok(Self::PS256),
            -257 => Ok(Self::RS256),
            -65535 => Ok(Self::RS1),
            other => Err(format!("unsupported COSE algorithm identifier {other}")),
        }
    }
}

/// Public key credential parameters
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKeyCredentialParameters {
    #[serde(rename = "type")]
    pub r#type: PublicKeyCredentialType, // Always "public-key"
    pub alg: COSEAlgorithm,
}

impl PublicKeyCredentialParameters {
    #[must_use]
    pub const fn public_key(alg: COSEAlgorithm) -> Self {
        Self {
            r#type: PublicKeyCredentialType::PublicKey,
            alg,
        }
    }
}

/// External (roaming) authenticators support ES256
pub const ES256: PublicKeyCredentialParameters =
    PublicKeyCredentialParameters::public_key(COSEAlgorithm::ES256);

/// Windows Hello supports RS256
pub const RS256: PublicKeyCredentialParameters =
    PublicKeyCredentialParameters::public_key(COSEAlgorithm::RS256);

static PREFERRED_ALGORITHMS: [PublicKeyCredentialParameters; 2] = [ES256, RS256];

/// Supported signature algorithms in priority order
#[must_use]
pub fn preferred_algorithms() -> &'static [PublicKeyCredentialParameters] {
    &PREFERRED_ALGORITHMS
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_es256_precedes_rs256() {
        let algorithms = preferred_algorithms();
        assert!(!algorithms.is_empty());
        assert_eq!(algorithms[0].alg, COSEAlgorithm::ES256);
        assert_eq!(algorithms[1].alg, COSEAlgorithm::RS256);
        assert!(algorithms
            .iter()
            .all(|p| p.r#type == PublicKeyCredentialType::PublicKey));
    }

    #[test]
    fn test_policy_is_stable() {
        assert_eq!(preferred_algorithms(), preferred_algorithms());
    }

    #[test]
    fn test_wire_shape() {
        assert_eq!(
            serde_json::to_value(preferred_algorithms()).unwrap(),
            json!([
                {"type": "public-key", "alg": -7},
                {"type": "public-key", "alg": -257}
            ])
        );
    }

    #[test]
    fn test_identifier_round_trip() {
        for alg in [
            COSEAlgorithm::ES256,
            COSEAlgorithm::ES384,
            COSEAlgorithm::ES512,
            COSEAlgorithm::EdDSA,
            COSEAlgorithm::PS256,
            COSEAlgorithm::RS256,
            COSEAlgorithm::RS1,
        ] {
            assert_eq!(COSEAlgorithm::try_from(alg.identifier()), Ok(alg));
        }
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        let result: Result<PublicKeyCredentialParameters, _> =
            serde_json::from_value(json!({"type": "public-key", "alg": -1}));
        assert!(result.is_err());
    }
}
