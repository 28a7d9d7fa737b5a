//! `WebAuthn` core types
//!
//! Serializable entity descriptors used in `PublicKeyCredentialCreationOptions`.
//! Binary fields are raw bytes in memory and base64url on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::encoding::base64url;
use super::errors::WebAuthnError;

/// Implements `as_str`, `Display` and `FromStr` using the exact wire strings
macro_rules! wire_strings {
    ($ty:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// The wire representation of this value
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = WebAuthnError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(WebAuthnError::ConfigurationError(format!(
                        "unknown {} `{other}`",
                        $kind
                    ))),
                }
            }
        }
    };
}

/// Credential type; `WebAuthn` defines only `"public-key"`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PublicKeyCredentialType {
    #[default]
    #[serde(rename = "public-key")]
    PublicKey,
}

wire_strings!(PublicKeyCredentialType, "credential type", {
    PublicKey => "public-key",
});

/// Envelope status reported alongside the options
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Ok,
    Error,
}

wire_strings!(Status, "status", {
    Ok => "ok",
    Error => "error",
});

/// Attestation conveyance preference
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttestationConveyancePreference {
    #[default]
    None,
    Indirect,
    Direct,
}

wire_strings!(AttestationConveyancePreference, "attestation preference", {
    None => "none",
    Indirect => "indirect",
    Direct => "direct",
});

/// Authenticator attachment modality
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AuthenticatorAttachment {
    Platform,
    CrossPlatform,
}

wire_strings!(AuthenticatorAttachment, "authenticator attachment", {
    Platform => "platform",
    CrossPlatform => "cross-platform",
});

/// User verification requirement
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserVerificationRequirement {
    Required,
    Preferred,
    Discouraged,
}

wire_strings!(UserVerificationRequirement, "user verification requirement", {
    Required => "required",
    Preferred => "preferred",
    Discouraged => "discouraged",
});

/// Transport hint for an existing credential
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AuthenticatorTransport {
    Usb,
    Nfc,
    Ble,
    Internal,
    Hybrid,
}

wire_strings!(AuthenticatorTransport, "authenticator transport", {
    Usb => "usb",
    Nfc => "nfc",
    Ble => "ble",
    Internal => "internal",
    Hybrid => "hybrid",
});

/// `WebAuthn` relying party information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawRelyingParty")]
pub struct RelyingParty {
    name: String, // Display name
    id: String,   // Domain name (e.g., "example.com")
}

impl RelyingParty {
    /// Create relying party information
    ///
    /// No normalization is applied; the domain must already be the effective
    /// registrable domain.
    ///
    /// # Errors
    ///
    /// Returns `WebAuthnError::InvalidEntity` if `id` or `name` is empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, WebAuthnError> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() {
            return Err(WebAuthnError::InvalidEntity { field: "rp.id" });
        }
        if name.is_empty() {
            return Err(WebAuthnError::InvalidEntity { field: "rp.name" });
        }
        Ok(Self { name, id })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `WebAuthn` user entity
///
/// `id` is the user handle. Authorization decisions key on it alone, never on
/// `name` or `display_name`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawUserEntity")]
pub struct UserEntity {
    name: String,
    #[serde(with = "base64url")]
    id: Vec<u8>,
    #[serde(rename = "displayName")]
    display_name: String,
}

impl UserEntity {
    /// Create a user entity
    ///
    /// # Errors
    ///
    /// Returns `WebAuthnError::InvalidEntity` if the handle or either name is empty.
    pub fn new(
        id: impl Into<Vec<u8>>,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, WebAuthnError> {
        let id = id.into();
        let name = name.into();
        let display_name = display_name.into();
        if id.is_empty() {
            return Err(WebAuthnError::InvalidEntity { field: "user.id" });
        }
        if name.is_empty() {
            return Err(WebAuthnError::InvalidEntity { field: "user.name" });
        }
        if display_name.is_empty() {
            return Err(WebAuthnError::InvalidEntity {
                field: "user.displayName",
            });
        }
        Ok(Self {
            name,
            id,
            display_name,
        })
    }

    #[must_use]
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Public key credential descriptor, used for the exclusion list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawCredentialDescriptor")]
pub struct PublicKeyCredentialDescriptor {
    #[serde(rename = "type")]
    r#type: PublicKeyCredentialType,
    #[serde(with = "base64url")]
    id: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transports: Option<Vec<AuthenticatorTransport>>,
}

impl PublicKeyCredentialDescriptor {
    /// Describe an existing credential by its raw id
    ///
    /// # Errors
    ///
    /// Returns `WebAuthnError::InvalidEntity` if the credential id is empty.
    pub fn new(id: impl Into<Vec<u8>>) -> Result<Self, WebAuthnError> {
        let id = id.into();
        if id.is_empty() {
            return Err(WebAuthnError::InvalidEntity {
                field: "excludeCredentials.id",
            });
        }
        Ok(Self {
            r#type: PublicKeyCredentialType::PublicKey,
            id,
            transports: None,
        })
    }

    /// Attach transport hints; duplicates are dropped, first occurrence wins
    #[must_use]
    pub fn with_transports(
        mut self,
        transports: impl IntoIterator<Item = AuthenticatorTransport>,
    ) -> Self {
        let mut unique: Vec<AuthenticatorTransport> = Vec::new();
        for transport in transports {
            if !unique.contains(&transport) {
                unique.push(transport);
            }
        }
        self.transports = Some(unique);
        self
    }

    #[must_use]
    pub fn credential_type(&self) -> PublicKeyCredentialType {
        self.r#type
    }

    #[must_use]
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    #[must_use]
    pub fn transports(&self) -> Option<&[AuthenticatorTransport]> {
        self.transports.as_deref()
    }
}

// Wire shapes parsed before the constructor checks run

#[derive(Deserialize)]
struct RawRelyingParty {
    name: String,
    id: String,
}

impl TryFrom<RawRelyingParty> for RelyingParty {
    type Error = WebAuthnError;

    fn try_from(raw: RawRelyingParty) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.name)
    }
}

#[derive(Deserialize)]
struct RawUserEntity {
    name: String,
    #[serde(deserialize_with = "base64url::deserialize")]
    id: Vec<u8>,
    #[serde(rename = "displayName")]
    display_name: String,
}

impl TryFrom<RawUserEntity> for UserEntity {
    type Error = WebAuthnError;

    fn try_from(raw: RawUserEntity) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.name, raw.display_name)
    }
}

#[derive(Deserialize)]
struct RawCredentialDescriptor {
    #[serde(rename = "type")]
    r#type: PublicKeyCredentialType,
    #[serde(deserialize_with = "base64url::deserialize")]
    id: Vec<u8>,
    #[serde(default)]
    transports: Option<Vec<AuthenticatorTransport>>,
}

impl TryFrom<RawCredentialDescriptor> for PublicKeyCredentialDescriptor {
    type Error = WebAuthnError;

    fn try_from(raw: RawCredentialDescriptor) -> Result<Self, Self::Error> {
        let mut descriptor = Self::new(raw.id)?;
        descriptor.r#type = raw.r#type;
        Ok(match raw.transports {
            Some(transports) => descriptor.with_transports(transports),
            None => descriptor,
        })
    }
}

/// Authenticator selection criteria, decided by caller policy
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthenticatorSelectionCriteria {
    #[serde(
        rename = "authenticatorAttachment",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub authenticator_attachment: Option<AuthenticatorAttachment>,
    #[serde(rename = "requireResidentKey", default)]
    pub require_resident_key: bool,
    #[serde(
        rename = "userVerification",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_verification: Option<UserVerificationRequirement>,
}

/// Treats an explicit `null` the same as an absent list
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relying_party_requires_id_and_name() {
        assert_eq!(
            RelyingParty::new("", "Example").unwrap_err().field(),
            Some("rp.id")
        );
        assert_eq!(
            RelyingParty::new("example.com", "").unwrap_err().field(),
            Some("rp.name")
        );
    }

    #[test]
    fn test_relying_party_is_not_normalized() {
        let rp = RelyingParty::new("Example.COM ", " Example ").unwrap();
        assert_eq!(rp.id(), "Example.COM ");
        assert_eq!(rp.name(), " Example ");
    }

    #[test]
    fn test_user_entity_validation() {
        assert_eq!(
            UserEntity::new(Vec::<u8>::new(), "alice", "Alice").unwrap_err(),
            WebAuthnError::InvalidEntity { field: "user.id" }
        );
        assert_eq!(
            UserEntity::new(vec![1u8], "", "Alice").unwrap_err().field(),
            Some("user.name")
        );
        assert_eq!(
            UserEntity::new(vec![1u8], "alice", "").unwrap_err().field(),
            Some("user.displayName")
        );
    }

    #[test]
    fn test_user_entity_wire_shape() {
        let user = UserEntity::new(vec![0xfb_u8, 0xff], "alice", "Alice").unwrap();
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({"name": "alice", "id": "-_8", "displayName": "Alice"})
        );
    }

    #[test]
    fn test_descriptor_wire_shape() {
        let descriptor = PublicKeyCredentialDescriptor::new(b"cred".to_vec()).unwrap();
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({"type": "public-key", "id": "Y3JlZA"})
        );

        let descriptor = descriptor.with_transports([
            AuthenticatorTransport::Usb,
            AuthenticatorTransport::Nfc,
            AuthenticatorTransport::Usb,
        ]);
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({"type": "public-key", "id": "Y3JlZA", "transports": ["usb", "nfc"]})
        );
    }

    #[test]
    fn test_descriptor_rejects_malformed_id() {
        let result: Result<PublicKeyCredentialDescriptor, _> =
            serde_json::from_value(json!({"type": "public-key", "id": "Y3+lZA"}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Malformed encoding"), "{err}");
    }

    #[test]
    fn test_descriptor_requires_id() {
        assert!(PublicKeyCredentialDescriptor::new(Vec::<u8>::new()).is_err());
    }

    #[test]
    fn test_parsed_entities_are_checked() {
        let err = serde_json::from_value::<RelyingParty>(json!({"name": "Example", "id": ""}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("rp.id"), "{err}");

        let err = serde_json::from_value::<RelyingParty>(json!({"name": "", "id": "example.com"}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("rp.name"), "{err}");

        let err = serde_json::from_value::<UserEntity>(
            json!({"name": "alice", "id": "", "displayName": "Alice"}),
        )
        .unwrap_err()
        .to_string();
        assert!(err.contains("user.id"), "{err}");

        let err = serde_json::from_value::<UserEntity>(
            json!({"name": "alice", "id": "AQ", "displayName": ""}),
        )
        .unwrap_err()
        .to_string();
        assert!(err.contains("user.displayName"), "{err}");

        let err = serde_json::from_value::<PublicKeyCredentialDescriptor>(
            json!({"type": "public-key", "id": ""}),
        )
        .unwrap_err()
        .to_string();
        assert!(err.contains("excludeCredentials.id"), "{err}");
    }

    #[test]
    fn test_parsed_descriptor_drops_duplicate_transports() {
        let descriptor: PublicKeyCredentialDescriptor = serde_json::from_value(json!({
            "type": "public-key",
            "id": "Y3JlZA",
            "transports": ["usb", "nfc", "usb"]
        }))
        .unwrap();
        assert_eq!(
            descriptor.transports(),
            Some(&[AuthenticatorTransport::Usb, AuthenticatorTransport::Nfc][..])
        );

        let descriptor: PublicKeyCredentialDescriptor =
            serde_json::from_value(json!({"type": "public-key", "id": "Y3JlZA"})).unwrap();
        assert_eq!(descriptor.transports(), None);
    }

    #[test]
    fn test_selection_omits_unset_fields() {
        let selection = AuthenticatorSelectionCriteria::default();
        assert_eq!(
            serde_json::to_value(&selection).unwrap(),
            json!({"requireResidentKey": false})
        );

        let selection = AuthenticatorSelectionCriteria {
            authenticator_attachment: Some(AuthenticatorAttachment::CrossPlatform),
            require_resident_key: true,
            user_verification: Some(UserVerificationRequirement::Required),
        };
        assert_eq!(
            serde_json::to_value(&selection).unwrap(),
            json!({
                "authenticatorAttachment": "cross-platform",
                "requireResidentKey": true,
                "userVerification": "required"
            })
        );
    }

    #[test]
    fn test_wire_strings_parse() {
        assert_eq!(
            "cross-platform".parse::<AuthenticatorAttachment>().unwrap(),
            AuthenticatorAttachment::CrossPlatform
        );
        assert_eq!(
            "direct".parse::<AttestationConveyancePreference>().unwrap(),
            AttestationConveyancePreference::Direct
        );
        assert!("Preferred".parse::<UserVerificationRequirement>().is_err());
        assert_eq!(AuthenticatorTransport::Hybrid.to_string(), "hybrid");
    }
}
